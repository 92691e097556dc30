//! Per-column range normalization into `[0, 1]`.
//!
//! The normalizer is split into two pure steps:
//!
//! 1. **Fit** per-column finite minima and maxima on a reference matrix
//!    ([`fit_normalizer`]) producing immutable [`NormalizationParams`].
//! 2. **Transform** any matrix with those parameters ([`transform`]),
//!    including the reference matrix itself.
//!
//! ```text
//! scaled = clamp01(safe_divide(value - min, max - min + eps, 0.0))
//! ```
//!
//! Non-finite features contribute `0.0`, constant columns are guarded by the
//! `eps` term and the division guard, and every output value is finite and
//! inside `[0, 1]`.
//!
//! # Quick start
//!
//! ```
//! use frnn_core::FeatureMatrix;
//! use frnn_normalize::{fit_normalizer, transform};
//!
//! let reference = FeatureMatrix::from_rows(&[vec![0.0, 10.0], vec![2.0, 20.0]]).unwrap();
//! let params = fit_normalizer(&reference, 1e-12);
//! let scaled = transform(&reference, &params).unwrap();
//!
//! assert_eq!(scaled.row(0)[0], 0.0);
//! assert!((scaled.row(1)[0] - 1.0).abs() < 1e-9);
//! ```

mod error;
pub(crate) mod fit;
mod params;
pub(crate) mod transform;

pub use error::NormalizeError;
pub use fit::fit_normalizer;
pub use params::NormalizationParams;
pub use transform::transform;
