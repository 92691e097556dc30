//! Shared value types and numeric guards for the FRNN reference pipeline.
//!
//! Every stage of the pipeline exchanges plain immutable data:
//!
//! ```text
//! FeatureMatrix ──fit/transform──▶ FeatureMatrix ──query_knn──▶ NeighborSet ──score──▶ ScoreMatrix
//! ```
//!
//! This crate owns the two ends of that chain ([`FeatureMatrix`] and
//! [`ScoreMatrix`]) plus the guarded arithmetic every stage relies on so that
//! no NaN or infinity ever leaves a component.

pub mod error;
pub mod matrix;
pub mod numeric;

pub use error::MatrixError;
pub use matrix::FeatureMatrix;
pub use numeric::{clamp01, normalize_rows, safe_divide};

/// Per-query class scores: one row per query, one column per class index.
pub type ScoreMatrix = Vec<Vec<f64>>;
