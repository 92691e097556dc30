//! Class scoring from nearest-neighbor sets.
//!
//! Two aggregators turn a [`NeighborSet`](frnn_knn::NeighborSet) and the
//! reference labels into a [`ScoreMatrix`](frnn_core::ScoreMatrix) with one
//! column per class:
//!
//! - [`nn_score`]: distance-weighted voting, weight `1 / (1 + d)`.
//! - [`frnn_score`]: fuzzy-rough lower/upper approximations, rows rescaled to
//!   sum to one.
//!
//! [`select_class`] reduces either matrix to one predicted class per row.
//!
//! # Quick start
//!
//! ```
//! use frnn_core::FeatureMatrix;
//! use frnn_knn::query_knn;
//! use frnn_score::{frnn_score, n_classes, nn_score, select_class};
//!
//! let reference = FeatureMatrix::from_rows(&[[0.0], [0.1], [1.0], [1.1]]).unwrap();
//! let labels = [0, 0, 1, 1];
//! let query = FeatureMatrix::from_rows(&[[0.05], [0.95]]).unwrap();
//!
//! let neighbors = query_knn(&reference, &query, 3).unwrap();
//! let n = n_classes(&labels);
//! let nn = nn_score(&neighbors, &labels, n).unwrap();
//! let frnn = frnn_score(&neighbors, &labels, n).unwrap();
//!
//! assert_eq!(select_class(&nn), vec![0, 1]);
//! assert_eq!(select_class(&frnn), vec![0, 1]);
//! ```

mod classify;
mod error;
mod frnn;
mod labels;
mod nn;

pub use classify::select_class;
pub use error::ScoreError;
pub use frnn::frnn_score;
pub use labels::n_classes;
pub use nn::nn_score;
