//! Exact k-nearest neighbor search with deterministic ordering.
//!
//! Every query row is compared with every reference row by Euclidean
//! distance (brute force, no index structure). Neighbors are ordered by
//! ascending distance with the reference index as tie-break, and truncated to
//! `effective_k = min(k, n_reference)`.
//!
//! # Quick start
//!
//! ```
//! use frnn_core::FeatureMatrix;
//! use frnn_knn::query_knn;
//!
//! let reference = FeatureMatrix::from_rows(&[[0.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
//! let query = FeatureMatrix::from_rows(&[[0.0, 0.0]]).unwrap();
//!
//! let neighbors = query_knn(&reference, &query, 2).unwrap();
//! assert_eq!(neighbors.indices()[0], vec![0, 2]);
//! assert_eq!(neighbors.distances()[0], vec![0.0, 1.0]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! query_knn()
//!   ├─ validate inputs
//!   ├─ distances_to()       (distance.rs)   per query row
//!   └─ select_k_nearest()   (select.rs)     per query row
//! ```
//!
//! For repeated queries, use [`query_knn_with_scratch`] with a reusable
//! [`KnnScratch`] to avoid per-call heap allocation.

pub mod error;
pub mod knn;
pub mod metric;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;

pub use distance::euclidean_distance;
pub use error::KnnError;
pub use knn::{KnnScratch, query_knn, query_knn_with_scratch};
pub use metric::Metric;
pub use result::NeighborSet;
