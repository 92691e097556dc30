//! Error types for the frnn-knn crate.

/// Error type for all fallible operations in the frnn-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when two vectors (or two matrices' rows) differ in length.
    #[error("dimension mismatch: left has {left} features, right has {right}")]
    DimensionMismatch {
        /// Length of the left-hand vector.
        left: usize,
        /// Length of the right-hand vector.
        right: usize,
    },

    /// Returned when a value fed to the distance computation is NaN or infinite.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },

    /// Returned when a neighbor set is built from index and distance tables
    /// with a different number of query rows.
    #[error("neighbor tables disagree: {indices} index rows, {distances} distance rows")]
    NeighborRowsMismatch {
        /// Number of index rows.
        indices: usize,
        /// Number of distance rows.
        distances: usize,
    },

    /// Returned when one query row has a different number of indices and distances.
    #[error("query row {row} has {indices} indices but {distances} distances")]
    NeighborLengthMismatch {
        /// Query row index.
        row: usize,
        /// Number of indices in that row.
        indices: usize,
        /// Number of distances in that row.
        distances: usize,
    },

    /// Returned when a metric name is not recognized.
    #[error("unknown metric {name:?}, only \"euclidean\" is supported")]
    UnknownMetric {
        /// The unrecognized name.
        name: String,
    },
}
