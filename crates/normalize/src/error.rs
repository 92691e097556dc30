//! Error types for the frnn-normalize crate.

/// Error type for fallible normalization operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Returned when a non-empty matrix is transformed with parameters fitted
    /// on a different number of columns.
    #[error("matrix has {found} columns, normalization parameters expect {expected}")]
    DimensionMismatch {
        /// Column count of the fitted parameters.
        expected: usize,
        /// Column count of the matrix being transformed.
        found: usize,
    },
}
