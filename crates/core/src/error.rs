//! Error types for the frnn-core crate.

/// Error returned when a [`FeatureMatrix`](crate::FeatureMatrix) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Returned when a row's width differs from the width of the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// Returned when a flat buffer cannot be split into rows of `n_cols`.
    #[error("buffer length {len} is not divisible by n_cols {n_cols}")]
    ShapeMismatch {
        /// Length of the flat buffer.
        len: usize,
        /// Requested number of columns.
        n_cols: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_ragged_row() {
        let e = MatrixError::RaggedRow {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(e.to_string(), "row 2 has 1 columns, expected 3");
    }

    #[test]
    fn error_shape_mismatch() {
        let e = MatrixError::ShapeMismatch { len: 5, n_cols: 2 };
        assert_eq!(e.to_string(), "buffer length 5 is not divisible by n_cols 2");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<MatrixError>();
    }
}
