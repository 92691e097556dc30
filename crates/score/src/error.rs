//! Scoring error types.

/// Errors raised when neighbor tables and labels do not fit together.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// A neighbor points past the end of the label slice.
    #[error("query row {query}: neighbor index {index} out of range for {n_labels} labels")]
    NeighborIndexOutOfRange {
        /// Query row holding the neighbor.
        query: usize,
        /// The offending reference index.
        index: usize,
        /// Number of labels supplied.
        n_labels: usize,
    },

    /// A neighbor's label has no column in the score matrix.
    #[error("label {label} out of range for {n_classes} classes")]
    LabelOutOfRange {
        /// The offending label.
        label: usize,
        /// Number of score columns.
        n_classes: usize,
    },
}
