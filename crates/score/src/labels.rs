//! Label helpers.

/// Number of score columns implied by `labels`: the largest label plus one.
///
/// Returns `0` for an empty slice. Gaps in the label range are not checked,
/// so `[0, 5]` gives six classes.
///
/// ```
/// use frnn_score::n_classes;
///
/// assert_eq!(n_classes(&[0, 0, 1, 1, 2, 2]), 3);
/// assert_eq!(n_classes(&[]), 0);
/// ```
pub fn n_classes(labels: &[usize]) -> usize {
    labels.iter().copied().max().map_or(0, |max| max + 1)
}

/// Looks up the label of neighbor `index` for query row `query`.
pub(crate) fn label_of(
    labels: &[usize],
    query: usize,
    index: usize,
) -> Result<usize, crate::ScoreError> {
    labels
        .get(index)
        .copied()
        .ok_or(crate::ScoreError::NeighborIndexOutOfRange {
            query,
            index,
            n_labels: labels.len(),
        })
}
