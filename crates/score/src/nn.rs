//! Distance-weighted nearest-neighbor voting.

use frnn_core::ScoreMatrix;
use frnn_knn::NeighborSet;
use tracing::debug;

use crate::error::ScoreError;
use crate::labels::label_of;

/// Vote weight of a neighbor at distance `d`. A NaN distance casts no vote.
fn vote_weight(distance: f64) -> f64 {
    if distance.is_nan() {
        0.0
    } else if distance <= 0.0 {
        1.0
    } else {
        1.0 / (1.0 + distance)
    }
}

/// Scores every query row by distance-weighted neighbor voting.
///
/// Each neighbor `(i, d)` adds `1 / (1 + d)` (or `1` when `d <= 0`) to the
/// column of its label. The row is then divided by the summed weight. A row
/// whose total weight is zero or non-finite, e.g. one with no neighbors or
/// only infinitely distant ones, stays all zeros and therefore sums to `0`.
///
/// Negative distances vote with weight `1`, an infinite distance with weight
/// `0`, and a NaN distance is skipped as a zero-weight vote, so no NaN reaches
/// the output.
///
/// # Errors
///
/// - [`ScoreError::NeighborIndexOutOfRange`] if a neighbor index is not a
///   valid position in `labels`.
/// - [`ScoreError::LabelOutOfRange`] if a neighbor's label is
///   `>= n_classes`.
///
/// # Example
///
/// ```
/// use frnn_knn::NeighborSet;
/// use frnn_score::nn_score;
///
/// let neighbors = NeighborSet::new(vec![vec![0, 1]], vec![vec![0.0, 1.0]]).unwrap();
/// let scores = nn_score(&neighbors, &[0, 1], 2).unwrap();
///
/// assert!((scores[0][0] - 2.0 / 3.0).abs() < 1e-12);
/// assert!((scores[0][1] - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[tracing::instrument(skip(neighbors, labels), fields(n_queries = neighbors.n_queries()))]
pub fn nn_score(
    neighbors: &NeighborSet,
    labels: &[usize],
    n_classes: usize,
) -> Result<ScoreMatrix, ScoreError> {
    let mut scores = Vec::with_capacity(neighbors.n_queries());
    let mut zero_rows = 0usize;

    for q in 0..neighbors.n_queries() {
        let mut row = vec![0.0; n_classes];
        let mut total: f64 = 0.0;

        for (index, distance) in neighbors.row(q) {
            let label = label_of(labels, q, index)?;
            let slot = row
                .get_mut(label)
                .ok_or(ScoreError::LabelOutOfRange { label, n_classes })?;
            let weight = vote_weight(distance);
            *slot += weight;
            total += weight;
        }

        if total > 0.0 && total.is_finite() {
            for v in row.iter_mut() {
                *v /= total;
            }
        } else {
            zero_rows += 1;
        }
        scores.push(row);
    }

    debug!(zero_rows, "nn scores computed");
    Ok(scores)
}
