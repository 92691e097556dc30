//! Fuzzy-rough nearest-neighbor scoring.
//!
//! For a query row and a class `c`, the neighbors give two approximations:
//!
//! - **upper**: the strongest similarity to any neighbor labeled `c`
//!   (`0` if there is none),
//! - **lower**: the weakest complement `1 - similarity` over neighbors of
//!   every other label (`1` if there is none).
//!
//! The raw class score is their mean, and each row is rescaled to sum to one
//! with [`normalize_rows`].

use frnn_core::{ScoreMatrix, clamp01, normalize_rows};
use frnn_knn::NeighborSet;
use tracing::debug;

use crate::error::ScoreError;
use crate::labels::label_of;

/// Similarity in `[0, 1]` for a neighbor distance; invalid distances give `0`.
fn similarity(distance: f64) -> f64 {
    if distance >= 0.0 && distance.is_finite() {
        clamp01(1.0 / (1.0 + distance))
    } else {
        0.0
    }
}

/// Upper and lower approximation of one class over a row of neighbors.
fn approximations(neighbors: &[(usize, f64)], class: usize) -> (f64, f64) {
    let mut upper = 0.0;
    let mut lower = 1.0;
    for &(label, sim) in neighbors {
        if label == class {
            upper = if sim > upper { sim } else { upper };
        } else {
            let complement = clamp01(1.0 - clamp01(sim));
            lower = if complement < lower { complement } else { lower };
        }
    }
    (upper, lower)
}

/// Scores every query row with fuzzy-rough lower/upper approximations.
///
/// Every output row has `n_classes` columns and sums to `1`. A query with no
/// neighbors has a raw score of `0.5` for every class and so comes out
/// uniform.
///
/// A negative or non-finite distance has similarity `0`.
///
/// Labels `>= n_classes` are accepted: they match no scored class and only
/// lower the other classes' lower approximations.
///
/// # Errors
///
/// Returns [`ScoreError::NeighborIndexOutOfRange`] if a neighbor index is not
/// a valid position in `labels`.
///
/// # Example
///
/// ```
/// use frnn_knn::NeighborSet;
/// use frnn_score::frnn_score;
///
/// let neighbors = NeighborSet::new(vec![vec![0, 1]], vec![vec![0.0, 1.0]]).unwrap();
/// let scores = frnn_score(&neighbors, &[0, 1], 2).unwrap();
///
/// assert!(scores[0][0] > scores[0][1]);
/// assert!((scores[0][0] + scores[0][1] - 1.0).abs() < 1e-12);
/// ```
#[tracing::instrument(skip(neighbors, labels), fields(n_queries = neighbors.n_queries()))]
pub fn frnn_score(
    neighbors: &NeighborSet,
    labels: &[usize],
    n_classes: usize,
) -> Result<ScoreMatrix, ScoreError> {
    let mut raw = Vec::with_capacity(neighbors.n_queries());
    let mut row_neighbors = Vec::new();

    for q in 0..neighbors.n_queries() {
        row_neighbors.clear();
        for (index, distance) in neighbors.row(q) {
            row_neighbors.push((label_of(labels, q, index)?, similarity(distance)));
        }

        let row: Vec<f64> = (0..n_classes)
            .map(|class| {
                let (upper, lower) = approximations(&row_neighbors, class);
                clamp01(0.5 * (lower + upper))
            })
            .collect();
        raw.push(row);
    }

    debug!(n_classes, "frnn raw scores computed");
    Ok(normalize_rows(&raw))
}
