//! Neighbor query entry points and scratch buffer management.

use frnn_core::FeatureMatrix;
use tracing::debug;

use crate::distance::distances_to;
use crate::error::KnnError;
use crate::result::NeighborSet;
use crate::select::select_k_nearest;

/// Pre-allocated scratch buffers for neighbor queries.
///
/// Reuse across multiple calls to [`query_knn_with_scratch`] to avoid
/// repeated per-row heap allocation when the same reference set is queried
/// many times.
///
/// # Example
///
/// ```
/// use frnn_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(200);
/// // Use with query_knn_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// Distances from the current query row to every reference row.
    pub(crate) dists: Vec<f64>,
    /// (distance, index) pairs for sorting.
    pub(crate) pairs: Vec<(f64, usize)>,
    /// Indices of the k nearest neighbors of the current row.
    pub(crate) nn_indices: Vec<usize>,
    /// Distances of the k nearest neighbors of the current row.
    pub(crate) nn_dists: Vec<f64>,
}

impl KnnScratch {
    /// Creates a new scratch buffer with capacity for `max_reference` reference rows.
    pub fn new(max_reference: usize) -> Self {
        Self {
            dists: Vec::with_capacity(max_reference),
            pairs: Vec::with_capacity(max_reference),
            nn_indices: Vec::with_capacity(max_reference),
            nn_dists: Vec::with_capacity(max_reference),
        }
    }
}

/// Validates the matrices for a search that will compute distances.
fn validate_inputs(reference: &FeatureMatrix, query: &FeatureMatrix) -> Result<(), KnnError> {
    if reference.n_cols() != query.n_cols() {
        return Err(KnnError::DimensionMismatch {
            left: query.n_cols(),
            right: reference.n_cols(),
        });
    }
    if !query.is_finite() {
        return Err(KnnError::NonFiniteInput { input: "query" });
    }
    if !reference.is_finite() {
        return Err(KnnError::NonFiniteInput { input: "reference" });
    }
    Ok(())
}

/// Finds the `k` nearest reference rows of every query row.
///
/// This is the simple entry point. For repeated queries, use
/// [`query_knn_with_scratch`] to reuse allocations.
///
/// `effective_k = min(k, reference.n_rows())`. When `effective_k == 0` or
/// the query has no rows, one empty neighbor list per query row is returned
/// without inspecting the matrices. Otherwise each query row is compared with
/// every reference row (brute force) and the first `effective_k` rows by
/// `(distance, index)` are kept.
///
/// # Errors
///
/// Returns [`KnnError::DimensionMismatch`] if the matrices differ in width,
/// and [`KnnError::NonFiniteInput`] if either contains NaN or infinity.
///
/// # Example
///
/// ```
/// use frnn_core::FeatureMatrix;
/// use frnn_knn::query_knn;
///
/// let reference = FeatureMatrix::from_rows(&[[0.0], [1.0], [0.5]]).unwrap();
/// let query = FeatureMatrix::from_rows(&[[0.9]]).unwrap();
///
/// let neighbors = query_knn(&reference, &query, 2).unwrap();
/// assert_eq!(neighbors.indices()[0], vec![1, 2]);
/// ```
pub fn query_knn(
    reference: &FeatureMatrix,
    query: &FeatureMatrix,
    k: usize,
) -> Result<NeighborSet, KnnError> {
    let mut scratch = KnnScratch::new(reference.n_rows());
    query_knn_with_scratch(reference, query, k, &mut scratch)
}

/// Finds the `k` nearest reference rows, reusing pre-allocated scratch buffers.
///
/// Identical to [`query_knn`] but reuses `scratch`. Buffers grow as needed
/// and never shrink.
///
/// # Errors
///
/// Same as [`query_knn`].
#[tracing::instrument(
    skip_all,
    fields(n_reference = reference.n_rows(), n_query = query.n_rows(), k)
)]
pub fn query_knn_with_scratch(
    reference: &FeatureMatrix,
    query: &FeatureMatrix,
    k: usize,
    scratch: &mut KnnScratch,
) -> Result<NeighborSet, KnnError> {
    let n_reference = reference.n_rows();
    let k_eff = k.min(n_reference);

    if k_eff == 0 || query.is_empty() {
        debug!(k_eff, "no distances to compute");
        return Ok(NeighborSet::from_parts(
            vec![Vec::new(); query.n_rows()],
            vec![Vec::new(); query.n_rows()],
        ));
    }

    validate_inputs(reference, query)?;

    let n_vars = reference.n_cols();
    let mut indices = Vec::with_capacity(query.n_rows());
    let mut distances = Vec::with_capacity(query.n_rows());

    scratch.dists.clear();
    scratch.dists.resize(n_reference, 0.0);

    for target in query.rows() {
        distances_to(reference.as_slice(), n_vars, target, &mut scratch.dists);
        select_k_nearest(
            &scratch.dists,
            k_eff,
            &mut scratch.pairs,
            &mut scratch.nn_indices,
            &mut scratch.nn_dists,
        );
        indices.push(scratch.nn_indices.clone());
        distances.push(scratch.nn_dists.clone());
    }

    debug!(k_eff, "neighbors selected");
    Ok(NeighborSet::from_parts(indices, distances))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn matrix(rows: &[&[f64]]) -> FeatureMatrix {
        FeatureMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_nearest_sorted_ascending() {
        let reference = matrix(&[&[0.0, 0.0], &[3.0, 4.0], &[1.0, 0.0], &[0.0, 2.0]]);
        let query = matrix(&[&[0.0, 0.0]]);
        let set = query_knn(&reference, &query, 4).unwrap();
        assert_eq!(set.indices()[0], vec![0, 2, 3, 1]);
        let expected = [0.0, 1.0, 2.0, 5.0];
        for (got, want) in set.distances()[0].iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ties_prefer_lower_index() {
        // rows 1 and 3 are both at distance 1 from the query
        let reference = matrix(&[&[5.0], &[1.0], &[9.0], &[-1.0]]);
        let query = matrix(&[&[0.0]]);
        let set = query_knn(&reference, &query, 2).unwrap();
        assert_eq!(set.indices()[0], vec![1, 3]);
    }

    #[test]
    fn test_k_greater_than_n_clamped() {
        let reference = matrix(&[&[1.0], &[2.0], &[3.0]]);
        let query = matrix(&[&[0.0], &[10.0]]);
        let set = query_knn(&reference, &query, 100).unwrap();
        assert_eq!(set.indices()[0], vec![0, 1, 2]);
        assert_eq!(set.indices()[1], vec![2, 1, 0]);
    }

    #[test]
    fn test_k_zero_gives_empty_rows() {
        let reference = matrix(&[&[1.0]]);
        let query = matrix(&[&[0.0], &[1.0], &[2.0]]);
        let set = query_knn(&reference, &query, 0).unwrap();
        assert_eq!(set.n_queries(), 3);
        assert!(set.indices().iter().all(Vec::is_empty));
        assert!(set.distances().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_empty_reference_skips_validation() {
        // widths differ and the query holds NaN, but no distance is computed
        let reference = FeatureMatrix::empty(2);
        let query = matrix(&[&[f64::NAN]]);
        let set = query_knn(&reference, &query, 3).unwrap();
        assert_eq!(set.n_queries(), 1);
        assert!(set.indices()[0].is_empty());
    }

    #[test]
    fn test_empty_query() {
        let reference = matrix(&[&[1.0, 2.0]]);
        let set = query_knn(&reference, &FeatureMatrix::empty(2), 1).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_error_dimension_mismatch() {
        let reference = matrix(&[&[1.0, 2.0]]);
        let query = matrix(&[&[1.0]]);
        assert_eq!(
            query_knn(&reference, &query, 1),
            Err(KnnError::DimensionMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_error_non_finite_query() {
        let reference = matrix(&[&[1.0]]);
        let query = matrix(&[&[f64::NAN]]);
        assert_eq!(
            query_knn(&reference, &query, 1),
            Err(KnnError::NonFiniteInput { input: "query" })
        );
    }

    #[test]
    fn test_error_non_finite_reference() {
        let reference = matrix(&[&[1.0], &[f64::NEG_INFINITY]]);
        let query = matrix(&[&[0.0]]);
        assert_eq!(
            query_knn(&reference, &query, 1),
            Err(KnnError::NonFiniteInput { input: "reference" })
        );
    }

    #[test]
    fn test_scratch_matches_allocating() {
        let reference = matrix(&[&[0.1, 0.9], &[0.4, 0.4], &[0.8, 0.2], &[0.5, 0.5]]);
        let query = matrix(&[&[0.45, 0.45], &[0.0, 1.0]]);
        let expected = query_knn(&reference, &query, 3).unwrap();

        let mut scratch = KnnScratch::new(1);
        let got = query_knn_with_scratch(&reference, &query, 3, &mut scratch).unwrap();
        assert_eq!(expected, got);
        assert!(scratch.dists.capacity() >= 4);
    }
}
