//! Top-k nearest neighbor selection.

/// Selects the `k_eff` nearest neighbors from per-reference distances.
///
/// Uses a full sort on `(distance, index)` pairs: distance ascending, then
/// reference index ascending, so equal distances always resolve to the lower
/// index.
///
/// Writes results into caller-provided buffers:
/// - `pairs`: scratch buffer for `(distance, index)` pairs
/// - `nn_indices`: reference indices of the `k_eff` nearest neighbors
/// - `nn_dists`: the matching distances
///
/// # Panics
///
/// Debug-asserts that `k_eff <= dists.len()` and that every distance is
/// finite.
pub(crate) fn select_k_nearest(
    dists: &[f64],
    k_eff: usize,
    pairs: &mut Vec<(f64, usize)>,
    nn_indices: &mut Vec<usize>,
    nn_dists: &mut Vec<f64>,
) {
    debug_assert!(k_eff <= dists.len());
    debug_assert!(dists.iter().all(|d| d.is_finite()));

    pairs.clear();
    pairs.extend(dists.iter().copied().enumerate().map(|(i, d)| (d, i)));

    pairs.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    pairs.truncate(k_eff);

    nn_indices.clear();
    nn_dists.clear();
    for &(d, idx) in pairs.iter() {
        nn_indices.push(idx);
        nn_dists.push(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dists: &[f64], k_eff: usize) -> (Vec<usize>, Vec<f64>) {
        let mut pairs = Vec::new();
        let mut nn_indices = Vec::new();
        let mut nn_dists = Vec::new();
        select_k_nearest(dists, k_eff, &mut pairs, &mut nn_indices, &mut nn_dists);
        (nn_indices, nn_dists)
    }

    #[test]
    fn test_k1_closest() {
        let (indices, dists) = run(&[3.0, 1.0, 2.0], 1);
        assert_eq!(indices, vec![1]);
        assert_eq!(dists, vec![1.0]);
    }

    #[test]
    fn test_k_equals_n_all_sorted() {
        let (indices, dists) = run(&[2.0, 1.0, 3.0, 0.0], 4);
        assert_eq!(indices, vec![3, 1, 0, 2]);
        assert_eq!(dists, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ties_resolve_to_lower_index() {
        let (indices, dists) = run(&[2.0, 2.0, 1.0, 2.0], 3);
        assert_eq!(indices, vec![2, 0, 1]);
        assert_eq!(dists, vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_all_equal_is_identity_order() {
        let (indices, _) = run(&[0.5; 6], 6);
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_k_zero() {
        let (indices, dists) = run(&[1.0, 2.0], 0);
        assert!(indices.is_empty());
        assert!(dists.is_empty());
    }

    #[test]
    fn test_buffer_clearing() {
        let mut pairs = Vec::new();
        let mut nn_indices = Vec::new();
        let mut nn_dists = Vec::new();

        select_k_nearest(&[3.0, 1.0, 2.0], 2, &mut pairs, &mut nn_indices, &mut nn_dists);
        assert_eq!(nn_indices, vec![1, 2]);

        select_k_nearest(&[5.0, 4.0], 1, &mut pairs, &mut nn_indices, &mut nn_dists);
        assert_eq!(nn_indices, vec![1]);
        assert_eq!(nn_dists, vec![4.0]);
    }
}
