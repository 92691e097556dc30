//! Fitting per-column ranges on a reference matrix.

use frnn_core::FeatureMatrix;
use tracing::debug;

use crate::params::NormalizationParams;

/// Fits per-column minima and maxima on `reference`.
///
/// Only finite values are considered. A column with no finite value keeps
/// `min = max = 0.0`. An empty reference (zero rows) produces parameters with
/// zero columns. The smoothing term is `max(0, epsilon)`; a NaN `epsilon`
/// becomes `0.0`.
///
/// # Example
///
/// ```
/// use frnn_core::FeatureMatrix;
/// use frnn_normalize::fit_normalizer;
///
/// let reference = FeatureMatrix::from_rows(&[[1.0, f64::NAN], [3.0, f64::NAN]]).unwrap();
/// let params = fit_normalizer(&reference, -5.0);
///
/// assert_eq!(params.mins(), &[1.0, 0.0]);
/// assert_eq!(params.maxs(), &[3.0, 0.0]);
/// assert_eq!(params.eps(), 0.0);
/// ```
#[tracing::instrument(skip(reference), fields(n_rows = reference.n_rows(), n_cols = reference.n_cols()))]
pub fn fit_normalizer(reference: &FeatureMatrix, epsilon: f64) -> NormalizationParams {
    let eps = if epsilon > 0.0 { epsilon } else { 0.0 };

    if reference.is_empty() {
        debug!("empty reference matrix, no columns fitted");
        return NormalizationParams::new(Vec::new(), Vec::new(), eps);
    }

    let n_cols = reference.n_cols();
    let mut mins = vec![0.0; n_cols];
    let mut maxs = vec![0.0; n_cols];
    let mut n_degenerate = 0usize;

    for col in 0..n_cols {
        match finite_range(reference.column(col)) {
            Some((lo, hi)) => {
                mins[col] = lo;
                maxs[col] = hi;
            }
            None => n_degenerate += 1,
        }
    }

    debug!(n_cols, n_degenerate, eps, "normalizer fitted");
    NormalizationParams::new(mins, maxs, eps)
}

/// Minimum and maximum of the finite values, or `None` if there are none.
///
/// The first of several equal extremes is kept.
fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((if v < lo { v } else { lo }, if v > hi { v } else { hi })),
        })
}
