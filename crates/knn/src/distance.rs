//! Euclidean distance computation.

use crate::error::KnnError;

/// Euclidean distance between two equal-length vectors.
///
/// Squared differences are accumulated left to right starting from `0.0`,
/// then square-rooted.
///
/// # Errors
///
/// Returns [`KnnError::DimensionMismatch`] if the lengths differ, and
/// [`KnnError::NonFiniteInput`] (naming `"left"` or `"right"`) at the first
/// NaN or infinite component.
///
/// # Example
///
/// ```
/// use frnn_knn::euclidean_distance;
///
/// let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(d, 5.0);
/// ```
pub fn euclidean_distance(left: &[f64], right: &[f64]) -> Result<f64, KnnError> {
    if left.len() != right.len() {
        return Err(KnnError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut squared_sum = 0.0;
    for (&l, &r) in left.iter().zip(right.iter()) {
        if !l.is_finite() {
            return Err(KnnError::NonFiniteInput { input: "left" });
        }
        if !r.is_finite() {
            return Err(KnnError::NonFiniteInput { input: "right" });
        }
        let d = l - r;
        squared_sum += d * d;
    }
    Ok(squared_sum.sqrt())
}

/// Computes Euclidean distances from `target` to every row of `reference`.
///
/// `reference` is a flat row-major buffer `[n_reference × n_vars]`. Inputs
/// must already be validated (equal widths, all finite). Dispatches to
/// specialized implementations for 1D and 2D cases; all paths accumulate in
/// the same order as [`euclidean_distance`].
///
/// # Panics
///
/// Debug-asserts that `reference.len() == out.len() * n_vars` and
/// `target.len() == n_vars`.
pub(crate) fn distances_to(reference: &[f64], n_vars: usize, target: &[f64], out: &mut [f64]) {
    debug_assert_eq!(reference.len(), out.len() * n_vars);
    debug_assert_eq!(target.len(), n_vars);

    match n_vars {
        0 => out.fill(0.0),
        1 => dist_1d(reference, target[0], out),
        2 => dist_2d(reference, target, out),
        _ => dist_nd(reference, n_vars, target, out),
    }
}

#[inline]
fn dist_1d(reference: &[f64], target: f64, out: &mut [f64]) {
    for (o, &c) in out.iter_mut().zip(reference.iter()) {
        let d = c - target;
        *o = (d * d).sqrt();
    }
}

#[inline]
fn dist_2d(reference: &[f64], target: &[f64], out: &mut [f64]) {
    let t0 = target[0];
    let t1 = target[1];
    for (i, o) in out.iter_mut().enumerate() {
        let d0 = t0 - reference[i * 2];
        let d1 = t1 - reference[i * 2 + 1];
        *o = (d0 * d0 + d1 * d1).sqrt();
    }
}

#[inline]
fn dist_nd(reference: &[f64], n_vars: usize, target: &[f64], out: &mut [f64]) {
    for (i, o) in out.iter_mut().enumerate() {
        let row = &reference[i * n_vars..(i + 1) * n_vars];
        let mut acc = 0.0;
        for j in 0..n_vars {
            let d = target[j] - row[j];
            acc += d * d;
        }
        *o = acc.sqrt();
    }
}
