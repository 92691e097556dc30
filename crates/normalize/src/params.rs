//! Fitted normalization parameters.

/// Per-column ranges fitted on a reference matrix.
///
/// Immutable once built: [`fit_normalizer`](crate::fit_normalizer) is the
/// only way to obtain one, and [`transform`](crate::transform) only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationParams {
    /// Finite per-column minima (`0.0` for columns with no finite value).
    mins: Vec<f64>,
    /// Finite per-column maxima (`0.0` for columns with no finite value).
    maxs: Vec<f64>,
    /// Smoothing term added to every column range, always `>= 0`.
    eps: f64,
}

impl NormalizationParams {
    pub(crate) fn new(mins: Vec<f64>, maxs: Vec<f64>, eps: f64) -> Self {
        debug_assert_eq!(mins.len(), maxs.len());
        debug_assert!(eps >= 0.0);
        Self { mins, maxs, eps }
    }

    /// Per-column minima.
    pub fn mins(&self) -> &[f64] {
        &self.mins
    }

    /// Per-column maxima.
    pub fn maxs(&self) -> &[f64] {
        &self.maxs
    }

    /// Non-negative smoothing epsilon.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Number of columns the parameters were fitted on.
    pub fn n_cols(&self) -> usize {
        self.mins.len()
    }
}
