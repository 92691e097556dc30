//! Distance metric label.

use std::fmt;
use std::str::FromStr;

use crate::error::KnnError;

/// Distance metric used by the neighbor search.
///
/// Only Euclidean distance is implemented; the metric is carried as a label
/// in exported results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    /// `sqrt(Σ (a_i - b_i)^2)`.
    #[default]
    Euclidean,
}

impl Metric {
    /// Lower-case name of the metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = KnnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(KnnError::UnknownMetric {
                name: s.to_string(),
            }),
        }
    }
}
