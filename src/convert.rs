//! Pure conversion functions: TOML config structs -> library input types.

use anyhow::{Context, Result, bail};

use frnn_core::FeatureMatrix;
use frnn_knn::Metric;

use crate::config::{DataToml, ScoringToml};

/// Validated reference and query data.
#[derive(Debug)]
pub struct Dataset {
    pub x_train: FeatureMatrix,
    pub y_train: Vec<usize>,
    pub x_query: FeatureMatrix,
}

/// Scoring settings with the metric name resolved.
#[derive(Debug, Clone, Copy)]
pub struct Scoring {
    pub k: usize,
    pub eps: f64,
    pub metric: Metric,
}

/// Builds a [`Dataset`] from the TOML data section.
///
/// Rows must be rectangular and `y_train` must carry one label per
/// `x_train` row.
pub fn build_dataset(data: &DataToml) -> Result<Dataset> {
    let x_train = FeatureMatrix::from_rows(&data.x_train).context("invalid [data].x_train")?;
    let x_query = FeatureMatrix::from_rows(&data.x_query).context("invalid [data].x_query")?;
    if data.y_train.len() != x_train.n_rows() {
        bail!(
            "[data].y_train has {} labels but [data].x_train has {} rows",
            data.y_train.len(),
            x_train.n_rows()
        );
    }
    Ok(Dataset {
        x_train,
        y_train: data.y_train.clone(),
        x_query,
    })
}

/// Builds [`Scoring`] settings from the TOML scoring section.
pub fn build_scoring(scoring: &ScoringToml) -> Result<Scoring> {
    let metric: Metric = scoring
        .metric
        .parse()
        .context("invalid [scoring].metric")?;
    Ok(Scoring {
        k: scoring.k,
        eps: scoring.eps,
        metric,
    })
}
