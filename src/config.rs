use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "frnn.toml";

/// Top-level configuration.
///
/// Every field defaults to the built-in reference dataset, so an empty file
/// and a missing default file behave the same.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FrnnConfig {
    /// Reference and query data.
    #[serde(default)]
    pub data: DataToml,

    /// Neighbor search and scoring settings.
    #[serde(default)]
    pub scoring: ScoringToml,

    /// Fixture output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default = "default_x_train")]
    pub x_train: Vec<Vec<f64>>,
    #[serde(default = "default_y_train")]
    pub y_train: Vec<usize>,
    #[serde(default = "default_x_query")]
    pub x_query: Vec<Vec<f64>>,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            x_train: default_x_train(),
            y_train: default_y_train(),
            x_query: default_x_query(),
        }
    }
}

fn default_x_train() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![0.2, 0.1],
        vec![4.8, 5.0],
        vec![5.1, 4.9],
        vec![9.9, 10.2],
        vec![10.1, 9.8],
    ]
}
fn default_y_train() -> Vec<usize> {
    vec![0, 0, 1, 1, 2, 2]
}
fn default_x_query() -> Vec<Vec<f64>> {
    vec![
        vec![0.1, 0.0],
        vec![4.9, 5.2],
        vec![10.0, 10.0],
        vec![6.0, 6.0],
    ]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringToml {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_eps")]
    pub eps: f64,
    #[serde(default = "default_metric")]
    pub metric: String,
}

impl Default for ScoringToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            eps: default_eps(),
            metric: default_metric(),
        }
    }
}

fn default_k() -> usize {
    3
}
fn default_eps() -> f64 {
    1e-12
}
fn default_metric() -> String {
    "euclidean".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("fixtures/reference")
}

/// Parses configuration from TOML text.
pub fn parse(toml_str: &str) -> Result<FrnnConfig> {
    toml::from_str(toml_str).context("failed to parse TOML config")
}

/// Loads the configuration for a subcommand.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG`] is read if
/// present and the built-in dataset is used otherwise.
pub fn load(explicit: Option<&Path>) -> Result<FrnnConfig> {
    let path = match explicit {
        Some(p) => p,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG);
            if !default_path.exists() {
                info!("no {DEFAULT_CONFIG} found, using built-in dataset");
                return Ok(FrnnConfig::default());
            }
            default_path
        }
    };

    info!(path = %path.display(), "reading config");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse(&toml_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_reference_dataset() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.data.x_train.len(), 6);
        assert_eq!(cfg.data.y_train, vec![0, 0, 1, 1, 2, 2]);
        assert_eq!(cfg.data.x_query[3], vec![6.0, 6.0]);
        assert_eq!(cfg.scoring.k, 3);
        assert_eq!(cfg.scoring.eps, 1e-12);
        assert_eq!(cfg.scoring.metric, "euclidean");
        assert_eq!(cfg.output.dir, PathBuf::from("fixtures/reference"));
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse(
            r#"
            [scoring]
            k = 5

            [data]
            x_query = [[1.0, 2.0]]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.scoring.k, 5);
        assert_eq!(cfg.scoring.eps, 1e-12);
        assert_eq!(cfg.data.x_query, vec![vec![1.0, 2.0]]);
        assert_eq!(cfg.data.x_train.len(), 6);
    }

    #[test]
    fn test_full_config() {
        let cfg = parse(
            r#"
            [data]
            x_train = [[0.0], [1.0]]
            y_train = [0, 1]
            x_query = [[0.4]]

            [scoring]
            k = 1
            eps = 0.0
            metric = "Euclidean"

            [output]
            dir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.data.x_train, vec![vec![0.0], vec![1.0]]);
        assert_eq!(cfg.scoring.metric, "Euclidean");
        assert_eq!(cfg.output.dir, PathBuf::from("out"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse("[scoring]\nneighbors = 3\n").is_err());
        assert!(parse("[backend]\nname = \"x\"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = load(Some(Path::new("definitely/not/here/frnn.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
