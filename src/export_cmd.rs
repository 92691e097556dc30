//! Export command: run the pipeline and write the three fixture files.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::ExportArgs;
use crate::config;
use crate::convert;
use crate::fixtures::{self, KNN_FILE, SCORES_FILE, X_NORM_FILE};
use crate::pipeline;

/// Run the export pipeline.
pub fn run(args: ExportArgs) -> Result<()> {
    let _cmd = info_span!("export").entered();

    // 1. Load config and build inputs
    let config = config::load(args.config.as_deref())?;
    let dataset = convert::build_dataset(&config.data)?;
    let scoring = convert::build_scoring(&config.scoring)?;
    let output_dir = args.output_dir.unwrap_or(config.output.dir);

    // 2. Normalize, search, score
    let out = pipeline::run(&dataset, &scoring)?;

    // 3. Write fixtures
    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory: {}", output_dir.display())
    })?;

    write(
        &output_dir.join(X_NORM_FILE),
        &fixtures::to_json(&fixtures::x_norm_fixture(&dataset, &out))?,
    )?;
    write(
        &output_dir.join(KNN_FILE),
        &fixtures::to_json(&fixtures::knn_fixture(&scoring, &out))?,
    )?;
    write(
        &output_dir.join(SCORES_FILE),
        &fixtures::to_json(&fixtures::scores_fixture(&dataset, &scoring, &out))?,
    )?;

    info!(dir = %output_dir.display(), "fixtures written");
    Ok(())
}

fn write(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json)
        .with_context(|| format!("failed to write fixture: {}", path.display()))?;
    info!(path = %path.display(), "fixture written");
    Ok(())
}
