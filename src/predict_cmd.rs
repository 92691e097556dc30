//! Predict command: print the arg-max class of every query row.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::PredictArgs;
use crate::config;
use crate::convert;
use crate::fixtures;
use crate::pipeline;

/// Run the pipeline and print predictions as JSON to stdout.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();

    let config = config::load(args.config.as_deref())?;
    let dataset = convert::build_dataset(&config.data)?;
    let scoring = convert::build_scoring(&config.scoring)?;

    let out = pipeline::run(&dataset, &scoring)?;
    let predictions = fixtures::predictions(&out);
    info!(
        n_predictions = predictions.len(),
        n_classes = out.n_classes,
        "predictions ready"
    );

    println!("{}", fixtures::to_json(&predictions)?);
    Ok(())
}
