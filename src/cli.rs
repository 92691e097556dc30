use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reference NN and fuzzy-rough nearest-neighbor scorer.
#[derive(Parser)]
#[command(
    name = "frnn",
    version,
    about = "Reference NN and fuzzy-rough nearest-neighbor scorer"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline and write the reference fixture files.
    Export(ExportArgs),
    /// Run the pipeline and print the predicted class of every query row.
    Predict(PredictArgs),
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Path to TOML configuration file [default: frnn.toml, built-in dataset if absent].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file [default: frnn.toml, built-in dataset if absent].
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
