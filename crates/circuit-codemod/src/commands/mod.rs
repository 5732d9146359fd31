//! CLI subcommands.

pub mod check;
pub mod fix;
pub mod init;
pub mod rules;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::ValueEnum;

use circuit_codemod_rules::{circuit_ui, Engine};
use circuit_codemod_runner::{render_json, render_text, RunMode, RunSummary, Runner};

use crate::config::ConfigFile;

/// How run results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run the built-in rules over `paths` and print the summary to stdout.
async fn execute(
    config: &ConfigFile,
    paths: Vec<PathBuf>,
    mode: RunMode,
    format: OutputFormat,
) -> Result<RunSummary> {
    let engine = Arc::new(Engine::new(circuit_ui(&config.table_options())));
    let summary = Runner::new(config.run_config(paths, mode), engine)
        .run()
        .await?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&summary)),
        OutputFormat::Json => println!("{}", render_json(&summary)?),
    }

    Ok(summary)
}
