//! Report renamed props.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use circuit_codemod_runner::RunMode;

use super::OutputFormat;
use crate::config::load_config;

/// Run the check command.
pub async fn run(config_path: &Path, paths: Vec<PathBuf>, format: OutputFormat) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let summary = super::execute(&config, paths, RunMode::Check, format).await?;

    Ok(if summary.has_problems() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
