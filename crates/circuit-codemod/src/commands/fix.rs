//! Apply fixes for renamed props.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use circuit_codemod_runner::{RunMode, RunSummary};

use super::OutputFormat;
use crate::config::load_config;

/// Run the fix command.
pub async fn run(
    config_path: &Path,
    paths: Vec<PathBuf>,
    dry_run: bool,
    format: OutputFormat,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let mode = if dry_run { RunMode::DryRun } else { RunMode::Fix };

    let summary = super::execute(&config, paths, mode, format).await?;

    if !dry_run && summary.files_changed() > 0 {
        tracing::info!("Updated {} files", summary.files_changed());
    }

    Ok(exit_code(&summary, dry_run))
}

/// Leftover diagnostics only fail a dry run; parse failures always fail.
fn exit_code(summary: &RunSummary, dry_run: bool) -> ExitCode {
    let failed = if dry_run {
        summary.has_problems()
    } else {
        !summary.failures.is_empty()
    };

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
