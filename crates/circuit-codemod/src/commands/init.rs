//! Write a default configuration file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<ExitCode> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'circuit-codemod check' to find renamed props.");

    Ok(ExitCode::SUCCESS)
}

const DEFAULT_CONFIG: &str = r#"# circuit-codemod configuration

[files]
# Extensions picked up while walking directories
extensions = ["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"]

# Directory names that are never descended into
exclude = ["node_modules", "dist", "build", ".git", "coverage"]

[fix]
# Lint-and-fix passes per file; dependent migrations need more than one
max_passes = 10

[rules]
# Attributes an IconButton's icon child may carry and still be moved
# into the `icon` prop
icon_child_attributes = ["size"]
"#;
