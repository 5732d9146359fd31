//! Configuration file (codemod.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use circuit_codemod_rules::{TableOptions, DEFAULT_MAX_PASSES};
use circuit_codemod_runner::{RunConfig, RunMode};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub fix: FixConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FixConfig {
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
}

#[derive(Debug, Deserialize)]
pub struct RulesConfig {
    /// Attributes an icon child may carry and still be moved into `icon`
    #[serde(default = "default_icon_child_attributes")]
    pub icon_child_attributes: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    RunConfig::default().extensions
}
fn default_exclude() -> Vec<String> {
    RunConfig::default().exclude
}
fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}
fn default_icon_child_attributes() -> Vec<String> {
    TableOptions::default().icon_child_attributes
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            max_passes: default_max_passes(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            icon_child_attributes: default_icon_child_attributes(),
        }
    }
}

impl ConfigFile {
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            icon_child_attributes: self.rules.icon_child_attributes.clone(),
        }
    }

    pub fn run_config(&self, paths: Vec<PathBuf>, mode: RunMode) -> RunConfig {
        RunConfig {
            paths,
            extensions: self.files.extensions.clone(),
            exclude: self.files.exclude.clone(),
            mode,
            max_passes: self.fix.max_passes,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}
