//! List the built-in rules.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use circuit_codemod_rules::{circuit_ui, Rule, RULE_NAME};

use crate::config::load_config;

/// Run the rules command.
pub fn run(config_path: &Path) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let table = circuit_ui(&config.table_options());

    println!("{RULE_NAME} ({} rules)", table.len());
    for rule in table.iter() {
        println!("  {}", describe(rule));
    }

    Ok(ExitCode::SUCCESS)
}

fn describe(rule: &Rule) -> String {
    let mut targets = rule.components().join(", ");
    if let Some(hook) = rule.hook() {
        targets = format!("{targets} + {hook}()");
    }
    format!("{:<7} {:<40} {}", rule.kind(), targets, rule.describe())
}
