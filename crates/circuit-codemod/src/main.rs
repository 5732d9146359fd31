//! circuit-codemod CLI - migrate renamed Circuit UI props.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "circuit-codemod")]
#[command(about = "Find and fix renamed Circuit UI props")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to codemod.toml config file
    #[arg(short, long, default_value = "codemod.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report renamed props without changing files
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Apply the available fixes
    Fix {
        /// Files or directories to fix
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Compute fixes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the built-in migration rules
    Rules,

    /// Write a default codemod.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let code = match cli.command {
        Commands::Check { paths, format } => commands::check::run(&cli.config, paths, format).await?,
        Commands::Fix {
            paths,
            dry_run,
            format,
        } => commands::fix::run(&cli.config, paths, dry_run, format).await?,
        Commands::Rules => commands::rules::run(&cli.config)?,
        Commands::Init { yes } => commands::init::run(&cli.config, yes).await?,
    };

    Ok(code)
}
