//! File runner for the Circuit UI rule engine.
//!
//! Discovers source files, lints or fixes them in parallel and summarises the
//! results for terminal or JSON output.

pub mod report;
pub mod runner;

pub use report::{render_json, render_text, FileFailure, FileReport, ReportedDiagnostic, RunSummary};
pub use runner::{RunConfig, RunError, RunMode, Runner};
