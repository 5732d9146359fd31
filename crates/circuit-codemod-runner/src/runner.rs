//! File discovery and parallel processing.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use oxc_span::SourceType;
use rayon::prelude::*;
use walkdir::WalkDir;

use circuit_codemod_rules::{Engine, DEFAULT_MAX_PASSES};

use crate::report::{FileFailure, FileReport, RunSummary};

/// What the runner does with the diagnostics it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Report only
    #[default]
    Check,

    /// Apply fixes and write the files back
    Fix,

    /// Compute fixes without writing anything
    DryRun,
}

/// Configuration for a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Files or directories to process
    pub paths: Vec<PathBuf>,

    /// File extensions to pick up while walking directories
    pub extensions: Vec<String>,

    /// Directory names that are never descended into
    pub exclude: Vec<String>,

    pub mode: RunMode,

    /// Upper bound of lint-and-fix passes per file
    pub max_passes: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            extensions: ["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"]
                .map(String::from)
                .to_vec(),
            exclude: ["node_modules", "dist", "build", ".git", "coverage"]
                .map(String::from)
                .to_vec(),
            mode: RunMode::Check,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Worker task failed: {0}")]
    Join(String),
}

/// Result of processing one file.
enum FileOutcome {
    Processed {
        report: FileReport,
        /// Fixed source, present only when it differs from the input
        fixed: Option<String>,
    },
    Failed(FileFailure),
}

/// Lints or fixes every matching file under the configured paths.
pub struct Runner {
    config: RunConfig,
    engine: Arc<Engine>,
}

impl Runner {
    pub fn new(config: RunConfig, engine: Arc<Engine>) -> Self {
        Self { config, engine }
    }

    /// Process all discovered files.
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        let start = Instant::now();

        let files = self.discover()?;
        tracing::debug!("Discovered {} files", files.len());

        let engine = Arc::clone(&self.engine);
        let mode = self.config.mode;
        let max_passes = self.config.max_passes;

        // Parsing is CPU bound, keep it off the async workers
        let (files_scanned, outcomes) = tokio::task::spawn_blocking(move || {
            let outcomes: Vec<FileOutcome> = files
                .par_iter()
                .map(|path| process_file(&engine, path, mode, max_passes))
                .collect();
            (files.len(), outcomes)
        })
        .await
        .map_err(|e| RunError::Join(e.to_string()))?;

        let mut summary = RunSummary {
            files_scanned,
            ..Default::default()
        };

        // Per-file problems end up in the summary, never abort the run
        for outcome in outcomes {
            let failure = match outcome {
                FileOutcome::Processed {
                    report,
                    fixed: Some(source),
                } if mode == RunMode::Fix => match tokio::fs::write(&report.path, source).await {
                    Ok(()) => {
                        tracing::debug!("Wrote {}", report.path.display());
                        summary.files.push(report);
                        continue;
                    }
                    Err(err) => FileFailure {
                        message: format!("Failed to write: {err}"),
                        path: report.path,
                    },
                },
                FileOutcome::Processed { report, .. } => {
                    summary.files.push(report);
                    continue;
                }
                FileOutcome::Failed(failure) => failure,
            };

            tracing::warn!("Skipping {}: {}", failure.path.display(), failure.message);
            summary.failures.push(failure);
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Processed {} files in {}ms: {} problems, {} fixes applied",
            summary.files_scanned,
            summary.duration_ms,
            summary.diagnostic_count(),
            summary.fixes_applied()
        );

        Ok(summary)
    }

    /// Collect the files to process, sorted and deduplicated.
    fn discover(&self) -> Result<Vec<PathBuf>, RunError> {
        let mut files = Vec::new();

        for root in &self.config.paths {
            if !root.exists() {
                return Err(RunError::PathNotFound(root.clone()));
            }

            // Explicit files are taken as-is
            if root.is_file() {
                files.push(root.clone());
                continue;
            }

            for entry in WalkDir::new(root)
                .follow_links(true)
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !self.is_excluded(e.path()))
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file() && self.has_extension(path) {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();

        Ok(files)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.config.exclude.iter().any(|excluded| excluded == name))
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.extensions.iter().any(|allowed| allowed == ext))
    }
}

/// Lint or fix a single file.
fn process_file(
    engine: &Engine,
    path: &Path,
    mode: RunMode,
    max_passes: usize,
) -> FileOutcome {
    let failed = |message: String| {
        FileOutcome::Failed(FileFailure {
            path: path.to_path_buf(),
            message,
        })
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return failed(format!("Failed to read: {err}")),
    };
    let source_type = SourceType::from_path(path).unwrap_or_else(|_| SourceType::tsx());

    match mode {
        RunMode::Check => match engine.lint(&source, source_type) {
            Ok(diagnostics) => FileOutcome::Processed {
                report: FileReport::new(path, &source, &diagnostics),
                fixed: None,
            },
            Err(err) => failed(err.to_string()),
        },
        RunMode::Fix => match engine.fix(&source, source_type, max_passes) {
            Ok(result) => {
                // Remaining diagnostics point into the fixed text
                let report = FileReport::new(path, &result.output, &result.remaining)
                    .with_fixes_applied(result.applied);
                FileOutcome::Processed {
                    fixed: result.changed().then_some(result.output),
                    report,
                }
            }
            Err(err) => failed(err.to_string()),
        },
        RunMode::DryRun => {
            let found = engine
                .lint(&source, source_type)
                .and_then(|diagnostics| {
                    engine
                        .fix(&source, source_type, max_passes)
                        .map(|result| (diagnostics, result))
                });
            match found {
                Ok((diagnostics, result)) => FileOutcome::Processed {
                    report: FileReport::new(path, &source, &diagnostics)
                        .with_fixes_available(result.applied),
                    fixed: None,
                },
                Err(err) => failed(err.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_codemod_rules::{
        circuit_ui, CustomTransform, Diagnostic, Fix, MessageKind, Rule, RuleContext, RuleTable,
        TableOptions,
    };
    use oxc_ast::ast::JSXElement;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// Rewrites every element into an unterminated opening tag.
    #[derive(Debug)]
    struct Unterminate;

    impl CustomTransform for Unterminate {
        fn name(&self) -> &'static str {
            "unterminate"
        }

        fn apply(&self, element: &JSXElement<'_>, component: &str, ctx: &mut RuleContext<'_>) {
            ctx.report(
                Diagnostic::new(MessageKind::IconChildren, element.span)
                    .with_fix(Fix::replace(element.span, format!("<{component}"))),
            );
        }
    }

    fn engine() -> Arc<Engine> {
        Arc::new(Engine::new(circuit_ui(&TableOptions::default())))
    }

    fn runner(dir: &TempDir, mode: RunMode) -> Runner {
        let config = RunConfig {
            paths: vec![dir.path().to_path_buf()],
            mode,
            ..Default::default()
        };
        Runner::new(config, engine())
    }

    fn project() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();

        fs::write(
            dir.path().join("src/App.tsx"),
            "export const App = () => <Badge variant=\"confirm\">New</Badge>;\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("src/clean.js"),
            "export const ok = <Badge variant=\"success\" />;\n",
        )
        .unwrap();
        fs::write(dir.path().join("src/notes.md"), "<Badge variant=\"confirm\" />").unwrap();
        fs::write(
            dir.path().join("node_modules/pkg/index.jsx"),
            "<Badge variant=\"confirm\" />",
        )
        .unwrap();

        dir
    }

    #[tokio::test]
    async fn check_reports_without_writing() {
        let dir = project();

        let summary = runner(&dir, RunMode::Check).run().await.unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.diagnostic_count(), 1);
        assert_eq!(summary.fixable_count(), 1);

        let report = summary.files.iter().find(|f| f.path.ends_with("App.tsx")).unwrap();
        assert_eq!(report.diagnostics[0].line, 1);
        assert_eq!(report.diagnostics[0].column, 33);
        assert_eq!(report.diagnostics[0].message_id, "propValue");

        let source = fs::read_to_string(dir.path().join("src/App.tsx")).unwrap();
        assert!(source.contains("confirm"));
    }

    #[tokio::test]
    async fn fix_writes_changed_files() {
        let dir = project();

        let summary = runner(&dir, RunMode::Fix).run().await.unwrap();

        assert_eq!(summary.fixes_applied(), 1);
        assert_eq!(summary.files_changed(), 1);
        assert!(!summary.has_problems());
        assert_eq!(
            fs::read_to_string(dir.path().join("src/App.tsx")).unwrap(),
            "export const App = () => <Badge variant=\"success\">New</Badge>;\n"
        );
        // Excluded directories are never touched
        assert_eq!(
            fs::read_to_string(dir.path().join("node_modules/pkg/index.jsx")).unwrap(),
            "<Badge variant=\"confirm\" />"
        );
    }

    #[tokio::test]
    async fn dry_run_leaves_files_alone() {
        let dir = project();

        let summary = runner(&dir, RunMode::DryRun).run().await.unwrap();

        assert_eq!(summary.diagnostic_count(), 1);
        assert_eq!(summary.fixes_available(), 1);
        assert_eq!(summary.fixes_applied(), 0);
        assert_eq!(summary.files_changed(), 0);
        assert!(fs::read_to_string(dir.path().join("src/App.tsx"))
            .unwrap()
            .contains("confirm"));
    }

    #[tokio::test]
    async fn unreadable_files_do_not_stop_fixing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.tsx"), "<Badge variant=\"confirm\" />;\n").unwrap();
        fs::write(dir.path().join("b.tsx"), b"const s = '\xff\xfe';\n").unwrap();

        let summary = runner(&dir, RunMode::Fix).run().await.unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_changed(), 1);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].path.ends_with("b.tsx"));
        assert!(summary.failures[0].message.starts_with("Failed to read"));
        assert_eq!(
            fs::read_to_string(dir.path().join("a.tsx")).unwrap(),
            "<Badge variant=\"success\" />;\n"
        );
    }

    #[tokio::test]
    async fn broken_fix_leaves_file_unwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.tsx");
        fs::write(&path, "const a = <Broken />;\n").unwrap();

        let engine = Engine::new(RuleTable::new(vec![Rule::custom(&["Broken"], Unterminate)]));
        let config = RunConfig {
            paths: vec![dir.path().to_path_buf()],
            mode: RunMode::Fix,
            ..Default::default()
        };

        let summary = Runner::new(config, Arc::new(engine)).run().await.unwrap();

        assert_eq!(summary.files_changed(), 0);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].message.contains("invalid syntax"), "{}", summary.failures[0].message);
        assert_eq!(fs::read_to_string(&path).unwrap(), "const a = <Broken />;\n");
    }

    #[tokio::test]
    async fn collects_parse_failures() {
        let dir = project();
        fs::write(dir.path().join("src/broken.tsx"), "<Badge variant=").unwrap();

        let summary = runner(&dir, RunMode::Check).run().await.unwrap();

        assert_eq!(summary.files_scanned, 3);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].path.ends_with("broken.tsx"));
        assert!(summary.has_problems());
    }

    #[tokio::test]
    async fn accepts_explicit_files() {
        let dir = project();
        let config = RunConfig {
            paths: vec![dir.path().join("src/notes.md")],
            ..Default::default()
        };

        let summary = Runner::new(config, engine()).run().await.unwrap();

        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.diagnostic_count(), 1);
    }

    #[tokio::test]
    async fn missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            paths: vec![dir.path().join("missing")],
            ..Default::default()
        };

        let result = Runner::new(config, engine()).run().await;

        assert!(matches!(result, Err(RunError::PathNotFound(_))));
    }
}
