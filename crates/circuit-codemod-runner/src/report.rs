//! Per-file results and their text and JSON renderings.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use circuit_codemod_rules::Diagnostic;

/// A diagnostic resolved to a position a human can find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedDiagnostic {
    /// 1-based line of the reported span's start
    pub line: usize,

    /// 1-based column, counted in characters
    pub column: usize,

    pub message_id: &'static str,

    pub message: String,

    pub fixable: bool,
}

/// Outcome of linting or fixing one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,

    /// Diagnostics left in the file after any fixes
    pub diagnostics: Vec<ReportedDiagnostic>,

    /// Fixes written to the file
    pub fixes_applied: usize,

    /// Fixes a dry run would have applied
    pub fixes_available: usize,

    /// Whether the file was rewritten
    pub changed: bool,
}

impl FileReport {
    /// Resolve `diagnostics` against the source they were reported on.
    pub fn new(path: &Path, source: &str, diagnostics: &[Diagnostic]) -> Self {
        let lines = LineIndex::new(source);

        Self {
            path: path.to_path_buf(),
            diagnostics: diagnostics
                .iter()
                .map(|diagnostic| {
                    let (line, column) = lines.line_col(diagnostic.span.start);
                    ReportedDiagnostic {
                        line,
                        column,
                        message_id: diagnostic.kind.id(),
                        message: diagnostic.message(),
                        fixable: diagnostic.is_fixable(),
                    }
                })
                .collect(),
            fixes_applied: 0,
            fixes_available: 0,
            changed: false,
        }
    }

    pub fn with_fixes_applied(mut self, count: usize) -> Self {
        self.fixes_applied = count;
        self.changed = count > 0;
        self
    }

    pub fn with_fixes_available(mut self, count: usize) -> Self {
        self.fixes_available = count;
        self
    }
}

/// A file the run had to skip.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Everything a run produced.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub files: Vec<FileReport>,

    pub failures: Vec<FileFailure>,

    /// Number of files discovered and processed
    pub files_scanned: usize,

    pub duration_ms: u64,
}

impl RunSummary {
    pub fn diagnostic_count(&self) -> usize {
        self.files.iter().map(|file| file.diagnostics.len()).sum()
    }

    pub fn fixable_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|file| &file.diagnostics)
            .filter(|diagnostic| diagnostic.fixable)
            .count()
    }

    pub fn fixes_applied(&self) -> usize {
        self.files.iter().map(|file| file.fixes_applied).sum()
    }

    pub fn fixes_available(&self) -> usize {
        self.files.iter().map(|file| file.fixes_available).sum()
    }

    pub fn files_changed(&self) -> usize {
        self.files.iter().filter(|file| file.changed).count()
    }

    /// Whether anything still needs the author's attention.
    pub fn has_problems(&self) -> bool {
        self.diagnostic_count() > 0 || !self.failures.is_empty()
    }
}

/// Byte offset to line/column lookup.
struct LineIndex<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    fn new(source: &'s str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            source,
            line_starts,
        }
    }

    fn line_col(&self, offset: u32) -> (usize, usize) {
        let offset = (offset as usize).min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line];
        let column = self
            .source
            .get(start..offset)
            .map_or(0, |text| text.chars().count());

        (line + 1, column + 1)
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

/// Render the summary like eslint's stylish formatter.
pub fn render_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    for file in summary.files.iter().filter(|file| !file.diagnostics.is_empty()) {
        let _ = writeln!(out, "{}", file.path.display());

        let width = file
            .diagnostics
            .iter()
            .map(|d| format!("{}:{}", d.line, d.column).len())
            .max()
            .unwrap_or(0);

        for diagnostic in &file.diagnostics {
            let position = format!("{}:{}", diagnostic.line, diagnostic.column);
            let fixable = if diagnostic.fixable { " (fixable)" } else { "" };
            let _ = writeln!(
                out,
                "  {position:<width$}  {}  {}{fixable}",
                diagnostic.message, diagnostic.message_id
            );
        }
        out.push('\n');
    }

    for failure in &summary.failures {
        let _ = writeln!(out, "{}", failure.path.display());
        let _ = writeln!(out, "  error  {}\n", failure.message);
    }

    let problems = summary.diagnostic_count() + summary.failures.len();
    if problems > 0 {
        let _ = writeln!(
            out,
            "{} ({} fixable)",
            plural(problems, "problem", "problems"),
            summary.fixable_count()
        );
    }

    if summary.fixes_applied() > 0 {
        let _ = writeln!(
            out,
            "Applied {} in {}",
            plural(summary.fixes_applied(), "fix", "fixes"),
            plural(summary.files_changed(), "file", "files")
        );
    }

    if summary.fixes_available() > 0 {
        let _ = writeln!(
            out,
            "{} available",
            plural(summary.fixes_available(), "fix", "fixes")
        );
    }

    out
}

/// Render the summary as pretty-printed JSON.
pub fn render_json(summary: &RunSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
