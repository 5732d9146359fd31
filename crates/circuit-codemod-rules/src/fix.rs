//! Applying fixes to source text.
//!
//! Fixes are applied atomically and never overlap. A fix that collides with
//! an earlier one is skipped for this pass; re-linting the output picks it up
//! again, which is what [`Engine::fix`] does until nothing changes.

use oxc_span::SourceType;

use crate::diagnostic::{Diagnostic, Fix};
use crate::engine::{Engine, LintError};

/// Upper bound of lint-and-fix passes per file.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Result of applying one batch of fixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutput {
    /// Source text with the accepted fixes applied
    pub output: String,

    /// Number of fixes applied
    pub applied: usize,

    /// Number of fixes skipped because they overlapped or were malformed
    pub skipped: usize,
}

/// Result of fixing a file until it is stable.
#[derive(Debug, Clone)]
pub struct FixReport {
    /// Fixed source text
    pub output: String,

    /// Number of passes that applied at least one fix
    pub passes: usize,

    /// Total number of fixes applied
    pub applied: usize,

    /// Diagnostics still present in the output, all of them report-only
    /// unless the pass limit was hit
    pub remaining: Vec<Diagnostic>,
}

impl FixReport {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Edits must be sorted, disjoint, inside the source and on char boundaries.
fn is_well_formed(fix: &Fix, source: &str) -> bool {
    if fix.edits.is_empty() {
        return false;
    }

    let mut previous_end = 0;
    for edit in &fix.edits {
        let (start, end) = (edit.span.start as usize, edit.span.end as usize);
        if start < previous_end
            || start > end
            || end > source.len()
            || !source.is_char_boundary(start)
            || !source.is_char_boundary(end)
        {
            return false;
        }
        previous_end = end;
    }

    true
}

/// Apply the fixes of `diagnostics` to `source`.
///
/// Fixes are taken in order of their start offset; ties keep report order.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> FixOutput {
    let mut fixes: Vec<&Fix> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
    fixes.sort_by_key(|fix| {
        let range = fix.range();
        (range.start, range.end)
    });

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut applied = 0;
    let mut skipped = 0;

    for fix in fixes {
        if !is_well_formed(fix, source) || (fix.range().start as usize) < cursor {
            skipped += 1;
            continue;
        }

        for edit in &fix.edits {
            output.push_str(&source[cursor..edit.span.start as usize]);
            output.push_str(&edit.replacement);
            cursor = edit.span.end as usize;
        }
        applied += 1;
    }

    output.push_str(&source[cursor..]);

    FixOutput {
        output,
        applied,
        skipped,
    }
}

impl Engine {
    /// Lint and fix `source_text` repeatedly until no fix applies or
    /// `max_passes` is reached.
    pub fn fix(
        &self,
        source_text: &str,
        source_type: SourceType,
        max_passes: usize,
    ) -> Result<FixReport, LintError> {
        let mut output = source_text.to_string();
        let mut diagnostics = self.lint(&output, source_type)?;
        let mut passes = 0;
        let mut applied = 0;

        while passes < max_passes && diagnostics.iter().any(Diagnostic::is_fixable) {
            let result = apply_fixes(&output, &diagnostics);
            if result.applied == 0 {
                break;
            }

            passes += 1;
            applied += result.applied;
            output = result.output;

            diagnostics = self
                .lint(&output, source_type)
                .map_err(|err| match err {
                    LintError::Parse(messages) => LintError::BrokenFix { pass: passes, messages },
                    other => other,
                })?;

            tracing::trace!(pass = passes, applied = result.applied, "Applied fixes");
        }

        Ok(FixReport {
            output,
            passes,
            applied,
            remaining: diagnostics,
        })
    }
}
