//! Per-file context handed to rules while a source is walked.

use oxc_span::Span;

use crate::diagnostic::Diagnostic;

/// Context passed to rule appliers and custom transforms.
#[derive(Debug)]
pub struct RuleContext<'s> {
    /// Source code being linted
    source_text: &'s str,
    /// Collected diagnostics, in report order
    diagnostics: Vec<Diagnostic>,
}

impl<'s> RuleContext<'s> {
    pub fn new(source_text: &'s str) -> Self {
        Self {
            source_text,
            diagnostics: Vec::new(),
        }
    }

    /// Get the source text
    pub fn source_text(&self) -> &'s str {
        self.source_text
    }

    /// Get a slice of source text for a span. Out of range spans yield "".
    pub fn span_text(&self, span: Span) -> &'s str {
        self.source_text
            .get(span.start as usize..span.end as usize)
            .unwrap_or("")
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get reference to diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
