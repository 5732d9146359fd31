//! Diagnostics and fixes reported by the rule engine.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use oxc_span::Span;
use regex::{Captures, Regex};

/// The kind of finding, which selects the message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// A prop was renamed.
    PropName,
    /// A value of a prop was renamed.
    PropValue,
    /// A `Body` variant was replaced by a dedicated prop.
    BodyVariant,
    /// An icon passed as children should move to the `icon` prop.
    IconChildren,
    /// A `label` prop should move to the element's children.
    LabelChildren,
}

impl MessageKind {
    /// Stable identifier of the message, as used in reports.
    pub fn id(&self) -> &'static str {
        match self {
            MessageKind::PropName => "propName",
            MessageKind::PropValue => "propValue",
            MessageKind::BodyVariant => "bodyVariant",
            MessageKind::IconChildren => "iconChildren",
            MessageKind::LabelChildren => "labelChildren",
        }
    }

    /// Message template with `{{placeholder}}` slots filled from diagnostic data.
    pub fn template(&self) -> &'static str {
        match self {
            MessageKind::PropName => {
                "The {{component}}'s `{{current}}` prop has been renamed to `{{replacement}}`."
            }
            MessageKind::PropValue => {
                "The {{component}}'s `{{prop}}` prop value `{{current}}` has been renamed to `{{replacement}}`."
            }
            MessageKind::BodyVariant => {
                "The {{component}}'s `{{current}}` variant has been replaced by `{{replacement}}=\"{{value}}\"`."
            }
            MessageKind::IconChildren => {
                "The {{component}}'s icon should be passed to the `{{replacement}}` prop instead of as children."
            }
            MessageKind::LabelChildren => {
                "The {{component}}'s `{{current}}` prop has been replaced by the component's children."
            }
        }
    }
}

/// A single text replacement. An empty span is an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub replacement: String,
}

impl Edit {
    pub fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }
}

/// A fix is applied atomically: either all of its edits or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub edits: Vec<Edit>,
}

impl Fix {
    /// Replace a single span.
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            edits: vec![Edit::new(span, replacement)],
        }
    }

    /// Build a fix from several edits. Edits are kept sorted by start offset.
    pub fn from_edits(mut edits: Vec<Edit>) -> Self {
        edits.sort_by_key(|e| (e.span.start, e.span.end));
        Self { edits }
    }

    /// The smallest span covering every edit.
    pub fn range(&self) -> Span {
        let start = self.edits.iter().map(|e| e.span.start).min().unwrap_or(0);
        let end = self.edits.iter().map(|e| e.span.end).max().unwrap_or(0);
        Span::new(start, end)
    }
}

/// A reported finding with an optional fix.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Span of the offending node
    pub span: Span,

    /// Message kind
    pub kind: MessageKind,

    /// Values interpolated into the message template
    pub data: BTreeMap<String, String>,

    /// Automatic fix, absent for report-only findings
    pub fix: Option<Fix>,
}

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_]+)\s*\}\}").expect("Invalid placeholder regex")
});

impl Diagnostic {
    pub fn new(kind: MessageKind, span: Span) -> Self {
        Self {
            span,
            kind,
            data: BTreeMap::new(),
            fix: None,
        }
    }

    /// Attach a message data value.
    pub fn with_data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// Attach a fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Attach a fix when one could be built.
    pub fn with_optional_fix(mut self, fix: Option<Fix>) -> Self {
        self.fix = fix;
        self
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }

    /// Render the message. Unknown placeholders are left as written.
    pub fn message(&self) -> String {
        PLACEHOLDER_RE
            .replace_all(self.kind.template(), |caps: &Captures| {
                match self.data.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
