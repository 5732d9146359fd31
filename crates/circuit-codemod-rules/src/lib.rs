//! Rule engine for migrating Circuit UI component props.
//!
//! This crate matches a declarative table of renamed props and prop values
//! against JSX elements and hook calls, reporting diagnostics with optional
//! non-overlapping text edits that migrate the code to the current API.

pub mod apply;
pub mod context;
pub mod diagnostic;
pub mod engine;
pub mod extract;
pub mod fix;
pub mod index;
pub mod jsx;
pub mod rule;
pub mod table;
pub mod transforms;

#[cfg(test)]
mod test_support;

pub use context::RuleContext;
pub use diagnostic::{Diagnostic, Edit, Fix, MessageKind};
pub use engine::{Engine, LintError};
pub use fix::{apply_fixes, FixOutput, FixReport, DEFAULT_MAX_PASSES};
pub use index::{ComponentRuleIndex, HookRuleIndex};
pub use rule::{CustomRule, CustomTransform, NameRule, RenameMap, Rule, RuleTable, ValuesRule};
pub use table::{circuit_ui, TableOptions};

/// Name under which diagnostics of this engine are reported.
pub const RULE_NAME: &str = "no-renamed-props";
