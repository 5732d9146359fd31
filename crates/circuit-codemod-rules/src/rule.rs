//! Declarative rule records.

use std::fmt;
use std::sync::Arc;

use oxc_ast::ast::JSXElement;

use crate::context::RuleContext;

/// Ordered `old -> new` pairs, looked up by old key.
///
/// Keys are expected to be unique. The built-in table is checked by its tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMap {
    entries: Vec<(String, String)>,
}

impl RenameMap {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(old, new)| (old.to_string(), new.to_string()))
                .collect(),
        }
    }

    /// The replacement for `old`, if `old` was renamed.
    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == old)
            .map(|(_, new)| new.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_duplicate_keys(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .any(|(i, (key, _))| self.entries[..i].iter().any(|(other, _)| other == key))
    }
}

/// Renames props of the listed components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRule {
    pub components: Vec<String>,
    pub props: RenameMap,
}

/// Renames values of one prop of the listed components, and optionally the
/// same key of the object passed to a hook function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesRule {
    pub components: Vec<String>,
    pub hook: Option<String>,
    pub prop: String,
    pub values: RenameMap,
}

/// Delegates detection and fixing to a bespoke transform.
#[derive(Debug, Clone)]
pub struct CustomRule {
    pub components: Vec<String>,
    pub transform: Arc<dyn CustomTransform>,
}

/// A bespoke migration that inspects a whole element.
pub trait CustomTransform: Send + Sync + fmt::Debug {
    /// Transform identifier (e.g., "icon-children")
    fn name(&self) -> &'static str;

    /// Inspect `element` and report diagnostics through `ctx`.
    ///
    /// # Arguments
    /// * `element` - The matched element
    /// * `component` - The tag name the rule matched on
    /// * `ctx` - Source access and the diagnostic sink
    fn apply(&self, element: &JSXElement<'_>, component: &str, ctx: &mut RuleContext<'_>);
}

/// One deprecated-API pattern.
#[derive(Debug, Clone)]
pub enum Rule {
    Name(NameRule),
    Values(ValuesRule),
    Custom(CustomRule),
}

impl Rule {
    pub fn name(components: &[&str], props: &[(&str, &str)]) -> Self {
        Rule::Name(NameRule {
            components: to_strings(components),
            props: RenameMap::from_pairs(props),
        })
    }

    pub fn values(components: &[&str], prop: &str, values: &[(&str, &str)]) -> Self {
        Rule::Values(ValuesRule {
            components: to_strings(components),
            hook: None,
            prop: prop.to_string(),
            values: RenameMap::from_pairs(values),
        })
    }

    /// A value rule that also applies to the object passed to calls of `hook`.
    pub fn hook_values(
        components: &[&str],
        hook: &str,
        prop: &str,
        values: &[(&str, &str)],
    ) -> Self {
        Rule::Values(ValuesRule {
            components: to_strings(components),
            hook: Some(hook.to_string()),
            prop: prop.to_string(),
            values: RenameMap::from_pairs(values),
        })
    }

    pub fn custom(components: &[&str], transform: impl CustomTransform + 'static) -> Self {
        Rule::Custom(CustomRule {
            components: to_strings(components),
            transform: Arc::new(transform),
        })
    }

    /// Component names the rule is scoped to.
    pub fn components(&self) -> &[String] {
        match self {
            Rule::Name(rule) => &rule.components,
            Rule::Values(rule) => &rule.components,
            Rule::Custom(rule) => &rule.components,
        }
    }

    /// Hook name the rule also applies to.
    pub fn hook(&self) -> Option<&str> {
        match self {
            Rule::Values(rule) => rule.hook.as_deref(),
            Rule::Name(_) | Rule::Custom(_) => None,
        }
    }

    /// Kind identifier as used in rule listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Name(_) => "name",
            Rule::Values(_) => "values",
            Rule::Custom(_) => "custom",
        }
    }

    /// One-line human readable summary of what the rule migrates.
    pub fn describe(&self) -> String {
        let pairs = |map: &RenameMap| {
            map.iter()
                .map(|(old, new)| format!("{old} -> {new}"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        match self {
            Rule::Name(rule) => format!("props: {}", pairs(&rule.props)),
            Rule::Values(rule) => format!("`{}` values: {}", rule.prop, pairs(&rule.values)),
            Rule::Custom(rule) => format!("transform: {}", rule.transform.name()),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The ordered, immutable set of rules an engine runs.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
