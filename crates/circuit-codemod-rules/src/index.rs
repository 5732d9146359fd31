//! Lookup tables from component and hook names to rules.
//!
//! Indices hold positions into the [`RuleTable`] they were built from, in
//! table order, so rules touching the same component run in the order they
//! were declared.

use std::collections::HashMap;

use crate::rule::{Rule, RuleTable};

/// Component name -> positions of the rules scoped to it.
#[derive(Debug, Clone, Default)]
pub struct ComponentRuleIndex {
    by_component: HashMap<String, Vec<usize>>,
}

impl ComponentRuleIndex {
    pub fn build(table: &RuleTable) -> Self {
        let mut by_component: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, rule) in table.iter().enumerate() {
            for component in rule.components() {
                by_component
                    .entry(component.clone())
                    .or_default()
                    .push(position);
            }
        }

        Self { by_component }
    }

    /// Rule positions for a component, empty if none apply.
    pub fn get(&self, component: &str) -> &[usize] {
        self.by_component
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct component names.
    pub fn len(&self) -> usize {
        self.by_component.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_component.is_empty()
    }
}

/// Hook name -> positions of the value rules that apply to its calls.
#[derive(Debug, Clone, Default)]
pub struct HookRuleIndex {
    by_hook: HashMap<String, Vec<usize>>,
}

impl HookRuleIndex {
    pub fn build(table: &RuleTable) -> Self {
        let mut by_hook: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, rule) in table.iter().enumerate() {
            if let Rule::Values(values) = rule {
                if let Some(hook) = &values.hook {
                    by_hook.entry(hook.clone()).or_default().push(position);
                }
            }
        }

        Self { by_hook }
    }

    pub fn get(&self, hook: &str) -> &[usize] {
        self.by_hook.get(hook).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_hook.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hook.is_empty()
    }
}
