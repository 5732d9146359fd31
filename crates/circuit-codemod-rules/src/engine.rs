//! Rule dispatch over a parsed source file.

use oxc_allocator::Allocator;
use oxc_ast::ast::{CallExpression, JSXElement};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::apply::{apply_hook_value_rename, apply_name_rename, apply_value_rename};
use crate::context::RuleContext;
use crate::diagnostic::Diagnostic;
use crate::index::{ComponentRuleIndex, HookRuleIndex};
use crate::jsx::{callee_name, element_name};
use crate::rule::{Rule, RuleTable};

/// Errors that can occur while linting a source file.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Parse error: {}", .0.join("; "))]
    Parse(Vec<String>),

    #[error("Fixes of pass {pass} produced invalid syntax: {}", .messages.join("; "))]
    BrokenFix { pass: usize, messages: Vec<String> },
}

/// Runs a rule table against source files.
///
/// The engine holds no per-file state, so one instance can be shared across
/// threads and files.
#[derive(Debug, Clone)]
pub struct Engine {
    table: RuleTable,
    components: ComponentRuleIndex,
    hooks: HookRuleIndex,
}

impl Engine {
    /// Create an engine and build its lookup indices.
    pub fn new(table: RuleTable) -> Self {
        let components = ComponentRuleIndex::build(&table);
        let hooks = HookRuleIndex::build(&table);

        tracing::debug!(
            rules = table.len(),
            components = components.len(),
            hooks = hooks.len(),
            "Built rule indices"
        );

        Self {
            table,
            components,
            hooks,
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Parse `source_text` and collect the diagnostics of every rule, in traversal order.
    pub fn lint(
        &self,
        source_text: &str,
        source_type: SourceType,
    ) -> Result<Vec<Diagnostic>, LintError> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source_text, source_type).parse();

        if !ret.errors.is_empty() {
            return Err(LintError::Parse(
                ret.errors.iter().map(|e| e.to_string()).collect(),
            ));
        }

        let mut visitor = RuleVisitor {
            engine: self,
            ctx: RuleContext::new(source_text),
        };
        visitor.visit_program(&ret.program);

        Ok(visitor.ctx.into_diagnostics())
    }

    /// Run every rule scoped to the element's tag, in table order.
    pub fn visit_element(&self, element: &JSXElement<'_>, ctx: &mut RuleContext<'_>) {
        let Some(component) = element_name(&element.opening_element.name) else {
            return;
        };

        for &position in self.components.get(component) {
            let Some(rule) = self.table.get(position) else {
                continue;
            };

            tracing::trace!(component, kind = rule.kind(), "Applying rule");

            match rule {
                Rule::Name(rule) => apply_name_rename(element, component, rule, ctx),
                Rule::Values(rule) => apply_value_rename(element, component, rule, ctx),
                Rule::Custom(rule) => rule.transform.apply(element, component, ctx),
            }
        }
    }

    /// Run every value rule registered for the called hook.
    pub fn visit_call(&self, call: &CallExpression<'_>, ctx: &mut RuleContext<'_>) {
        let Some(hook) = callee_name(call) else {
            return;
        };

        for &position in self.hooks.get(hook) {
            // The hook index only holds value rules
            if let Some(Rule::Values(rule)) = self.table.get(position) {
                apply_hook_value_rename(call, hook, rule, ctx);
            }
        }
    }
}

/// Depth-first walk that hands elements and calls to the engine.
struct RuleVisitor<'e, 's> {
    engine: &'e Engine,
    ctx: RuleContext<'s>,
}

impl<'a> Visit<'a> for RuleVisitor<'_, '_> {
    fn visit_jsx_element(&mut self, it: &JSXElement<'a>) {
        self.engine.visit_element(it, &mut self.ctx);
        walk::walk_jsx_element(self, it);
    }

    fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
        self.engine.visit_call(it, &mut self.ctx);
        walk::walk_call_expression(self, it);
    }
}
