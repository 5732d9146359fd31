//! Appliers for the declarative `name` and `values` rules.

use oxc_ast::ast::{
    Argument, CallExpression, JSXAttributeItem, JSXAttributeName, JSXElement, ObjectPropertyKind,
};
use oxc_span::GetSpan;

use crate::context::RuleContext;
use crate::diagnostic::{Diagnostic, Fix, MessageKind};
use crate::extract::{attribute_value, property_key, property_value};
use crate::jsx::attribute_name;
use crate::rule::{NameRule, ValuesRule};

/// Report and rename every attribute whose name was renamed.
///
/// Only the attribute-name token is replaced; the value is left untouched.
pub fn apply_name_rename(
    element: &JSXElement<'_>,
    component: &str,
    rule: &NameRule,
    ctx: &mut RuleContext<'_>,
) {
    for item in &element.opening_element.attributes {
        let JSXAttributeItem::Attribute(attr) = item else {
            continue;
        };
        let JSXAttributeName::Identifier(ident) = &attr.name else {
            continue;
        };
        let Some(replacement) = rule.props.get(ident.name.as_str()) else {
            continue;
        };

        ctx.report(
            Diagnostic::new(MessageKind::PropName, attr.span)
                .with_data("component", component)
                .with_data("current", ident.name.as_str())
                .with_data("replacement", replacement)
                .with_fix(Fix::replace(ident.span, replacement)),
        );
    }
}

/// Report and rewrite statically known values of `rule.prop` that were renamed.
pub fn apply_value_rename(
    element: &JSXElement<'_>,
    component: &str,
    rule: &ValuesRule,
    ctx: &mut RuleContext<'_>,
) {
    for item in &element.opening_element.attributes {
        let JSXAttributeItem::Attribute(attr) = item else {
            continue;
        };
        if attribute_name(attr) != Some(rule.prop.as_str()) {
            continue;
        }
        // Dynamic values are never reported
        let Some(current) = attribute_value(attr) else {
            continue;
        };
        let Some(replacement) = rule.values.get(current) else {
            continue;
        };
        let Some(value) = &attr.value else {
            continue;
        };

        ctx.report(
            Diagnostic::new(MessageKind::PropValue, attr.span)
                .with_data("component", component)
                .with_data("prop", rule.prop.as_str())
                .with_data("current", current)
                .with_data("replacement", replacement)
                .with_fix(Fix::replace(value.span(), format!("\"{replacement}\""))),
        );
    }
}

/// Report and rewrite renamed values in the object passed to a hook call.
pub fn apply_hook_value_rename(
    call: &CallExpression<'_>,
    hook: &str,
    rule: &ValuesRule,
    ctx: &mut RuleContext<'_>,
) {
    let Some(Argument::ObjectExpression(object)) = call.arguments.first() else {
        return;
    };

    for kind in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = kind else {
            continue;
        };
        if property_key(property) != Some(rule.prop.as_str()) {
            continue;
        }
        let Some(current) = property_value(property) else {
            continue;
        };
        let Some(replacement) = rule.values.get(current) else {
            continue;
        };

        let value_span = property.value.span();
        let quote = if ctx.span_text(value_span).starts_with('"') {
            '"'
        } else {
            '\''
        };

        ctx.report(
            Diagnostic::new(MessageKind::PropValue, property.span)
                .with_data("component", hook)
                .with_data("prop", rule.prop.as_str())
                .with_data("current", current)
                .with_data("replacement", replacement)
                .with_fix(Fix::replace(value_span, format!("{quote}{replacement}{quote}"))),
        );
    }
}
