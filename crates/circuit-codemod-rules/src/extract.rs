//! Literal value extraction from JSX attributes and object properties.
//!
//! Only values that are statically known strings are extracted. Everything
//! else yields `None`, which callers treat as "the rule does not apply".

use oxc_ast::ast::{Expression, JSXAttribute, JSXAttributeValue, ObjectProperty, PropertyKey};

/// Extract the string value of a JSX attribute.
///
/// Handles `prop="x"`, `prop={'x'}`, `prop={"x"}` and `` prop={`x`} ``.
pub fn attribute_value<'b>(attribute: &'b JSXAttribute<'_>) -> Option<&'b str> {
    match attribute.value.as_ref()? {
        JSXAttributeValue::StringLiteral(lit) => Some(lit.value.as_str()),
        JSXAttributeValue::ExpressionContainer(container) => {
            expression_value(container.expression.as_expression()?)
        }
        JSXAttributeValue::Element(_) | JSXAttributeValue::Fragment(_) => None,
    }
}

/// Extract the string value of an object literal property.
pub fn property_value<'b>(property: &'b ObjectProperty<'_>) -> Option<&'b str> {
    expression_value(&property.value)
}

/// Extract the static name of an object literal property key.
///
/// Computed keys (`[key]: value`) never match, even when the key is a literal.
pub fn property_key<'b>(property: &'b ObjectProperty<'_>) -> Option<&'b str> {
    if property.computed {
        return None;
    }

    match &property.key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// Extract a string from a simple string expression.
pub fn expression_value<'b>(expression: &'b Expression<'_>) -> Option<&'b str> {
    match expression {
        Expression::StringLiteral(lit) => Some(lit.value.as_str()),
        // A template without substitutions is just a string
        Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() && tpl.quasis.len() == 1 => {
            tpl.quasis[0].value.cooked.as_ref().map(|cooked| cooked.as_str())
        }
        Expression::ParenthesizedExpression(paren) => expression_value(&paren.expression),
        _ => None,
    }
}
