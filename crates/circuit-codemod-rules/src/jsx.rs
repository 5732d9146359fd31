//! Structural helpers for JSX elements and call expressions.

use oxc_ast::ast::{
    CallExpression, Expression, JSXAttribute, JSXAttributeItem, JSXAttributeName,
    JSXAttributeValue, JSXChild, JSXElementName, JSXOpeningElement,
};

use crate::extract::expression_value;

/// Tag name of an element, for plain identifier tags only.
///
/// `<Foo.Bar>` and `<svg:rect>` have no name a rule can be scoped to.
pub fn element_name<'b>(name: &'b JSXElementName<'_>) -> Option<&'b str> {
    match name {
        JSXElementName::Identifier(ident) => Some(ident.name.as_str()),
        JSXElementName::IdentifierReference(ident) => Some(ident.name.as_str()),
        JSXElementName::NamespacedName(_)
        | JSXElementName::MemberExpression(_)
        | JSXElementName::ThisExpression(_) => None,
    }
}

/// Name of an attribute, for plain identifier names only.
pub fn attribute_name<'b>(attribute: &'b JSXAttribute<'_>) -> Option<&'b str> {
    match &attribute.name {
        JSXAttributeName::Identifier(ident) => Some(ident.name.as_str()),
        JSXAttributeName::NamespacedName(_) => None,
    }
}

/// Find the first attribute named exactly `name`. Spread attributes are skipped.
pub fn find_attribute<'b, 'a>(
    opening: &'b JSXOpeningElement<'a>,
    name: &str,
) -> Option<&'b JSXAttribute<'a>> {
    opening.attributes.iter().find_map(|item| match item {
        JSXAttributeItem::Attribute(attr) if attribute_name(attr) == Some(name) => Some(&**attr),
        _ => None,
    })
}

/// Children without the whitespace-only text nodes the parser keeps between tags.
pub fn filter_whitespace_children<'b, 'a>(children: &'b [JSXChild<'a>]) -> Vec<&'b JSXChild<'a>> {
    children
        .iter()
        .filter(|child| !matches!(child, JSXChild::Text(text) if text.value.trim().is_empty()))
        .collect()
}

/// Text that renders an attribute's value when placed between the element's tags.
///
/// Returns `None` when the value cannot be moved mechanically.
pub fn attribute_value_as_children(source_text: &str, attribute: &JSXAttribute<'_>) -> Option<String> {
    match attribute.value.as_ref()? {
        JSXAttributeValue::StringLiteral(lit) => Some(text_as_children(lit.value.as_str())),
        JSXAttributeValue::ExpressionContainer(container) => {
            let expression = container.expression.as_expression()?;
            if let Some(text) = expression_value(expression) {
                return Some(text_as_children(text));
            }
            source_text
                .get(container.span.start as usize..container.span.end as usize)
                .map(str::to_string)
        }
        JSXAttributeValue::Element(_) | JSXAttributeValue::Fragment(_) => None,
    }
}

/// JSX text cannot hold `{`, `}`, `<` or `>` verbatim.
fn text_as_children(text: &str) -> String {
    if text.contains(['{', '}', '<', '>']) {
        let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
        format!("{{\"{escaped}\"}}")
    } else {
        text.to_string()
    }
}

/// Name of the function being called, for `fn()` and `obj.fn()` callees.
pub fn callee_name<'b>(call: &'b CallExpression<'_>) -> Option<&'b str> {
    match &call.callee {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        _ => None,
    }
}

/// Offset right after the last name, type argument or attribute of an opening tag,
/// before any whitespace and the closing `>` or `/>`.
pub fn opening_content_end(source_text: &str, opening: &JSXOpeningElement<'_>) -> u32 {
    let text = source_text
        .get(opening.span.start as usize..opening.span.end as usize)
        .unwrap_or("");
    let inner = text.strip_suffix('>').unwrap_or(text);
    let inner = inner.strip_suffix('/').unwrap_or(inner);
    opening.span.start + inner.trim_end().len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{with_call, with_element};
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_attribute_case_sensitively() {
        with_element(r#"<Toggle Explanation="a" explanation="b" {...rest} />"#, |element, _| {
            let attr = find_attribute(&element.opening_element, "explanation").unwrap();
            assert_eq!(crate::extract::attribute_value(attr), Some("b"));
            assert!(find_attribute(&element.opening_element, "label").is_none());
        });
    }

    #[test]
    fn returns_first_matching_attribute() {
        with_element(r#"<Toggle label="a" label="b" />"#, |element, _| {
            let attr = find_attribute(&element.opening_element, "label").unwrap();
            assert_eq!(crate::extract::attribute_value(attr), Some("a"));
        });
    }

    #[test]
    fn reads_element_names() {
        with_element("<IconButton />", |element, _| {
            assert_eq!(element_name(&element.opening_element.name), Some("IconButton"));
        });
        with_element("<div />", |element, _| {
            assert_eq!(element_name(&element.opening_element.name), Some("div"));
        });
        with_element("<Foo.Bar />", |element, _| {
            assert_eq!(element_name(&element.opening_element.name), None);
        });
    }

    #[test]
    fn filters_whitespace_children() {
        let code = "<IconButton>\n  <Plus />\n  text\n</IconButton>";
        with_element(code, |element, _| {
            let children = filter_whitespace_children(&element.children);
            assert_eq!(children.len(), 2);
            assert!(matches!(children[0], JSXChild::Element(_)));
            assert!(matches!(children[1], JSXChild::Text(_)));
        });
    }

    #[test]
    fn converts_attribute_values_to_children() {
        let cases = [
            (r#"<IconButton label="Close" />"#, Some("Close")),
            ("<IconButton label={'Close'} />", Some("Close")),
            ("<IconButton label={t('close')} />", Some("{t('close')}")),
            (r#"<IconButton label="a > b" />"#, Some(r#"{"a > b"}"#)),
            ("<IconButton label={<b />} />", Some("{<b />}")),
            ("<IconButton label=<b /> />", None),
            ("<IconButton label />", None),
        ];

        for (code, expected) in cases {
            let actual = with_element(code, |element, ctx| {
                let attr = find_attribute(&element.opening_element, "label").unwrap();
                attribute_value_as_children(ctx.source_text(), attr)
            });
            assert_eq!(actual.as_deref(), expected, "{code}");
        }
    }

    #[test]
    fn reads_callee_names() {
        assert_eq!(with_call("setToast({});", |call, _| callee_name(call).map(str::to_string)), Some("setToast".to_string()));
        assert_eq!(with_call("toast.setToast({});", |call, _| callee_name(call).map(str::to_string)), Some("setToast".to_string()));
        assert_eq!(with_call("getFn()({});", |call, _| callee_name(call).map(str::to_string)), None);
    }

    #[test]
    fn finds_end_of_opening_tag_content() {
        let code = r#"<IconButton label="x"  >y</IconButton>"#;
        with_element(code, |element, ctx| {
            let end = opening_content_end(ctx.source_text(), &element.opening_element);
            assert_eq!(&code[..end as usize], r#"<IconButton label="x""#);
        });

        let code = "<IconButton />";
        with_element(code, |element, ctx| {
            let end = opening_content_end(ctx.source_text(), &element.opening_element);
            assert_eq!(&code[..end as usize], "<IconButton");
        });
    }
}
