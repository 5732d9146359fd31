//! Move an icon passed as the only child into a dedicated prop.
//!
//! `<IconButton><Plus size="24" /></IconButton>` becomes
//! `<IconButton icon={Plus} />`.

use oxc_ast::ast::{JSXAttributeItem, JSXChild, JSXElement, JSXElementName};
use oxc_span::Span;

use crate::context::RuleContext;
use crate::diagnostic::{Diagnostic, Fix, MessageKind};
use crate::jsx::{attribute_name, filter_whitespace_children, find_attribute, opening_content_end};
use crate::rule::CustomTransform;

/// Children to prop migration.
#[derive(Debug, Clone)]
pub struct ChildrenToProp {
    /// Prop that now receives the child component (e.g., "icon")
    prop: String,

    /// Attributes the child may carry and still be converted
    allowed_child_attributes: Vec<String>,
}

impl ChildrenToProp {
    pub fn new(prop: &str, allowed_child_attributes: Vec<String>) -> Self {
        Self {
            prop: prop.to_string(),
            allowed_child_attributes,
        }
    }

    /// Component name of the only child, when it can be moved into the prop.
    fn convertible_child<'b>(&self, children: &[&'b JSXChild<'_>]) -> Option<&'b str> {
        let &[child] = children else {
            return None;
        };
        let JSXChild::Element(child) = child else {
            return None;
        };
        if !filter_whitespace_children(&child.children).is_empty() {
            return None;
        }

        let only_allowed = child.opening_element.attributes.iter().all(|item| match item {
            JSXAttributeItem::Attribute(attr) => attribute_name(attr)
                .is_some_and(|name| self.allowed_child_attributes.iter().any(|a| a == name)),
            JSXAttributeItem::SpreadAttribute(_) => false,
        });
        if !only_allowed {
            return None;
        }

        // Only component references can be passed as a value
        match &child.opening_element.name {
            JSXElementName::IdentifierReference(ident) => Some(ident.name.as_str()),
            _ => None,
        }
    }
}

impl CustomTransform for ChildrenToProp {
    fn name(&self) -> &'static str {
        "children-to-prop"
    }

    fn apply(&self, element: &JSXElement<'_>, component: &str, ctx: &mut RuleContext<'_>) {
        let opening = &element.opening_element;

        // Already migrated
        if find_attribute(opening, &self.prop).is_some() {
            return;
        }

        let children = filter_whitespace_children(&element.children);
        if children.is_empty() {
            return;
        }

        let fix = self.convertible_child(&children).map(|child| {
            let start = opening_content_end(ctx.source_text(), opening);
            Fix::replace(
                Span::new(start, element.span.end),
                format!(" {}={{{child}}} />", self.prop),
            )
        });

        ctx.report(
            Diagnostic::new(MessageKind::IconChildren, element.span)
                .with_data("component", component)
                .with_data("replacement", self.prop.as_str())
                .with_optional_fix(fix),
        );
    }
}
