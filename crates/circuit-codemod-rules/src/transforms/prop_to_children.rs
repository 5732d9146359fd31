//! Move a text prop into the element's children.
//!
//! `<IconButton label="Close" icon={Close} />` becomes
//! `<IconButton icon={Close}>Close</IconButton>`.

use oxc_ast::ast::{JSXAttribute, JSXElement};
use oxc_span::{GetSpan, Span};

use crate::context::RuleContext;
use crate::diagnostic::{Diagnostic, Edit, Fix, MessageKind};
use crate::jsx::{
    attribute_value_as_children, filter_whitespace_children, find_attribute, opening_content_end,
};
use crate::rule::CustomTransform;

/// Prop to children migration.
#[derive(Debug, Clone)]
pub struct PropToChildren {
    /// Prop whose value becomes the children (e.g., "label")
    prop: String,
}

impl PropToChildren {
    pub fn new(prop: &str) -> Self {
        Self {
            prop: prop.to_string(),
        }
    }

    fn build_fix(&self, element: &JSXElement<'_>, attr: &JSXAttribute<'_>, source: &str) -> Option<Fix> {
        if !filter_whitespace_children(&element.children).is_empty() {
            return None;
        }
        let children = attribute_value_as_children(source, attr)?;

        let opening = &element.opening_element;
        let name = source.get(opening.name.span().start as usize..opening.name.span().end as usize)?;

        // The attribute is removed together with the whitespace before it
        let removal_start = source.get(..attr.span.start as usize)?.trim_end().len() as u32;
        let removal = Span::new(removal_start, attr.span.end);

        let edits = match &element.closing_element {
            Some(closing) => vec![
                Edit::new(removal, ""),
                Edit::new(Span::new(opening.span.end, closing.span.start), children),
            ],
            None => {
                let tail = format!(">{children}</{name}>");
                let content_end = opening_content_end(source, opening);
                if content_end == attr.span.end {
                    vec![Edit::new(Span::new(removal_start, element.span.end), tail)]
                } else {
                    vec![
                        Edit::new(removal, ""),
                        Edit::new(Span::new(content_end, element.span.end), tail),
                    ]
                }
            }
        };

        Some(Fix::from_edits(edits))
    }
}

impl CustomTransform for PropToChildren {
    fn name(&self) -> &'static str {
        "prop-to-children"
    }

    fn apply(&self, element: &JSXElement<'_>, component: &str, ctx: &mut RuleContext<'_>) {
        let Some(attr) = find_attribute(&element.opening_element, &self.prop) else {
            return;
        };

        let fix = self.build_fix(element, attr, ctx.source_text());

        ctx.report(
            Diagnostic::new(MessageKind::LabelChildren, attr.span)
                .with_data("component", component)
                .with_data("current", self.prop.as_str())
                .with_optional_fix(fix),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixed, with_element};
    use pretty_assertions::assert_eq;

    fn run(code: &str) -> (Vec<Diagnostic>, String) {
        let diagnostics = with_element(code, |element, ctx| {
            PropToChildren::new("label").apply(element, "IconButton", ctx);
            ctx.diagnostics().to_vec()
        });
        let output = fixed(code, &diagnostics);
        (diagnostics, output)
    }

    #[test]
    fn moves_label_into_children() {
        let (diagnostics, output) = run(r#"<IconButton label="Close" icon={Close} />"#);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, MessageKind::LabelChildren);
        assert_eq!(
            diagnostics[0].message(),
            "The IconButton's `label` prop has been replaced by the component's children."
        );
        assert_eq!(output, "<IconButton icon={Close}>Close</IconButton>");
    }

    #[test]
    fn moves_trailing_label_into_children() {
        let (_, output) = run("<IconButton icon={Close}\n  label={t('close')}\n/>");

        assert_eq!(output, "<IconButton icon={Close}>{t('close')}</IconButton>");
    }

    #[test]
    fn fills_empty_open_close_pair() {
        let (_, output) = run(r#"<IconButton label="Close" icon={Close}></IconButton>"#);

        assert_eq!(output, "<IconButton icon={Close}>Close</IconButton>");
    }

    #[test]
    fn skips_elements_without_label() {
        let (diagnostics, _) = run("<IconButton icon={Close}>Close</IconButton>");

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn reports_without_fix_when_children_exist() {
        let (diagnostics, output) = run(r#"<IconButton label="Close"><Close /></IconButton>"#);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].fix.is_none());
        assert_eq!(output, r#"<IconButton label="Close"><Close /></IconButton>"#);
    }

    #[test]
    fn reports_without_fix_for_untransformable_values() {
        let (diagnostics, _) = run("<IconButton label icon={Close} />");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].fix.is_none());
    }
}
