//! Split the `Body` `variant` prop into explicit `as`, `weight` and `color` props.

use oxc_ast::ast::JSXElement;

use crate::context::RuleContext;
use crate::diagnostic::{Diagnostic, Fix, MessageKind};
use crate::extract::attribute_value;
use crate::jsx::find_attribute;
use crate::rule::CustomTransform;

/// Variants that became a `color` value.
const COLOR_VARIANTS: &[(&str, &str)] = &[
    ("success", "success"),
    ("error", "danger"),
    ("subtle", "subtle"),
];

/// Body variant migration.
#[derive(Debug, Clone, Default)]
pub struct BodyVariant;

impl BodyVariant {
    pub fn new() -> Self {
        Self
    }
}

impl CustomTransform for BodyVariant {
    fn name(&self) -> &'static str {
        "body-variant"
    }

    fn apply(&self, element: &JSXElement<'_>, component: &str, ctx: &mut RuleContext<'_>) {
        let opening = &element.opening_element;

        let Some(attr) = find_attribute(opening, "variant") else {
            return;
        };
        let Some(current) = attribute_value(attr) else {
            return;
        };

        let (prop, value) = match current {
            // `as` is already taken, so emphasis moves to the weight
            "highlight" if find_attribute(opening, "as").is_some() => ("weight", "bold"),
            "highlight" => ("as", "strong"),
            "quote" => ("as", "blockquote"),
            other => match COLOR_VARIANTS.iter().find(|(variant, _)| *variant == other) {
                Some((_, color)) => ("color", *color),
                None => return,
            },
        };

        // Never overwrite a value the author already set
        let fix = if find_attribute(opening, prop).is_some() {
            None
        } else {
            Some(Fix::replace(attr.span, format!("{prop}=\"{value}\"")))
        };

        ctx.report(
            Diagnostic::new(MessageKind::BodyVariant, attr.span)
                .with_data("component", component)
                .with_data("current", current)
                .with_data("replacement", prop)
                .with_data("value", value)
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
            BodyVariant::new().apply(element, "Body", ctx);
            ctx.diagnostics().to_vec()
        });
        let output = fixed(code, &diagnostics);
        (diagnostics, output)
    }

    #[test]
    fn highlight_becomes_strong() {
        let (diagnostics, output) = run(r#"<Body variant="highlight">Hi</Body>"#);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "The Body's `highlight` variant has been replaced by `as=\"strong\"`."
        );
        assert_eq!(output, r#"<Body as="strong">Hi</Body>"#);
    }

    #[test]
    fn highlight_with_as_becomes_bold_weight() {
        let (_, output) = run(r#"<Body as="span" variant="highlight">Hi</Body>"#);

        assert_eq!(output, r#"<Body as="span" weight="bold">Hi</Body>"#);
    }

    #[test]
    fn maps_status_variants_to_colors() {
        let (_, output) = run("<Body variant={'error'}>Oops</Body>");
        assert_eq!(output, r#"<Body color="danger">Oops</Body>"#);

        let (_, output) = run(r#"<Body variant="subtle">Meh</Body>"#);
        assert_eq!(output, r#"<Body color="subtle">Meh</Body>"#);
    }

    #[test]
    fn quote_becomes_blockquote() {
        let (_, output) = run(r#"<Body variant="quote">Cite</Body>"#);

        assert_eq!(output, r#"<Body as="blockquote">Cite</Body>"#);
    }

    #[test]
    fn reports_without_fix_when_target_prop_exists() {
        for code in [
            r#"<Body as="p" weight="regular" variant="highlight">Hi</Body>"#,
            r#"<Body color="normal" variant="success">Ok</Body>"#,
            r#"<Body as="div" variant="quote">Cite</Body>"#,
        ] {
            let (diagnostics, output) = run(code);
            assert_eq!(diagnostics.len(), 1, "{code}");
            assert!(diagnostics[0].fix.is_none(), "{code}");
            assert_eq!(output, code);
        }
    }

    #[test]
    fn ignores_unknown_and_dynamic_variants() {
        for code in [
            "<Body>Plain</Body>",
            r#"<Body variant="alert">Plain</Body>"#,
            "<Body variant={variant}>Plain</Body>",
        ] {
            let (diagnostics, _) = run(code);
            assert!(diagnostics.is_empty(), "{code}");
        }
    }
}
