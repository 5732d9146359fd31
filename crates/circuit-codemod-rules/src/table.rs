//! Built-in Circuit UI migration rules.

use crate::rule::{Rule, RuleTable};
use crate::transforms::{BodyVariant, ChildrenToProp, PropToChildren};

/// Status variants shared by badges and notifications.
const STATUS_VARIANTS: &[(&str, &str)] = &[
    ("confirm", "success"),
    ("notify", "warning"),
    ("alert", "danger"),
];

/// Configuration consumed by the built-in table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Attributes an icon child may carry and still be moved into the `icon` prop
    pub icon_child_attributes: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            icon_child_attributes: vec!["size".to_string()],
        }
    }
}

/// The Circuit UI rule table, in evaluation order.
pub fn circuit_ui(options: &TableOptions) -> RuleTable {
    RuleTable::new(vec![
        Rule::name(&["Toggle"], &[("explanation", "description")]),
        Rule::values(&["Badge"], "variant", STATUS_VARIANTS),
        Rule::hook_values(
            &[
                "NotificationInline",
                "NotificationBanner",
                "NotificationToast",
                "NotificationFullscreen",
            ],
            "setToast",
            "variant",
            STATUS_VARIANTS,
        ),
        Rule::values(
            &["Button", "IconButton", "CloseButton"],
            "size",
            &[("kilo", "s"), ("giga", "m")],
        ),
        Rule::values(&["Body"], "size", &[("one", "m"), ("two", "s")]),
        Rule::values(
            &["Headline"],
            "size",
            &[("one", "l"), ("two", "m"), ("three", "s"), ("four", "s")],
        ),
        Rule::custom(
            &["IconButton"],
            ChildrenToProp::new("icon", options.icon_child_attributes.clone()),
        ),
        Rule::custom(&["IconButton"], PropToChildren::new("label")),
        Rule::custom(&["Body"], BodyVariant::new()),
    ])
}
