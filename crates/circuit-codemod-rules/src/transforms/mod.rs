//! Bespoke migrations that go beyond renaming a prop or a value.
//!
//! Each transform detects the deprecated shape on its own and only offers a
//! fix when the rewrite is mechanical. Everything else is report-only.

mod body_variant;
mod children_to_prop;
mod prop_to_children;

pub use body_variant::BodyVariant;
pub use children_to_prop::ChildrenToProp;
pub use prop_to_children::PropToChildren;
