use crate::{LinkRole, PropertyBag, PropertyName, Rule, Verdict, ViewNode};

use super::text::is_null_or_empty;

/// Closes every accessible-name chain.
///
/// A view passes with a content description, or when it is hidden from
/// accessibility services and so never announced. Everything else fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewName;

impl Rule for ViewName {
    fn name(&self) -> &str {
        "view_name"
    }

    fn role(&self) -> LinkRole {
        LinkRole::Terminal
    }

    fn collect(&self, node: &ViewNode, props: &mut PropertyBag) {
        props.insert(PropertyName::ClassName, node.class_name.as_str().into());
        props.insert_opt(
            PropertyName::ContentDescription,
            node.content_description.as_deref(),
        );
        props.insert(
            PropertyName::ImportantForAccessibility,
            node.important_for_accessibility.into(),
        );
    }

    fn run(&self, props: &PropertyBag) -> Verdict {
        if !is_null_or_empty(props.text(PropertyName::ContentDescription)) {
            return Verdict::Pass;
        }
        // Absent flag means the view was never marked hidden.
        if props.flag(PropertyName::ImportantForAccessibility) == Some(false) {
            return Verdict::Pass;
        }
        Verdict::Fail
    }
}
