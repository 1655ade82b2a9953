use crate::{PropertyBag, PropertyName, Rule, Verdict, ViewNode};

use super::text::is_null_or_empty;

/// A checkbox is named by the text it displays next to its box.
///
/// Passes as soon as visible text is present. Without it the rule has no
/// opinion, since a label or content description further down the chain may
/// still name the control.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckBoxName;

impl Rule for CheckBoxName {
    fn name(&self) -> &str {
        "check_box_name"
    }

    fn collect(&self, node: &ViewNode, props: &mut PropertyBag) {
        props.insert_opt(PropertyName::VisibleText, node.text.as_deref());
    }

    fn run(&self, props: &PropertyBag) -> Verdict {
        if is_null_or_empty(props.text(PropertyName::VisibleText)) {
            Verdict::Incomplete
        } else {
            Verdict::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkRole;

    #[test]
    fn collects_visible_text() {
        let mut props = PropertyBag::new();
        CheckBoxName.collect(
            &ViewNode::new("android.widget.CheckBox").with_text("Remember me"),
            &mut props,
        );
        assert_eq!(props.text(PropertyName::VisibleText), Some("Remember me"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn missing_text_is_absent() {
        let mut props = PropertyBag::new();
        CheckBoxName.collect(&ViewNode::new("android.widget.CheckBox"), &mut props);
        assert!(!props.contains(PropertyName::VisibleText));
    }

    #[test]
    fn verdicts() {
        let with_text = PropertyBag::new().set(PropertyName::VisibleText, "Remember me");
        assert_eq!(CheckBoxName.run(&with_text), Verdict::Pass);

        let empty = PropertyBag::new().set(PropertyName::VisibleText, "");
        assert_eq!(CheckBoxName.run(&empty), Verdict::Incomplete);

        assert_eq!(CheckBoxName.run(&PropertyBag::new()), Verdict::Incomplete);
    }

    #[test]
    fn is_intermediate() {
        assert_eq!(CheckBoxName.role(), LinkRole::Intermediate);
    }
}
