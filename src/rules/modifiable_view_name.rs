use crate::{PropertyBag, PropertyName, Rule, Verdict, ViewNode};

use super::text::is_null_or_empty;

/// Controls whose state the user changes can be named by a separate label
/// view or, for editable fields, by their hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiableViewName;

impl Rule for ModifiableViewName {
    fn name(&self) -> &str {
        "modifiable_view_name"
    }

    fn collect(&self, node: &ViewNode, props: &mut PropertyBag) {
        props.insert_opt(PropertyName::LabeledBy, node.labeled_by.as_deref());
        props.insert_opt(PropertyName::HintText, node.hint_text.as_deref());
    }

    fn run(&self, props: &PropertyBag) -> Verdict {
        let labelled = !is_null_or_empty(props.text(PropertyName::LabeledBy));
        let hinted = !is_null_or_empty(props.text(PropertyName::HintText));
        if labelled || hinted {
            Verdict::Pass
        } else {
            Verdict::Incomplete
        }
    }
}
