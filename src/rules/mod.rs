//! Accessible-name rules for Android view classes.
//!
//! Each rule is one link; [`check_box_name()`] wires the canonical chain
//! `CheckBoxName -> ModifiableViewName -> ViewName`.

mod check_box_name;
pub mod class_names;
mod modifiable_view_name;
mod text;
mod view_name;

pub use check_box_name::CheckBoxName;
pub use modifiable_view_name::ModifiableViewName;
pub use text::is_null_or_empty;
pub use view_name::ViewName;

use crate::{ChainError, RuleChain, RuleChainBuilder};

/// Checkbox controls must expose visible or accessible text.
///
/// # Errors
///
/// Never fails in practice; the error is kept so callers handle every chain
/// construction the same way.
pub fn check_box_name() -> Result<RuleChain, ChainError> {
    RuleChainBuilder::new("check_box_name")
        .applies_to(class_names::CHECKBOX)
        .link(CheckBoxName)
        .link(ModifiableViewName)
        .link(ViewName)
        .build()
}
