//! Fully qualified Android view class names rules are scoped to.

pub const CHECKBOX: &str = "android.widget.CheckBox";
pub const SWITCH: &str = "android.widget.Switch";
pub const EDIT_TEXT: &str = "android.widget.EditText";
