/// Read-only snapshot of one element of a UI view tree.
///
/// Only the attributes rule links read are carried. Every textual attribute is
/// optional; an absent attribute is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewNode {
    pub class_name: String,
    pub text: Option<String>,
    pub content_description: Option<String>,
    pub labeled_by: Option<String>,
    pub hint_text: Option<String>,
    pub important_for_accessibility: bool,
}

/// A view is announced by accessibility services unless marked otherwise.
impl Default for ViewNode {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            text: None,
            content_description: None,
            labeled_by: None,
            hint_text: None,
            important_for_accessibility: true,
        }
    }
}

impl ViewNode {
    /// A node of the given class with no text attributes, important for
    /// accessibility.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_content_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }

    /// Resource id of the view acting as this node's label.
    #[must_use]
    pub fn with_labeled_by(mut self, label_id: impl Into<String>) -> Self {
        self.labeled_by = Some(label_id.into());
        self
    }

    #[must_use]
    pub fn with_hint_text(mut self, hint: impl Into<String>) -> Self {
        self.hint_text = Some(hint.into());
        self
    }

    #[must_use]
    pub fn important_for_accessibility(mut self, important: bool) -> Self {
        self.important_for_accessibility = important;
        self
    }
}
