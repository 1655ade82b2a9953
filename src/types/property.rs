use std::fmt;
use std::str::FromStr;

use super::error::ParsePropertyNameError;

/// Closed set of keys a [`PropertyBag`](super::PropertyBag) can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PropertyName {
    VisibleText,
    ClassName,
    ContentDescription,
    LabeledBy,
    HintText,
    ImportantForAccessibility,
}

impl PropertyName {
    pub const ALL: [PropertyName; 6] = [
        PropertyName::VisibleText,
        PropertyName::ClassName,
        PropertyName::ContentDescription,
        PropertyName::LabeledBy,
        PropertyName::HintText,
        PropertyName::ImportantForAccessibility,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyName::VisibleText => "VISIBLE_TEXT",
            PropertyName::ClassName => "CLASS_NAME",
            PropertyName::ContentDescription => "CONTENT_DESCRIPTION",
            PropertyName::LabeledBy => "LABELED_BY",
            PropertyName::HintText => "HINT_TEXT",
            PropertyName::ImportantForAccessibility => "IMPORTANT_FOR_ACCESSIBILITY",
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyName {
    type Err = ParsePropertyNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ParsePropertyNameError {
                input: s.to_owned(),
            })
    }
}

/// Typed value stored under a [`PropertyName`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    /// A UTF-8 string, possibly empty.
    Text(String),
    /// A boolean flag.
    Bool(bool),
}

impl PropertyValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Bool(_) => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::Text(_) => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(v) => write!(f, "\"{v}\""),
            PropertyValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_codes_parse_back() {
        for name in PropertyName::ALL {
            assert_eq!(name.as_str().parse::<PropertyName>().unwrap(), name);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "TEXT".parse::<PropertyName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown property name 'TEXT'");
    }

    #[test]
    fn typed_accessors() {
        let text = PropertyValue::from("Enable notifications");
        assert_eq!(text.as_text(), Some("Enable notifications"));
        assert_eq!(text.as_bool(), None);

        let flag = PropertyValue::from(true);
        assert_eq!(flag.as_bool(), Some(true));
        assert_eq!(flag.as_text(), None);
    }

    #[test]
    fn display() {
        assert_eq!(PropertyValue::from("ok").to_string(), "\"ok\"");
        assert_eq!(PropertyValue::Bool(false).to_string(), "false");
        assert_eq!(PropertyName::VisibleText.to_string(), "VISIBLE_TEXT");
    }
}
