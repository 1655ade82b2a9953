use std::collections::BTreeMap;

use super::property::{PropertyName, PropertyValue};

/// Scratch store shared by every link of a rule chain while one node is
/// being evaluated.
///
/// Later writes to a key replace earlier ones. Generic links collect after
/// specific ones, so their values win when two links write the same key.
/// Writing an absent attribute removes the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyBag {
    data: BTreeMap<PropertyName, PropertyValue>,
}

impl PropertyBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style.
    #[must_use]
    pub fn set(mut self, name: PropertyName, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Insert a value, replacing whatever the key held before.
    pub fn insert(&mut self, name: PropertyName, value: PropertyValue) {
        self.data.insert(name, value);
    }

    /// Record an optional attribute. `None` leaves the key absent.
    pub fn insert_opt<V: Into<PropertyValue>>(&mut self, name: PropertyName, value: Option<V>) {
        match value {
            Some(v) => {
                self.data.insert(name, v.into());
            }
            None => {
                self.data.remove(&name);
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: PropertyName) -> Option<&PropertyValue> {
        self.data.get(&name)
    }

    /// Text stored under `name`, or `None` if absent or not text.
    #[must_use]
    pub fn text(&self, name: PropertyName) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_text)
    }

    /// Flag stored under `name`, or `None` if absent or not a flag.
    #[must_use]
    pub fn flag(&self, name: PropertyName) -> Option<bool> {
        self.get(name).and_then(PropertyValue::as_bool)
    }

    #[must_use]
    pub fn contains(&self, name: PropertyName) -> bool {
        self.data.contains_key(&name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in `PropertyName` order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyName, &PropertyValue)> {
        self.data.iter().map(|(k, v)| (*k, v))
    }
}
