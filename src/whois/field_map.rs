//! Ordered label to value map.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Every label seen in a response with the last value seen for it.
///
/// Keys keep the position of their first occurrence; a repeated label
/// overwrites the value in place. Labels are compared exactly as written.
/// Serializes as a JSON object in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
    /// Label to position in `entries`
    index: HashMap<String, usize>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, value: &str) {
        match self.index.get(label) {
            Some(&position) => {
                let existing = &mut self.entries[position].1;
                existing.clear();
                existing.push_str(value);
            }
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), value.to_string()));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.index
            .get(label)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
