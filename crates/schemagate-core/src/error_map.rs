//! Error accumulator returned by a validation call
//!
//! The map mirrors the schema's nesting: leaf keys carry a rendered message,
//! nested scopes carry their own map. Keys keep the position of their first
//! insertion; writing an existing key replaces its entry in place.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A single error-map value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    /// Rendered failure message
    Message(String),
    /// Errors of a nested scope
    Nested(ErrorMap),
}

impl ErrorEntry {
    /// The message, when this is a leaf
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            Self::Nested(_) => None,
        }
    }

    /// The nested map, when this is a scope
    pub fn as_nested(&self) -> Option<&ErrorMap> {
        match self {
            Self::Nested(map) => Some(map),
            Self::Message(_) => None,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Message(message) => Value::String(message.clone()),
            Self::Nested(map) => map.to_value(),
        }
    }
}

/// Ordered map of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<(String, ErrorEntry)>,
}

impl ErrorMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether validation produced no failures
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entry for `key`
    pub fn get(&self, key: &str) -> Option<&ErrorEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Message stored directly under `key`
    pub fn message(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ErrorEntry::as_message)
    }

    /// Nested map stored under `key`
    pub fn nested(&self, key: &str) -> Option<&ErrorMap> {
        self.get(key).and_then(ErrorEntry::as_nested)
    }

    /// Insert an entry, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, entry: ErrorEntry) -> Option<ErrorEntry> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push((key, entry));
                None
            }
        }
    }

    /// Insert a rendered message
    pub fn insert_message(
        &mut self,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Option<ErrorEntry> {
        self.insert(key, ErrorEntry::Message(message.into()))
    }

    /// Insert the errors of a nested scope
    pub fn insert_nested(&mut self, key: impl Into<String>, nested: ErrorMap) -> Option<ErrorEntry> {
        self.insert(key, ErrorEntry::Nested(nested))
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorEntry)> {
        self.entries.iter().map(entry_ref)
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of messages at any depth
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, entry)| match entry {
                ErrorEntry::Message(_) => 1,
                ErrorEntry::Nested(map) => map.leaf_count(),
            })
            .sum()
    }

    /// Messages at any depth keyed by their dotted path, depth first
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for (key, entry) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match entry {
                ErrorEntry::Message(message) => out.push((path, message.clone())),
                ErrorEntry::Nested(map) => map.flatten_into(&path, out),
            }
        }
    }

    /// JSON object form of the map
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, entry)| (k.clone(), entry.to_value()))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for ErrorEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(message) => serializer.serialize_str(message),
            Self::Nested(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn entry_ref(entry: &(String, ErrorEntry)) -> (&str, &ErrorEntry) {
    (entry.0.as_str(), &entry.1)
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a str, &'a ErrorEntry);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, ErrorEntry)>,
        fn(&'a (String, ErrorEntry)) -> (&'a str, &'a ErrorEntry),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn(&'a (String, ErrorEntry)) -> (&'a str, &'a ErrorEntry))
    }
}
