//! Rules for JSON objects
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use schemagate_core::Rule;
use serde_json::{Map, Value};

fn object_rule<F>(check: F, message: impl Into<String>) -> Rule
where
    F: Fn(&Map<String, Value>) -> bool + Send + Sync + 'static,
{
    Rule::from_value(move |v| v.and_then(Value::as_object).is_some_and(&check), message)
}

/// Value is an object
pub fn is_object() -> Rule {
    object_rule(|_| true, "{field_key} must be an object")
}

/// Object with `key` present (a null member counts)
pub fn has_key(key: impl Into<String>) -> Rule {
    let key = key.into();
    let message = format!("{{field_key}} must contain {}", key);
    object_rule(move |map| map.contains_key(&key), message)
}

/// Object with at least `min` members
pub fn min_keys(min: usize) -> Rule {
    object_rule(
        move |map| map.len() >= min,
        format!("{{field_key}} must have at least {} entries", min),
    )
}

/// Object with at most `max` members
pub fn max_keys(max: usize) -> Rule {
    object_rule(
        move |map| map.len() <= max,
        format!("{{field_key}} must have at most {} entries", max),
    )
}

/// Object with at least one member
pub fn is_not_empty() -> Rule {
    object_rule(|map| !map.is_empty(), "{field_key} must not be empty")
}
