//! Rules for JSON arrays
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use schemagate_core::render::display_value;
use schemagate_core::Rule;
use serde_json::Value;

fn array_rule<F>(check: F, message: impl Into<String>) -> Rule
where
    F: Fn(&[Value]) -> bool + Send + Sync + 'static,
{
    Rule::from_value(
        move |v| v.and_then(Value::as_array).is_some_and(|items| check(items)),
        message,
    )
}

/// Value is an array
pub fn is_array() -> Rule {
    array_rule(|_| true, "{field_key} must be a list")
}

/// Array with at least `min` elements
pub fn min_items(min: usize) -> Rule {
    array_rule(
        move |items| items.len() >= min,
        format!("{{field_key}} must have at least {} items", min),
    )
}

/// Array with at most `max` elements
pub fn max_items(max: usize) -> Rule {
    array_rule(
        move |items| items.len() <= max,
        format!("{{field_key}} must have at most {} items", max),
    )
}

/// Array with at least one element equal to `item`
pub fn contains(item: impl Into<Value>) -> Rule {
    let item = item.into();
    let message = format!("{{field_key}} must contain {}", display_value(Some(&item)));
    array_rule(move |items| items.contains(&item), message)
}

/// No two elements are equal
pub fn unique_items() -> Rule {
    array_rule(
        // Value is not Hash
        |items| {
            items
                .iter()
                .enumerate()
                .all(|(i, item)| !items[i + 1..].contains(item))
        },
        "{field_key} must not contain duplicates",
    )
}

/// Array with at least one element
pub fn is_not_empty() -> Rule {
    array_rule(|items| !items.is_empty(), "{field_key} must not be empty")
}
