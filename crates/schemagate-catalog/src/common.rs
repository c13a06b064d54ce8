//! Presence and equality rules that apply to any value
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use schemagate_core::render::display_value;
use schemagate_core::{resolve, Rule, RuleContext};
use serde_json::Value;

/// Value is present, not null, and not an empty string or array
pub fn required() -> Rule {
    Rule::from_value(
        |v| match v {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
        },
        "{field_key} is required",
    )
}

/// Value is present in the data; null counts as present
pub fn is_defined() -> Rule {
    Rule::from_value(|v| v.is_some(), "{field_key} must be defined")
}

/// Value is explicitly null
pub fn is_null() -> Rule {
    Rule::from_value(|v| matches!(v, Some(Value::Null)), "{field_key} must be null")
}

/// Value equals `expected`
pub fn equals(expected: impl Into<Value>) -> Rule {
    let expected = expected.into();
    let message = format!("{{field_key}} must equal {}", display_value(Some(&expected)));
    Rule::from_value(move |v| v == Some(&expected), message)
}

/// Value differs from `unexpected`; absent values differ from everything
pub fn not_equals(unexpected: impl Into<Value>) -> Rule {
    let unexpected = unexpected.into();
    let message = format!(
        "{{field_key}} must not equal {}",
        display_value(Some(&unexpected))
    );
    Rule::from_value(move |v| v != Some(&unexpected), message)
}

/// Value equals the field at `path` of the whole data.
///
/// Two absent values are considered equal.
pub fn same_as(path: impl Into<String>) -> Rule {
    let path = path.into();
    let message = format!("{{field_key}} must match {}", path);
    Rule::new(
        move |ctx: &RuleContext<'_>| ctx.current_value == resolve(Some(ctx.whole_data), &path),
        message,
    )
}
