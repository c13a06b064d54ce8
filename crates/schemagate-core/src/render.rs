//! Message template rendering
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::rule::{FIELD_KEY_PLACEHOLDER, VALUE_PLACEHOLDER};
use serde_json::Value;

/// Text used for a value that is not present in the data
pub const ABSENT_VALUE_TEXT: &str = "undefined";

/// Text used for any object value
pub const OBJECT_VALUE_TEXT: &str = "[object Object]";

/// Fill a message template for one field.
///
/// Only the first `{field_key}` and the first `{value}` are substituted;
/// later occurrences are left verbatim.
pub fn render_message(template: &str, field_key: &str, value: Option<&Value>) -> String {
    template
        .replacen(FIELD_KEY_PLACEHOLDER, field_key, 1)
        .replacen(VALUE_PLACEHOLDER, &display_value(value), 1)
}

/// String form of a value as it appears in rendered messages
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => ABSENT_VALUE_TEXT.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                // null entries print empty
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => OBJECT_VALUE_TEXT.to_string(),
        // 16.0 prints as 16, matching bounds formatted from f64
        Some(Value::Number(n)) if n.is_f64() => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| f.to_string()),
        Some(other) => other.to_string(),
    }
}
