//! Boolean rules
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use schemagate_core::Rule;
use serde_json::Value;

/// Value is `true` or `false`
pub fn is_boolean() -> Rule {
    Rule::from_value(|v| matches!(v, Some(Value::Bool(_))), "{field_key} must be a boolean")
}

/// Value is exactly `true`; truthy strings and numbers fail
pub fn is_true() -> Rule {
    Rule::from_value(|v| v == Some(&Value::Bool(true)), "{field_key} must be true")
}

/// Value is exactly `false`
pub fn is_false() -> Rule {
    Rule::from_value(|v| v == Some(&Value::Bool(false)), "{field_key} must be false")
}
