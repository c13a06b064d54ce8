//! Escape hatch for one-off rules
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use schemagate_core::{Rule, RuleContext};

/// Rule from an arbitrary predicate over the field value and the whole data
///
/// # Examples
///
/// ```rust
/// use schemagate_catalog::custom::custom;
/// use schemagate_core::{validate, RuleGroup, Schema};
/// use serde_json::json;
///
/// let even = custom(
///     |ctx| ctx.current_value.and_then(|v| v.as_i64()).is_some_and(|n| n % 2 == 0),
///     "{field_key} must be even, got {value}",
/// );
/// let schema = Schema::new().field("count", vec![RuleGroup::new([even])]);
///
/// let errors = validate(&schema, &json!({"count": 3}));
/// assert_eq!(errors.message("count"), Some("count must be even, got 3"));
/// ```
pub fn custom<F>(predicate: F, message: impl Into<String>) -> Rule
where
    F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
{
    Rule::new(predicate, message)
}
