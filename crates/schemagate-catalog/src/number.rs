//! Numeric rules
//!
//! Only JSON numbers are accepted; numeric strings fail.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use schemagate_core::Rule;
use serde_json::Value;

fn number_rule<F>(check: F, message: impl Into<String>) -> Rule
where
    F: Fn(f64) -> bool + Send + Sync + 'static,
{
    Rule::from_value(move |v| v.and_then(Value::as_f64).is_some_and(&check), message)
}

/// Value is a JSON number
pub fn is_number() -> Rule {
    number_rule(|_| true, "{field_key} must be a number")
}

/// Number without a fractional part
pub fn is_integer() -> Rule {
    number_rule(|n| n.fract() == 0.0, "{field_key} must be an integer")
}

/// Number `>= min`
pub fn min_value(min: f64) -> Rule {
    number_rule(
        move |n| n >= min,
        format!("{{field_key}} must be at least {}", min),
    )
}

/// Number `<= max`
pub fn max_value(max: f64) -> Rule {
    number_rule(
        move |n| n <= max,
        format!("{{field_key}} must be at most {}", max),
    )
}

/// Number within `min..=max`
pub fn between(min: f64, max: f64) -> Rule {
    number_rule(
        move |n| (min..=max).contains(&n),
        format!("{{field_key}} must be between {} and {}", min, max),
    )
}

/// Number `> 0`
pub fn is_positive() -> Rule {
    number_rule(|n| n > 0.0, "{field_key} must be positive")
}

/// Number `< 0`
pub fn is_negative() -> Rule {
    number_rule(|n| n < 0.0, "{field_key} must be negative")
}

/// Exact multiple of `step`; a zero step never matches
pub fn multiple_of(step: f64) -> Rule {
    number_rule(
        move |n| step != 0.0 && (n % step) == 0.0,
        format!("{{field_key}} must be a multiple of {}", step),
    )
}
