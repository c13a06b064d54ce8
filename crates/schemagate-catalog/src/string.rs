//! String rules
//!
//! Every rule except [`is_empty`] fails for absent and non-string values.
//! Lengths are counted in Unicode scalar values.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{CatalogError, Result};
use regex::Regex;
use schemagate_core::Rule;
use serde_json::Value;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const URL_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^\s/?#]+[^\s]*$";

static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
static URL: OnceLock<Option<Regex>> = OnceLock::new();

fn string_rule<F>(check: F, message: impl Into<String>) -> Rule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Rule::from_value(move |v| v.and_then(Value::as_str).is_some_and(&check), message)
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

fn builtin(cell: &'static OnceLock<Option<Regex>>, pattern: &'static str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

/// Value is a string
pub fn is_string() -> Rule {
    string_rule(|_| true, "{field_key} must be a string")
}

/// Value is absent, null or the empty string
pub fn is_empty() -> Rule {
    Rule::from_value(
        |v| match v {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        },
        "{field_key} must be empty",
    )
}

/// Value is a non-empty string
pub fn is_not_empty() -> Rule {
    string_rule(|s| !s.is_empty(), "{field_key} must not be empty")
}

/// At least `min` characters
pub fn min_length(min: usize) -> Rule {
    string_rule(
        move |s| char_count(s) >= min,
        format!("{{field_key}} must be at least {} characters", min),
    )
}

/// At most `max` characters
pub fn max_length(max: usize) -> Rule {
    string_rule(
        move |s| char_count(s) <= max,
        format!("{{field_key}} must be at most {} characters", max),
    )
}

/// Length within `min..=max`
pub fn length_between(min: usize, max: usize) -> Rule {
    string_rule(
        move |s| (min..=max).contains(&char_count(s)),
        format!("{{field_key}} must be between {} and {} characters", min, max),
    )
}

/// Compile `pattern` and match values against it
pub fn pattern(pattern: &str) -> Result<Rule> {
    let regex = Regex::new(pattern).map_err(|source| {
        tracing::debug!(pattern, error = %source, "Rejected pattern rule");
        CatalogError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    Ok(matches(regex))
}

/// Match values against an already compiled expression
pub fn matches(regex: Regex) -> Rule {
    let message = format!("{{field_key}} must match {}", regex.as_str());
    string_rule(move |s| regex.is_match(s), message)
}

/// Looks like `local@domain.tld`
pub fn is_email() -> Rule {
    string_rule(
        |s| builtin(&EMAIL, EMAIL_PATTERN).is_some_and(|re| re.is_match(s)),
        "{field_key} must be a valid email address",
    )
}

/// Absolute URL with a scheme and a host
pub fn is_url() -> Rule {
    string_rule(
        |s| builtin(&URL, URL_PATTERN).is_some_and(|re| re.is_match(s)),
        "{field_key} must be a valid URL",
    )
}

/// String beginning with `prefix`
pub fn starts_with(prefix: impl Into<String>) -> Rule {
    let prefix = prefix.into();
    let message = format!("{{field_key}} must start with {}", prefix);
    string_rule(move |s| s.starts_with(prefix.as_str()), message)
}

/// String ending with `suffix`
pub fn ends_with(suffix: impl Into<String>) -> Rule {
    let suffix = suffix.into();
    let message = format!("{{field_key}} must end with {}", suffix);
    string_rule(move |s| s.ends_with(suffix.as_str()), message)
}

/// String containing `needle`
pub fn contains(needle: impl Into<String>) -> Rule {
    let needle = needle.into();
    let message = format!("{{field_key}} must contain {}", needle);
    string_rule(move |s| s.contains(needle.as_str()), message)
}

/// Non-empty and only alphanumeric characters
pub fn is_alphanumeric() -> Rule {
    string_rule(
        |s| !s.is_empty() && s.chars().all(char::is_alphanumeric),
        "{field_key} must contain only letters and digits",
    )
}

/// Non-empty and only ASCII digits
pub fn is_numeric() -> Rule {
    string_rule(
        |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()),
        "{field_key} must contain only digits",
    )
}
