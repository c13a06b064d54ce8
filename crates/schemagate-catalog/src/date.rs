//! Calendar date rules backed by `chrono`
//!
//! Values are strings holding either an RFC 3339 timestamp or a plain
//! `YYYY-MM-DD` date; timestamps compare by their calendar date in their own
//! offset. Bounds are exclusive for [`before`] / [`after`] and inclusive for
//! [`between`].
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{CatalogError, Result};
use chrono::{DateTime, NaiveDate};
use schemagate_core::Rule;
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| CatalogError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

fn date_rule<F>(check: F, message: impl Into<String>) -> Rule
where
    F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
{
    Rule::from_value(
        move |v| {
            v.and_then(Value::as_str)
                .and_then(|s| parse_date(s).ok())
                .is_some_and(&check)
        },
        message,
    )
}

/// String holding a parseable date
pub fn is_date() -> Rule {
    date_rule(|_| true, "{field_key} must be a valid date")
}

/// Strictly earlier than `limit`
pub fn before(limit: NaiveDate) -> Rule {
    date_rule(
        move |d| d < limit,
        format!("{{field_key}} must be before {}", limit.format(DATE_FORMAT)),
    )
}

/// Strictly later than `limit`
pub fn after(limit: NaiveDate) -> Rule {
    date_rule(
        move |d| d > limit,
        format!("{{field_key}} must be after {}", limit.format(DATE_FORMAT)),
    )
}

/// Within `start..=end`
pub fn between(start: NaiveDate, end: NaiveDate) -> Rule {
    date_rule(
        move |d| (start..=end).contains(&d),
        format!(
            "{{field_key}} must be between {} and {}",
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        ),
    )
}

/// [`before`] with the bound parsed from text
pub fn before_str(limit: &str) -> Result<Rule> {
    parse_date(limit).map(before)
}

/// [`after`] with the bound parsed from text
pub fn after_str(limit: &str) -> Result<Rule> {
    parse_date(limit).map(after)
}

/// [`between`] with both bounds parsed from text
pub fn between_str(start: &str, end: &str) -> Result<Rule> {
    Ok(between(parse_date(start)?, parse_date(end)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagate_core::RuleContext;
    use serde_json::json;

    fn check(rule: &Rule, value: Value) -> bool {
        rule.validate(&RuleContext::new(Some(&value), &Value::Null))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_forms() {
        assert_eq!(parse_date("2024-02-29").unwrap(), ymd(2024, 2, 29));
        assert_eq!(parse_date("2024-03-01T23:30:00+02:00").unwrap(), ymd(2024, 3, 1));
        assert!(matches!(parse_date("2023-02-29"), Err(CatalogError::InvalidDate { .. })));
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_is_date() {
        assert!(check(&is_date(), json!("1999-12-31")));
        assert!(!check(&is_date(), json!("31/12/1999")));
        assert!(!check(&is_date(), json!(19991231)));
    }

    #[test]
    fn test_bounds() {
        let cutoff = ymd(2000, 1, 1);
        assert!(check(&before(cutoff), json!("1999-12-31")));
        assert!(!check(&before(cutoff), json!("2000-01-01")));
        assert!(check(&after(cutoff), json!("2000-01-02")));
        assert!(!check(&after(cutoff), json!("2000-01-01")));

        let window = between(ymd(2024, 1, 1), ymd(2024, 12, 31));
        assert!(check(&window, json!("2024-01-01")));
        assert!(check(&window, json!("2024-12-31T10:00:00Z")));
        assert!(!check(&window, json!("2025-01-01")));
        assert_eq!(
            window.message(),
            "{field_key} must be between 2024-01-01 and 2024-12-31"
        );
    }

    #[test]
    fn test_textual_bounds() {
        assert_eq!(
            before_str("2000-01-01").unwrap().message(),
            "{field_key} must be before 2000-01-01"
        );
        assert!(after_str("2000-01-01T00:00:00Z").is_ok());
        assert!(between_str("2000-01-01", "not a date").is_err());
    }
}
