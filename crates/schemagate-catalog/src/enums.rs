//! Membership rules over a fixed set of allowed values
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use schemagate_core::render::display_value;
use schemagate_core::Rule;
use serde_json::Value;

fn listing(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| display_value(Some(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value equals one of `allowed`
pub fn one_of<I, V>(allowed: I) -> Rule
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    let message = format!("{{field_key}} must be one of {}", listing(&allowed));
    Rule::from_value(move |v| v.is_some_and(|v| allowed.contains(v)), message)
}

/// Value is absent or equals none of `denied`
pub fn not_one_of<I, V>(denied: I) -> Rule
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let denied: Vec<Value> = denied.into_iter().map(Into::into).collect();
    let message = format!("{{field_key}} must not be one of {}", listing(&denied));
    Rule::from_value(move |v| !v.is_some_and(|v| denied.contains(v)), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagate_core::RuleContext;
    use serde_json::json;

    fn check(rule: &Rule, value: Option<Value>) -> bool {
        rule.validate(&RuleContext::new(value.as_ref(), &Value::Null))
    }

    #[test]
    fn test_one_of() {
        let rule = one_of(["red", "green"]);
        assert_eq!(rule.message(), "{field_key} must be one of red, green");
        assert!(check(&rule, Some(json!("red"))));
        assert!(!check(&rule, Some(json!("blue"))));
        assert!(!check(&rule, None));
    }

    #[test]
    fn test_not_one_of() {
        let rule = not_one_of([0, 13]);
        assert_eq!(rule.message(), "{field_key} must not be one of 0, 13");
        assert!(check(&rule, Some(json!(7))));
        assert!(!check(&rule, Some(json!(13))));
        assert!(check(&rule, None));
    }
}
