//! Property-based tests for the rule catalog
//!
//! These tests check that related factories agree with each other and
//! with the plain comparisons they are built on.


use proptest::prelude::*;
use schemagate_catalog::{array, enums, number, string};
use schemagate_core::render::display_value;
use schemagate_core::render_message;
use serde_json::{json, Value};
use test_support::*;

// Strategy functions for property testing

/// Strategy for finite numbers, integral and fractional
fn number_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1000i64..1000).prop_map(|n| n as f64),
        -1000.0f64..1000.0,
    ]
}

/// Strategy for small sets of short strings
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{1,2}", 0..5)
}

proptest! {
    /// Property: min_value passes exactly for numbers at or above the bound
    #[test]
    fn prop_min_value_matches_comparison(n in number_strategy(), min in number_strategy()) {
        prop_assert_eq!(holds(&number::min_value(min), &json!(n)), n >= min);
        prop_assert_eq!(holds(&number::max_value(min), &json!(n)), n <= min);
    }

    /// Property: between is the conjunction of min_value and max_value
    #[test]
    fn prop_between_is_both_bounds(n in number_strategy(), a in number_strategy(), b in number_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let value = json!(n);
        prop_assert_eq!(
            holds(&number::between(lo, hi), &value),
            holds(&number::min_value(lo), &value) && holds(&number::max_value(hi), &value)
        );
    }

    /// Property: one_of and not_one_of are complements for present values
    #[test]
    fn prop_one_of_complements_not_one_of(set in words_strategy(), word in "[a-d]{1,2}") {
        let value = Value::String(word.clone());
        let inside = holds(&enums::one_of(set.clone()), &value);
        prop_assert_eq!(inside, set.contains(&word));
        prop_assert_eq!(holds(&enums::not_one_of(set), &value), !inside);
    }

    /// Property: for strings, a negated is_empty agrees with is_not_empty
    #[test]
    fn prop_negated_is_empty_matches_is_not_empty(text in "[a-z ]{0,6}") {
        let value = Value::String(text);
        prop_assert_eq!(
            holds(&string::is_empty().negated(), &value),
            holds(&string::is_not_empty(), &value)
        );
    }

    /// Property: length bounds agree with length_between
    #[test]
    fn prop_length_between_is_both_bounds(text in "\\PC{0,8}", min in 0usize..6, extra in 0usize..4) {
        let max = min + extra;
        let value = Value::String(text);
        prop_assert_eq!(
            holds(&string::length_between(min, max), &value),
            holds(&string::min_length(min), &value) && holds(&string::max_length(max), &value)
        );
    }

    /// Property: unique_items fails exactly when an element repeats
    #[test]
    fn prop_unique_items_detects_repeats(items in proptest::collection::vec(0u8..6, 0..6)) {
        let mut sorted = items.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(holds(&array::unique_items(), &json!(items)), sorted.len() == items.len());
    }

    /// Property: an integral bound and an integral float value print alike
    #[test]
    fn prop_integral_bounds_render_like_values(n in -1000i64..1000) {
        let bound = n as f64;
        let rule = number::min_value(bound + 1.0);
        let rendered = render_message(rule.message(), "n", Some(&json!(bound)));
        prop_assert_eq!(rendered, format!("n must be at least {}", n + 1));
        prop_assert_eq!(display_value(Some(&json!(bound))), n.to_string());
    }

    /// Property: type-checking rules fail for absent values
    #[test]
    fn prop_absent_values_fail_type_checks(min in number_strategy()) {
        prop_assert!(!holds_absent(&number::min_value(min)));
        prop_assert!(!holds_absent(&string::is_not_empty()));
        prop_assert!(holds_absent(&string::is_empty()));
    }
}
