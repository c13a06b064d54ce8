//! Integration tests for validation of realistic form data


use pretty_assertions::assert_eq;
use schemagate_core::{
    all, any, other, other_all, validate, validate_with_full_data, ErrorEntry, FieldRules, Rule,
    RuleContext, RuleGroup, Schema, ValidationConfig, Validator,
};
use serde_json::{json, Value};
use test_support::*;

fn registration_schema() -> Schema {
    let adult = || other("age", min_value(18.0));

    Schema::new()
        .metadata("$title", json!("Registration"))
        .field("name", vec![RuleGroup::new([required()])])
        .field("age", vec![RuleGroup::new([required(), min_value(0.0)])])
        .field(
            "idNumber",
            vec![
                RuleGroup::new([digits(9)]).when([adult()]),
                RuleGroup::new([is_empty()]).when_not([adult()]),
            ],
        )
        .nested(
            "address",
            Schema::new()
                .before_all_when([other("hasAddress", equals(json!(true)))])
                .field("street", vec![RuleGroup::new([required()])])
                .field("zip", vec![RuleGroup::new([digits(5)])]),
        )
        .field(
            "confirmPassword",
            vec![RuleGroup::new([Rule::new(
                |ctx: &RuleContext<'_>| ctx.current_value == ctx.whole_data.get("password"),
                "Passwords do not match",
            )])
            .path("password")],
        )
}

#[test]
fn test_valid_registration() {
    init_tracing();
    let data = json!({
        "name": "Ada",
        "age": 36,
        "idNumber": "123456789",
        "hasAddress": true,
        "address": {"street": "Main", "zip": "12345"},
        "password": "s3cret",
        "confirmPassword": "s3cret"
    });

    assert!(validate(&registration_schema(), &data).is_empty());
}

#[test]
fn test_invalid_registration_collects_every_failure() {
    init_tracing();
    let data = json!({
        "name": "",
        "age": 16,
        "idNumber": "1",
        "hasAddress": true,
        "address": {"street": "Main", "zip": "12"},
        "password": "a",
        "confirmPassword": "b"
    });

    let errors = validate(&registration_schema(), &data);
    assert_eq!(
        errors.to_value(),
        json!({
            "name": "name is required",
            "idNumber": "idNumber must be empty",
            "address": {"zip": "zip must be 5 digits"},
            "password": "Passwords do not match"
        })
    );
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["name", "idNumber", "address", "password"]);
    assert_eq!(errors.leaf_count(), 4);
}

#[test]
fn test_address_skipped_without_flag() {
    init_tracing();
    let data = json!({
        "name": "Ada",
        "age": 40,
        "idNumber": "123456789",
        "hasAddress": false,
        "address": {"zip": "x"},
        "password": "p",
        "confirmPassword": "p"
    });

    let errors = validate(&registration_schema(), &data);
    assert!(errors.is_empty(), "unexpected errors: {}", errors);
}

#[test]
fn test_flatten_uses_dotted_paths() {
    let data = json!({"name": "Ada", "age": 20, "idNumber": "123456789",
                      "hasAddress": true, "address": {}});
    let errors = validate(&registration_schema(), &data);

    assert_eq!(
        errors.flatten(),
        vec![
            ("address.street".to_string(), "street is required".to_string()),
            ("address.zip".to_string(), "zip must be 5 digits".to_string()),
        ]
    );
    assert!(matches!(errors.get("address"), Some(ErrorEntry::Nested(_))));
}

#[test]
fn test_error_map_serializes_to_json() {
    let schema = Schema::new().field("age", vec![RuleGroup::new([min_value(18.0)])]);
    let errors = validate(&schema, &json!({"age": 3}));

    let text = serde_json::to_string(&errors).unwrap();
    assert_eq!(text, r#"{"age":"age must be at least 18"}"#);
    assert_eq!(errors.to_string(), text);
}

#[test]
fn test_any_and_all_messages() {
    let schema = Schema::new()
        .field(
            "contact",
            vec![RuleGroup::new([any(vec![
                other("email", required()),
                other("phone", required()),
            ])
            .with_message("Provide an email or a phone number")])],
        )
        .field(
            "range",
            vec![RuleGroup::new([all(vec![min_value(1.0), min_value(10.0)])])],
        );

    let errors = validate(&schema, &json!({"range": 5}));
    assert_eq!(
        errors.to_value(),
        json!({
            "contact": "Provide an email or a phone number",
            // only the first placeholder is filled
            "range": "range must be at least 1, {field_key} must be at least 10"
        })
    );

    assert_eq!(
        validate(&schema, &json!({"phone": "555", "range": 12})).len(),
        0
    );
}

#[test]
fn test_other_all_gates_on_every_rule() {
    let schema = Schema::new().field(
        "discount",
        vec![RuleGroup::new([constant(false, "{field_key} not allowed")])
            .when(other_all("customer.age", vec![required(), min_value(65.0)]))],
    );

    assert_eq!(
        validate(&schema, &json!({"customer": {"age": 70}})).message("discount"),
        Some("discount not allowed")
    );
    assert!(validate(&schema, &json!({"customer": {"age": 30}})).is_empty());
    assert!(validate(&schema, &json!({})).is_empty());
}

#[test]
fn test_dotted_field_keys_resolve_into_objects() {
    let schema = Schema::new().field("person.age", vec![RuleGroup::new([min_value(18.0)])]);
    let errors = validate(&schema, &json!({"person": {"age": 4}}));
    assert_eq!(errors.message("person.age"), Some("person.age must be at least 18"));
}

#[test]
fn test_sub_scope_validation_with_full_data() {
    let address = Schema::new().field(
        "zip",
        vec![RuleGroup::new([digits(5)]).when([other("country", equals(json!("US")))])],
    );
    let full = json!({"country": "US", "address": {"zip": "abc"}});
    let scope = full.get("address").cloned().unwrap_or(Value::Null);

    let errors = validate_with_full_data(&address, &scope, &full);
    assert_eq!(errors.message("zip"), Some("zip must be 5 digits"));
}

#[test]
fn test_dynamic_schema_limits_from_data() {
    let schema = |data: &Value| {
        let seats = data.get("seats").and_then(Value::as_u64).unwrap_or(0);
        let within = Rule::from_value(
            move |v| v.and_then(Value::as_u64).is_some_and(|n| n <= seats),
            format!("Only {} seats available, requested {{value}}", seats),
        );
        Schema::new().field("requested", vec![RuleGroup::new([within])])
    };

    let errors = validate(&schema, &json!({"seats": 3, "requested": 5}));
    assert_eq!(
        errors.message("requested"),
        Some("Only 3 seats available, requested 5")
    );
    assert!(validate(&schema, &json!({"seats": 8, "requested": 5})).is_empty());
}

#[test]
fn test_validator_with_budget_from_config() {
    init_tracing();
    let config: ValidationConfig = serde_json::from_value(json!({"max_errors": 1})).unwrap();
    let validator = Validator::with_config(config);
    let data = json!({"name": "", "age": 16, "idNumber": "1"});

    let errors = validator.validate(&registration_schema(), &data);
    assert_eq!(errors.to_value(), json!({"name": "name is required"}));
}

#[test]
fn test_field_rules_mix_preconditions_and_groups() {
    let rules = FieldRules::new()
        .group(RuleGroup::new([required()]))
        .before_all_when([required()])
        .group(RuleGroup::new([digits(4)]));
    let schema = Schema::new().field("pin", rules);

    assert_eq!(validate(&schema, &json!({})).message("pin"), Some("pin is required"));
    assert_eq!(
        validate(&schema, &json!({"pin": "12"})).message("pin"),
        Some("pin must be 4 digits")
    );
}
