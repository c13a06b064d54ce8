//! Registration form validation
//!
//! Run with `RUST_LOG=schemagate_core=debug` to see the traversal events.

use schemagate_catalog::{
    all, number, other, required, string, validate, CatalogError, RuleGroup, Schema,
    ValidationConfig, Validator,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn registration_schema() -> Result<Schema, CatalogError> {
    let nine_digits = || string::pattern(r"^\d{9}$");
    let adult = || other("age", number::min_value(18.0));

    let adult_has_id = all(vec![adult(), other("idNumber", nine_digits()?)])
        .with_message("Adults must provide a 9 digit ID");

    Ok(Schema::new()
        .field("name", vec![RuleGroup::new([required()])])
        .field("age", vec![RuleGroup::new([number::min_value(0.0)])])
        .field(
            "idNumber",
            vec![
                RuleGroup::new([nine_digits()?]).when([adult()]),
                RuleGroup::new([string::is_empty()]).when_not([adult()]),
            ],
        )
        .refine(vec![RuleGroup::new([adult_has_id])
            .when([adult()])
            .path(["idNumber"])]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let schema = registration_schema()?;
    let submissions = [
        json!({"name": "Ada", "age": 36, "idNumber": "123456789"}),
        json!({"name": "", "age": 16, "idNumber": "123"}),
        json!({"name": "Grace", "age": 40, "idNumber": "12"}),
    ];

    let mut config = ValidationConfig::default();
    config.merge_with_env();
    let validator = Validator::with_config(config);

    for data in &submissions {
        let errors = validator.validate(&schema, data);
        if errors.is_empty() {
            tracing::info!(%data, "Submission accepted");
        } else {
            tracing::warn!(%data, %errors, "Submission rejected");
        }
    }

    // the simple entry point uses the default configuration
    let errors = validate(&schema, &submissions[1]);
    println!("{}", serde_json::to_string_pretty(&errors)?);
    Ok(())
}
