//! Validation entry points
//!
//! The engine walks a schema in key order. For each field it evaluates the
//! `when` / `whenNot` gates of every rule group, runs the admitted group's
//! rules up to the first failure and writes the rendered message into the
//! error map. Nested schemas recurse with their own slice of the data while
//! cross-references keep resolving against the outermost data object.
//!
//! The engine is organized into:
//! - `traverse`: the recursive walk and error accumulation
//! - `tests`: behavioural test suite
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

mod traverse;

use crate::config::ValidationConfig;
use crate::error_map::ErrorMap;
use crate::schema::SchemaProvider;
use serde_json::Value;
use traverse::Traversal;

/// Validator holding an engine configuration
///
/// A validator is cheap to clone and holds no per-call state, so one
/// instance can serve concurrent validations.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a validator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with an explicit configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `data`, resolving cross-references against `data` itself
    pub fn validate<S>(&self, schema: &S, data: &Value) -> ErrorMap
    where
        S: SchemaProvider + ?Sized,
    {
        self.validate_with_full_data(schema, data, data)
    }

    /// Validate `data` as a sub-scope of `full_data`.
    ///
    /// Cross-references resolve against `full_data`; field keys resolve
    /// against `data`. A closure schema is called once with `data`.
    pub fn validate_with_full_data<S>(&self, schema: &S, data: &Value, full_data: &Value) -> ErrorMap
    where
        S: SchemaProvider + ?Sized,
    {
        let schema = schema.provide(data);
        let span = tracing::debug_span!("validate", keys = schema.len());
        let _guard = span.enter();

        let mut errors = ErrorMap::new();
        Traversal::new(full_data, &self.config).scope(&schema, Some(data), &mut errors);

        tracing::debug!(failures = errors.leaf_count(), "Validation finished");
        errors
    }
}

/// Validate `data` against `schema` with the default configuration
///
/// # Examples
///
/// ```rust
/// use schemagate_core::{validate, Rule, RuleGroup, Schema};
/// use serde_json::json;
///
/// let adult = Rule::from_value(
///     |v| v.and_then(|v| v.as_f64()).is_some_and(|n| n >= 18.0),
///     "{field_key} must be at least 18",
/// );
/// let schema = Schema::new().field("age", vec![RuleGroup::new([adult])]);
///
/// let errors = validate(&schema, &json!({"age": 16}));
/// assert_eq!(errors.message("age"), Some("age must be at least 18"));
/// ```
pub fn validate<S>(schema: &S, data: &Value) -> ErrorMap
where
    S: SchemaProvider + ?Sized,
{
    Validator::new().validate(schema, data)
}

/// Validate `data` as a sub-scope of `full_data` with the default configuration
pub fn validate_with_full_data<S>(schema: &S, data: &Value, full_data: &Value) -> ErrorMap
where
    S: SchemaProvider + ?Sized,
{
    Validator::new().validate_with_full_data(schema, data, full_data)
}
