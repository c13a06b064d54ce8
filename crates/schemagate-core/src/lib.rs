//! Schemagate Core - conditional validation of JSON data against declarative schemas
//!
//! A schema maps field keys to ordered rule groups. Each group may be gated
//! by `when` / `whenNot` conditions, may redirect its message to another
//! error key, and stops at its first failing rule. Sub-objects are validated
//! as nested schemas, and any rule can look at another part of the data via
//! [`other`].
//!
//! # Main Components
//!
//! - **Rules**: [`Rule`], the [`all`] / [`any`] aggregates and [`other`] cross-references
//! - **Schema model**: [`Schema`], [`FieldRules`], [`RuleGroup`]
//! - **Engine**: [`validate`], [`validate_with_full_data`] and the configurable [`Validator`]
//! - **Results**: [`ErrorMap`], a nested, ordered map of rendered messages
//!
//! # Example
//!
//! ```rust
//! use schemagate_core::{other, validate, Rule, RuleGroup, Schema};
//! use serde_json::json;
//!
//! let adult = || {
//!     Rule::from_value(
//!         |v| v.and_then(|v| v.as_f64()).is_some_and(|n| n >= 18.0),
//!         "{field_key} must be at least 18",
//!     )
//! };
//! let nine_digits = Rule::from_value(
//!     |v| v.and_then(|v| v.as_str()).is_some_and(|s| s.len() == 9),
//!     "{field_key} must have 9 digits",
//! );
//!
//! let schema = Schema::new().field(
//!     "idNumber",
//!     vec![RuleGroup::new([nine_digits]).when([other("age", adult())])],
//! );
//!
//! let errors = validate(&schema, &json!({"age": 30, "idNumber": "123"}));
//! assert_eq!(errors.message("idNumber"), Some("idNumber must have 9 digits"));
//! assert!(validate(&schema, &json!({"age": 12, "idNumber": "123"})).is_empty());
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod aggregate;
pub mod config;
pub mod cross;
pub mod engine;
pub mod error;
pub mod error_map;
pub mod gate;
pub mod path;
pub mod render;
pub mod rule;
pub mod schema;

// Re-export main types for convenience
pub use aggregate::{all, any};
pub use config::ValidationConfig;
pub use cross::{other, other_all};
pub use engine::{validate, validate_with_full_data, Validator};
pub use error::{Error, Result};
pub use error_map::{ErrorEntry, ErrorMap};
pub use gate::{admits, evaluate_gate, GateOutcome};
pub use path::resolve;
pub use render::render_message;
pub use rule::{Predicate, Rule, RuleContext};
pub use schema::{
    ErrorPath, FieldEntry, FieldRules, RuleGroup, Schema, SchemaNode, SchemaProvider,
    BEFORE_ALL_WHEN, REFINE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
