//! Schemagate Catalog - ready-made rules for Schemagate schemas
//!
//! Each factory returns a [`Rule`] whose message template names the field
//! through `{field_key}`. Rules are grouped by the kind of value they check:
//!
//! - [`common`]: presence and equality
//! - [`string`], [`number`], [`boolean`], [`date`]: scalar checks
//! - [`object`], [`array`]: container checks
//! - [`enums`]: membership in a fixed set
//! - [`custom`]: arbitrary predicates
//!
//! The cross-reference and aggregate combinators from `schemagate-core` are
//! re-exported so a schema can be written against this crate alone.
//!
//! # Example
//!
//! ```rust
//! use schemagate_catalog::{number, other, string, validate, RuleGroup, Schema};
//! use serde_json::json;
//!
//! let adult = || other("age", number::min_value(18.0));
//! let schema = Schema::new().field(
//!     "idNumber",
//!     vec![
//!         RuleGroup::new([string::pattern(r"^\d{9}$").unwrap()]).when([adult()]),
//!         RuleGroup::new([string::is_empty()]).when_not([adult()]),
//!     ],
//! );
//!
//! let errors = validate(&schema, &json!({"age": 16, "idNumber": "123"}));
//! assert_eq!(errors.message("idNumber"), Some("idNumber must be empty"));
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod boolean;
pub mod common;
pub mod custom;
pub mod date;
pub mod enums;
pub mod error;
pub mod number;
pub mod object;
pub mod string;

pub use common::{equals, is_defined, is_null, not_equals, required, same_as};
pub use error::{CatalogError, Result};

pub use schemagate_core::aggregate;

// Re-export the core building blocks
pub use schemagate_core::{
    all, any, other, other_all, validate, validate_with_full_data, ErrorMap, FieldRules, Rule,
    RuleContext, RuleGroup, Schema, ValidationConfig, Validator,
};
