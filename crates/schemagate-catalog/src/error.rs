//! Error types for rule factories that parse their arguments
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Failure while building a rule from textual input
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The regular expression does not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A date bound is neither RFC 3339 nor `YYYY-MM-DD`
    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Convenience type alias for Results using [`CatalogError`]
pub type Result<T> = std::result::Result<T, CatalogError>;
