//! Error types for the Schemagate core library
//!
//! Validation failures are not errors: they are returned as data in an
//! [`ErrorMap`](crate::ErrorMap). The types here cover the library's own
//! failure modes.

use thiserror::Error;

/// Main error type for Schemagate core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        /// Environment variable or field the value came from
        source_key: Option<String>,
    },
}

impl Error {
    /// Configuration error tied to a named setting
    pub fn config(source_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source_key: Some(source_key.into()),
        }
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
