//! Engine configuration
//!
//! The defaults reproduce the plain traversal: every key is visited and
//! every failure is recorded. `fail_fast` and `max_errors` let a host stop
//! early when it only needs to know whether the data is valid.
//!
//! Settings are loaded from, in increasing precedence:
//! - Default values
//! - Any serde source the host already uses (TOML, YAML, JSON)
//! - Environment variables (`SCHEMAGATE_FAIL_FAST`, `SCHEMAGATE_MAX_ERRORS`)
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable toggling fail-fast mode
pub const ENV_FAIL_FAST: &str = "SCHEMAGATE_FAIL_FAST";

/// Environment variable bounding the number of recorded failures
pub const ENV_MAX_ERRORS: &str = "SCHEMAGATE_MAX_ERRORS";

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Stop at the first recorded failure
    pub fail_fast: bool,
    /// Maximum number of failure writes before stopping (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of failure writes
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Number of failure writes after which traversal stops, if bounded
    pub fn error_budget(&self) -> Option<usize> {
        match (self.fail_fast, self.max_errors) {
            (true, _) => Some(1),
            (false, 0) => None,
            (false, n) => Some(n),
        }
    }

    /// Defaults overlaid with the environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply environment overrides, ignoring malformed values
    pub fn merge_with_env(&mut self) {
        let mut merged = self.clone();
        if let Err(e) = merged.apply_env(|key| std::env::var(key).ok()) {
            tracing::warn!(error = %e, "Ignoring invalid validation settings from environment");
            return;
        }
        *self = merged;
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_FAIL_FAST) {
            self.fail_fast = parse_flag(ENV_FAIL_FAST, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_ERRORS) {
            self.max_errors = raw.trim().parse().map_err(|_| {
                Error::config(
                    ENV_MAX_ERRORS,
                    format!("expected an unsigned integer, got '{}'", raw),
                )
            })?;
        }
        Ok(())
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::config(
            key,
            format!("expected a boolean flag, got '{}'", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_unbounded() {
        let config = ValidationConfig::default();
        assert!(!config.fail_fast);
        assert_eq!(config.max_errors, 0);
        assert_eq!(config.error_budget(), None);
    }

    #[test]
    fn test_builders_and_budget() {
        assert_eq!(ValidationConfig::default().with_fail_fast().error_budget(), Some(1));
        assert_eq!(ValidationConfig::default().with_max_errors(3).error_budget(), Some(3));
        assert_eq!(
            ValidationConfig::default().with_max_errors(3).with_fail_fast().error_budget(),
            Some(1)
        );
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = ValidationConfig::default();
        config
            .apply_env(lookup(&[(ENV_FAIL_FAST, "TRUE"), (ENV_MAX_ERRORS, " 7 ")]))
            .unwrap();
        assert!(config.fail_fast);
        assert_eq!(config.max_errors, 7);
    }

    #[test]
    fn test_apply_env_rejects_garbage() {
        let mut config = ValidationConfig::default();
        let err = config
            .apply_env(lookup(&[(ENV_MAX_ERRORS, "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("many"));

        let err = config
            .apply_env(lookup(&[(ENV_FAIL_FAST, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ValidationConfig = serde_json::from_str(r#"{"max_errors": 4}"#).unwrap();
        assert_eq!(config, ValidationConfig::default().with_max_errors(4));
    }

    #[test]
    #[serial]
    fn test_from_env_and_merge() {
        std::env::set_var(ENV_MAX_ERRORS, "2");
        std::env::remove_var(ENV_FAIL_FAST);
        assert_eq!(ValidationConfig::from_env().unwrap().max_errors, 2);

        std::env::set_var(ENV_MAX_ERRORS, "nope");
        assert!(ValidationConfig::from_env().is_err());

        let mut config = ValidationConfig::default().with_max_errors(5);
        config.merge_with_env();
        assert_eq!(config.max_errors, 5);

        std::env::remove_var(ENV_MAX_ERRORS);
    }
}
