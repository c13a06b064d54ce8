//! Immutable validation rules
//!
//! A [`Rule`] pairs a predicate over a [`RuleContext`] with a message
//! template. Rules are built once, typically when a schema is defined, and
//! then shared by every validation that uses that schema. Deriving a rule
//! with [`Rule::with_message`] or [`Rule::negated`] never touches the
//! original.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Placeholder replaced with the field key when a message is rendered
pub const FIELD_KEY_PLACEHOLDER: &str = "{field_key}";

/// Placeholder replaced with the field value when a message is rendered
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Shared predicate type behind every rule
pub type Predicate = Arc<dyn Fn(&RuleContext<'_>) -> bool + Send + Sync>;

/// Inputs handed to a rule predicate
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Value of the field under test, `None` when absent
    pub current_value: Option<&'a Value>,
    /// The outermost data object of the current validation call
    pub whole_data: &'a Value,
}

impl<'a> RuleContext<'a> {
    /// Create a new rule context
    pub fn new(current_value: Option<&'a Value>, whole_data: &'a Value) -> Self {
        Self {
            current_value,
            whole_data,
        }
    }

    /// Same whole data, different current value
    pub fn with_current(&self, current_value: Option<&'a Value>) -> Self {
        Self {
            current_value,
            whole_data: self.whole_data,
        }
    }
}

/// A predicate plus the message template reported when it fails
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: Arc<str>,
}

impl Rule {
    /// Create a rule from a predicate and a message template
    pub fn new<F, M>(predicate: F, message: M) -> Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
        M: Into<String>,
    {
        Self {
            predicate: shared(predicate),
            message: Arc::from(message.into()),
        }
    }

    /// Create a rule whose predicate only looks at the current value
    pub fn from_value<F, M>(predicate: F, message: M) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
        M: Into<String>,
    {
        Self::new(move |ctx| predicate(ctx.current_value), message)
    }

    /// Build a rule from an already shared predicate
    pub fn from_predicate<M: Into<String>>(predicate: Predicate, message: M) -> Self {
        Self {
            predicate,
            message: Arc::from(message.into()),
        }
    }

    /// Evaluate the predicate
    pub fn validate(&self, ctx: &RuleContext<'_>) -> bool {
        (self.predicate)(ctx)
    }

    /// The unrendered message template
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The shared predicate
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Same predicate, new message
    pub fn with_message<M: Into<String>>(&self, message: M) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: Arc::from(message.into()),
        }
    }

    /// Inverted predicate, same message.
    ///
    /// The message is kept as-is, so a negated `is_empty` still reports
    /// "must be empty" when it fails. Pair with [`Rule::with_message`] when
    /// the wording matters.
    pub fn negated(&self) -> Self {
        let inner = Arc::clone(&self.predicate);
        Self {
            predicate: shared(move |ctx| !inner(ctx)),
            message: Arc::clone(&self.message),
        }
    }
}

fn shared<F>(predicate: F) -> Predicate
where
    F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
{
    Arc::new(predicate)
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
