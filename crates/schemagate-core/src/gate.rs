//! Gate evaluation shared by `when`, `whenNot`, pre-conditions and rule lists
//!
//! A gate is an optional list of rules. Evaluating it yields the caller's
//! default when no list was given, a pass, or the first failing rule; the
//! consumers interpret those outcomes differently.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::rule::{Rule, RuleContext};
use serde_json::Value;

/// Outcome of evaluating a gate
#[derive(Debug, Clone, Copy)]
pub enum GateOutcome<'r> {
    /// No rule list was present; carries the caller's default
    Absent(bool),
    /// Every rule in the list passed
    Pass,
    /// The first rule whose predicate returned false
    Fail(&'r Rule),
}

impl<'r> GateOutcome<'r> {
    /// `true` for [`GateOutcome::Pass`] and for an absent gate defaulting to `true`
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Pass | Self::Absent(true))
    }

    /// `true` only for [`GateOutcome::Fail`]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// The failing rule, if any
    pub fn failed_rule(&self) -> Option<&'r Rule> {
        match self {
            Self::Fail(rule) => Some(*rule),
            _ => None,
        }
    }
}

/// Evaluate `rules` in order, stopping at the first failure.
///
/// Later rules are never invoked once one fails.
pub fn evaluate_gate<'r>(
    rules: Option<&'r [Rule]>,
    current_value: Option<&Value>,
    whole_data: &Value,
    default_when_absent: bool,
) -> GateOutcome<'r> {
    let Some(rules) = rules else {
        return GateOutcome::Absent(default_when_absent);
    };

    let ctx = RuleContext::new(current_value, whole_data);
    match rules.iter().find(|rule| !rule.validate(&ctx)) {
        Some(rule) => GateOutcome::Fail(rule),
        None => GateOutcome::Pass,
    }
}

/// Whether a rule group passes its `when` / `whenNot` gates.
///
/// `when` blocks only on an explicit failure. `whenNot` blocks only when it
/// evaluates to true; a failing `whenNot` list lets the group through.
pub fn admits(when: GateOutcome<'_>, when_not: GateOutcome<'_>) -> bool {
    !when.is_fail() && !when_not.is_true()
}
