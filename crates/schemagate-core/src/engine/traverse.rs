//! Recursive walk over a schema scope
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::config::ValidationConfig;
use crate::error_map::ErrorMap;
use crate::gate::{admits, evaluate_gate};
use crate::path::resolve;
use crate::render::render_message;
use crate::schema::{ErrorPath, FieldEntry, FieldRules, RuleGroup, Schema, SchemaNode};
use serde_json::Value;
use tracing::{debug, trace};

/// Whether the walk should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    /// The error budget is spent; unwind without visiting anything else
    Halt,
}

/// State for one validation call
pub(crate) struct Traversal<'a> {
    full_data: &'a Value,
    budget: Option<usize>,
    recorded: usize,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(full_data: &'a Value, config: &ValidationConfig) -> Self {
        Self {
            full_data,
            budget: config.error_budget(),
            recorded: 0,
        }
    }

    /// Visit every key of `schema` in order against the scope `data`
    pub(crate) fn scope(
        &mut self,
        schema: &Schema,
        data: Option<&Value>,
        errors: &mut ErrorMap,
    ) -> Flow {
        for (key, node) in schema.iter() {
            let flow = match node {
                SchemaNode::Precondition(rules) => {
                    // the whole scope object is the current value here
                    let outcome = evaluate_gate(Some(rules.as_slice()), data, self.full_data, true);
                    if let Some(rule) = outcome.failed_rule() {
                        debug!(
                            key,
                            condition = rule.message(),
                            "Scope pre-condition failed, skipping remaining keys"
                        );
                        return Flow::Continue;
                    }
                    Flow::Continue
                }
                SchemaNode::Field(rules) => self.field(key, rules, data, errors),
                SchemaNode::Nested(nested) => {
                    let mut nested_errors = ErrorMap::new();
                    let flow = self.scope(nested, resolve(data, key), &mut nested_errors);
                    if !nested_errors.is_empty() {
                        errors.insert_nested(key, nested_errors);
                    }
                    flow
                }
                SchemaNode::Metadata(_) => Flow::Continue,
            };

            if flow == Flow::Halt {
                return Flow::Halt;
            }
        }
        Flow::Continue
    }

    fn field(
        &mut self,
        key: &str,
        rules: &FieldRules,
        data: Option<&Value>,
        errors: &mut ErrorMap,
    ) -> Flow {
        let current = resolve(data, key);

        for entry in rules.entries() {
            match entry {
                FieldEntry::Precondition(conditions) => {
                    let outcome = evaluate_gate(Some(conditions.as_slice()), current, self.full_data, true);
                    if outcome.is_fail() {
                        trace!(field = key, "Field pre-condition failed, skipping remaining groups");
                        break;
                    }
                }
                FieldEntry::Group(group) => {
                    if self.group(key, group, current, errors) == Flow::Halt {
                        return Flow::Halt;
                    }
                }
            }
        }
        Flow::Continue
    }

    fn group(
        &mut self,
        key: &str,
        group: &RuleGroup,
        current: Option<&Value>,
        errors: &mut ErrorMap,
    ) -> Flow {
        let when = evaluate_gate(group.when_rules(), current, self.full_data, true);
        let when_not = evaluate_gate(group.when_not_rules(), current, self.full_data, false);
        if !admits(when, when_not) {
            trace!(field = key, ?when, ?when_not, "Rule group skipped by gate");
            return Flow::Continue;
        }

        let outcome = evaluate_gate(Some(group.validate_rules()), current, self.full_data, true);
        let Some(rule) = outcome.failed_rule() else {
            return Flow::Continue;
        };

        let target = group
            .error_path()
            .map_or_else(|| key.to_string(), ErrorPath::to_key);
        let message = render_message(rule.message(), key, current);
        debug!(field = key, target = %target, rendered = %message, "Validation failure recorded");
        errors.insert_message(target, message);

        self.recorded += 1;
        match self.budget {
            Some(limit) if self.recorded >= limit => {
                debug!(limit, "Error budget reached, halting traversal");
                Flow::Halt
            }
            _ => Flow::Continue,
        }
    }
}
