//! Aggregate combinators folding several rules into one
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::rule::{Rule, RuleContext};

/// Delimiter between sub-rule messages in an aggregate message
pub const MESSAGE_DELIMITER: &str = ", ";

/// Conjunction of `rules`.
///
/// Every sub-rule sees the same context. The message lists all sub-rule
/// messages whichever one failed. An empty list always passes.
pub fn all<I>(rules: I) -> Rule
where
    I: IntoIterator<Item = Rule>,
{
    let rules: Vec<Rule> = rules.into_iter().collect();
    let message = joined_message(&rules);
    Rule::new(
        move |ctx: &RuleContext<'_>| rules.iter().all(|rule| rule.validate(ctx)),
        message,
    )
}

/// Disjunction of `rules`. An empty list always fails.
pub fn any<I>(rules: I) -> Rule
where
    I: IntoIterator<Item = Rule>,
{
    let rules: Vec<Rule> = rules.into_iter().collect();
    let message = joined_message(&rules);
    Rule::new(
        move |ctx: &RuleContext<'_>| rules.iter().any(|rule| rule.validate(ctx)),
        message,
    )
}

fn joined_message(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(Rule::message)
        .collect::<Vec<_>>()
        .join(MESSAGE_DELIMITER)
}
