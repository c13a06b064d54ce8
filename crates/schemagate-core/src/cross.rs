//! Cross-reference rules
//!
//! [`other`] re-targets a rule at a different field of the whole data
//! object, which is how `when`/`whenNot` gates and refinements look at
//! sibling or nested fields without traversing them.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::path::resolve;
use crate::rule::{Rule, RuleContext};

/// Evaluate `rule` against the value at `path` in the whole data.
///
/// The current value of the field under test is ignored. A path that does
/// not resolve hands `None` to the inner rule, which decides for itself
/// whether absence passes. The message is the inner rule's template,
/// unchanged, so `{field_key}` still names the field that consumes this
/// rule rather than `path`.
pub fn other(path: impl Into<String>, rule: Rule) -> Rule {
    let path = path.into();
    let message = rule.message().to_string();
    Rule::new(
        move |ctx: &RuleContext<'_>| {
            let value = resolve(Some(ctx.whole_data), &path);
            rule.validate(&ctx.with_current(value))
        },
        message,
    )
}

/// Wrap every rule in `rules` with [`other`] for the same path
pub fn other_all<I>(path: impl Into<String>, rules: I) -> Vec<Rule>
where
    I: IntoIterator<Item = Rule>,
{
    let path = path.into();
    rules.into_iter().map(|rule| other(path.clone(), rule)).collect()
}
