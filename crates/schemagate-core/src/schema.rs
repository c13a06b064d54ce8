//! Schema model: rule groups, field rules and nested scopes
//!
//! A [`Schema`] is an ordered mapping from key to [`SchemaNode`]. The node
//! kind is fixed when the schema is built, so the engine never has to guess
//! whether a value is a rule list or a nested scope.
//!
//! ```rust
//! use schemagate_core::{Rule, RuleGroup, Schema};
//!
//! let adult = Rule::from_value(
//!     |v| v.and_then(|v| v.as_f64()).is_some_and(|n| n >= 18.0),
//!     "{field_key} must be at least 18",
//! );
//!
//! let schema = Schema::new()
//!     .field("age", vec![RuleGroup::new([adult])])
//!     .nested("address", Schema::new());
//!
//! assert_eq!(schema.len(), 2);
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::rule::Rule;
use serde_json::Value;
use std::borrow::Cow;

/// Reserved key for a scope pre-condition
pub const BEFORE_ALL_WHEN: &str = "$beforeAllWhen";

/// Reserved key for refinement groups not tied to a real field
pub const REFINE: &str = "$refine";

/// Joiner used when a multi-segment error path collapses to one key
pub const PATH_SEGMENT_JOINER: &str = ",";

/// Where a failing rule group writes its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPath {
    /// A single error-map key
    Key(String),
    /// Several segments, collapsed to one joined key
    Segments(Vec<String>),
}

impl ErrorPath {
    /// The top-level error-map key this path writes to
    pub fn to_key(&self) -> String {
        match self {
            Self::Key(key) => key.clone(),
            Self::Segments(segments) => segments.join(PATH_SEGMENT_JOINER),
        }
    }
}

impl From<&str> for ErrorPath {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for ErrorPath {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<Vec<String>> for ErrorPath {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

impl From<Vec<&str>> for ErrorPath {
    fn from(segments: Vec<&str>) -> Self {
        Self::Segments(segments.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ErrorPath {
    fn from(segments: [&str; N]) -> Self {
        Self::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

/// One gated unit of validation for a field
#[derive(Debug, Clone, Default)]
pub struct RuleGroup {
    validate: Vec<Rule>,
    when: Option<Vec<Rule>>,
    when_not: Option<Vec<Rule>>,
    path: Option<ErrorPath>,
}

impl RuleGroup {
    /// Create a group with the rules that validate the field
    pub fn new<I>(validate: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        Self {
            validate: validate.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Only apply the group when every rule here passes
    pub fn when<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.when = Some(rules.into_iter().collect());
        self
    }

    /// Skip the group when every rule here passes
    pub fn when_not<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.when_not = Some(rules.into_iter().collect());
        self
    }

    /// Write failures under `path` instead of the field key
    pub fn path(mut self, path: impl Into<ErrorPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Rules that validate the field
    pub fn validate_rules(&self) -> &[Rule] {
        &self.validate
    }

    /// The `when` gate, if any
    pub fn when_rules(&self) -> Option<&[Rule]> {
        self.when.as_deref()
    }

    /// The `whenNot` gate, if any
    pub fn when_not_rules(&self) -> Option<&[Rule]> {
        self.when_not.as_deref()
    }

    /// Override error path, if any
    pub fn error_path(&self) -> Option<&ErrorPath> {
        self.path.as_ref()
    }
}

/// An entry in a field's ordered rule list
#[derive(Debug, Clone)]
pub enum FieldEntry {
    /// Field-level `$beforeAllWhen`: stops the remaining entries when it fails
    Precondition(Vec<Rule>),
    /// A regular rule group
    Group(RuleGroup),
}

/// Ordered rule groups attached to one field
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    entries: Vec<FieldEntry>,
}

impl FieldRules {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule group
    pub fn group(mut self, group: RuleGroup) -> Self {
        self.entries.push(FieldEntry::Group(group));
        self
    }

    /// Append a field-level pre-condition
    pub fn before_all_when<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.entries
            .push(FieldEntry::Precondition(rules.into_iter().collect()));
        self
    }

    /// Entries in declared order
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<RuleGroup> for FieldRules {
    fn from(group: RuleGroup) -> Self {
        Self::new().group(group)
    }
}

impl From<Vec<RuleGroup>> for FieldRules {
    fn from(groups: Vec<RuleGroup>) -> Self {
        groups.into_iter().collect()
    }
}

impl FromIterator<RuleGroup> for FieldRules {
    fn from_iter<T: IntoIterator<Item = RuleGroup>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(FieldEntry::Group).collect(),
        }
    }
}

/// What a schema key maps to
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// A leaf field with its rule groups (including `$refine`)
    Field(FieldRules),
    /// A sub-object validated as its own scope
    Nested(Schema),
    /// Scope pre-condition; a failure skips every later key in the scope
    Precondition(Vec<Rule>),
    /// Anything else; ignored by the engine
    Metadata(Value),
}

/// Ordered mapping from key to [`SchemaNode`]
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: Vec<(String, SchemaNode)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, node: SchemaNode) -> Option<SchemaNode> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, node)),
            None => {
                self.entries.push((key, node));
                None
            }
        }
    }

    /// Add a leaf field
    pub fn field(mut self, key: impl Into<String>, rules: impl Into<FieldRules>) -> Self {
        self.insert(key, SchemaNode::Field(rules.into()));
        self
    }

    /// Add a nested sub-schema
    pub fn nested(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.insert(key, SchemaNode::Nested(schema));
        self
    }

    /// Set the scope pre-condition at this position in key order
    pub fn before_all_when<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.insert(
            BEFORE_ALL_WHEN,
            SchemaNode::Precondition(rules.into_iter().collect()),
        );
        self
    }

    /// Set the refinement groups
    pub fn refine(mut self, rules: impl Into<FieldRules>) -> Self {
        self.insert(REFINE, SchemaNode::Field(rules.into()));
        self
    }

    /// Attach a metadata value the engine will not look at
    pub fn metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, SchemaNode::Metadata(value));
        self
    }

    /// Look up a node by key
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Source of the concrete schema for one validation call.
///
/// Implemented by [`Schema`] itself and by any `Fn(&Value) -> Schema`, which
/// is called once with the top-level data. Use the closure form when limits
/// depend on the data being validated.
pub trait SchemaProvider {
    /// Produce the schema for `data`
    fn provide(&self, data: &Value) -> Cow<'_, Schema>;
}

impl SchemaProvider for Schema {
    fn provide(&self, _data: &Value) -> Cow<'_, Schema> {
        Cow::Borrowed(self)
    }
}

impl<F> SchemaProvider for F
where
    F: Fn(&Value) -> Schema,
{
    fn provide(&self, data: &Value) -> Cow<'_, Schema> {
        Cow::Owned(self(data))
    }
}
