//! Validator trait definition and rule types.
//!
//! Rules are declared per field and evaluated against a raw JSON object
//! before any typed extraction happens.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A single declarative constraint on a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present, non-null and not the empty string.
    Required,
    /// Field, when present and non-null, must be a JSON string.
    String,
}

impl Rule {
    /// Rule name as used in failure messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::String => "string",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of rules keyed by field name.
///
/// Fields are checked in declaration order, so the first failure message
/// is stable for a given body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    fields: Vec<(String, Vec<Rule>)>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name.into(), rules.into_iter().collect()));
        self
    }

    /// Iterate over `(field, rules)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub field: String,
    pub validation: Rule,
    pub message: String,
}

impl Serialize for Rule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of validating a body against a rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    messages: Vec<ValidationMessage>,
}

impl Validation {
    pub fn new(messages: Vec<ValidationMessage>) -> Self {
        Self { messages }
    }

    /// True when at least one rule failed.
    pub fn fails(&self) -> bool {
        !self.messages.is_empty()
    }

    /// All failures, in rule declaration order.
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    /// The first failure message, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(|m| m.message.as_str())
    }
}

/// Validation service for request bodies.
pub trait Validator: Send + Sync {
    /// Validate `data` against `rules`.
    fn validate(&self, data: &Map<String, Value>, rules: &Rules) -> Validation;
}
