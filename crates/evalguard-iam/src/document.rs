//! IAM policy document types.
//!
//! Only the keys the linter reads are modelled; everything else in a
//! statement (`Principal`, `NotAction`, ...) is ignored. IAM lets
//! `Statement`, `Action`, and `Resource` be either a single value or a list,
//! which `OneOrMany` absorbs. An explicit `null` in any of them reads as an
//! empty list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A JSON value that may be written as `x` or `[x, ...]`.
///
/// `Many` is tried first: a struct with all-default fields would otherwise
/// accept an empty array as a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(v) => std::slice::from_ref(v),
            OneOrMany::Many(v) => v,
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<OneOrMany<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<OneOrMany<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Whether a statement grants or revokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
    /// Missing or unrecognised. Neither grants nor denies for linting.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single statement from a policy document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "Sid", default)]
    pub sid: Option<String>,

    #[serde(rename = "Effect", default)]
    pub effect: Effect,

    #[serde(rename = "Action", default, deserialize_with = "null_as_empty")]
    pub action: OneOrMany<String>,

    #[serde(rename = "Resource", default, deserialize_with = "null_as_empty")]
    pub resource: OneOrMany<String>,

    /// Kept opaque; the linter only cares whether it is present.
    #[serde(rename = "Condition", default)]
    pub condition: Option<Value>,
}

impl Statement {
    /// The label used in findings.
    pub fn label(&self) -> &str {
        self.sid.as_deref().unwrap_or("unnamed")
    }

    pub fn is_allow(&self) -> bool {
        self.effect == Effect::Allow
    }

    pub fn actions(&self) -> &[String] {
        self.action.as_slice()
    }

    pub fn resources(&self) -> &[String] {
        self.resource.as_slice()
    }

    pub fn grants(&self, action: &str) -> bool {
        self.actions().iter().any(|a| a == action)
    }
}

/// The top-level policy document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version", default)]
    pub version: Option<String>,

    #[serde(rename = "Statement", default, deserialize_with = "null_as_empty")]
    pub statement: OneOrMany<Statement>,
}

impl PolicyDocument {
    pub fn statements(&self) -> &[Statement] {
        self.statement.as_slice()
    }
}
