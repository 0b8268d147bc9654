//! Task record types shared by the extractor, normalizer, and gateway.
//!
//! The wire shape mirrors what the completion capability is instructed to emit:
//! `{title, assignee, dueDate, priority, originalDue}`. Deserialization is
//! deliberately lenient — the model sometimes drops keys or mangles the
//! priority, and a semantically incomplete record must degrade to defaults, not
//! fail the call.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Closed priority set. Anything the model emits outside P1–P4 collapses to P3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    #[default]
    P3,
    P4,
}

impl Priority {
    /// Parse a priority label, falling back to P3 for anything unrecognized.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "P1" => Priority::P1,
            "P2" => Priority::P2,
            "P4" => Priority::P4,
            _ => Priority::P3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        }
    }
}

/// One extracted task. `due_date` is polymorphic: `None`, a weekday/vague
/// phrase, or a timezone-qualified ISO instant once normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// The action description. Required, non-empty after extraction.
    #[serde(default)]
    pub title: String,

    /// Inferred responsible person; empty when none was identified.
    #[serde(default)]
    pub assignee: String,

    /// `None`, a phrase ("Wednesday", "Tonight"), or an ISO instant with a
    /// literal `+05:30` offset once the normalizer has run.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub due_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,

    /// Verbatim source substring that produced `due_date`. Resolution context
    /// only, never displayed as ground truth.
    #[serde(default)]
    pub original_due: String,
}

impl TaskRecord {
    /// Replace the due date, leaving everything else untouched.
    pub fn with_due_date(self, due_date: Option<String>) -> Self {
        Self { due_date, ..self }
    }
}

/// Accepts a string or null; any other JSON type degrades to `None`.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts "P1".."P4" (any case); everything else degrades to P3.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Priority::parse_lenient(&s),
        _ => Priority::default(),
    })
}
