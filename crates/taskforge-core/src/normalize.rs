//! Per-record due-date normalizer.
//!
//! Dispatch order is the crux: phrase classification must happen before any
//! timestamp parse, because a weekday name or vague phrase is never a calendar
//! instant and must never be fed to the resolver.

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::classify::{is_vague_phrase, is_weekday};
use crate::resolve::resolve_timestamp;
use crate::task::TaskRecord;

static ISO_TIMESTAMP_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("valid regex"));

/// Lowercase the whole string, then capitalize only the first character
/// ("NEXT week" -> "Next week").
pub fn capitalize_phrase(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lower,
    }
}

/// Normalize one task's due date into its canonical form. Pure: returns a new
/// record, never mutates the input batch.
///
/// First match wins:
/// 1. weekday or vague phrase -> capitalized phrase, untouched by any parsing;
/// 2. ISO-timestamp-like string -> timestamp resolver; on failure the field
///    degrades to `None` (sibling records are unaffected);
/// 3. any other string -> capitalized pass-through;
/// 4. `None` stays `None`.
pub fn normalize_due_date(
    task: TaskRecord,
    source_text: &str,
    reference: DateTime<FixedOffset>,
) -> TaskRecord {
    let Some(raw) = task.due_date.clone() else {
        return task;
    };

    if is_weekday(&raw) || is_vague_phrase(&raw) {
        return task.with_due_date(Some(capitalize_phrase(&raw)));
    }

    if ISO_TIMESTAMP_PREFIX.is_match(&raw) {
        return match resolve_timestamp(&raw, source_text, reference) {
            Ok(resolved) => task.with_due_date(Some(resolved)),
            Err(err) => {
                warn!(candidate = %raw, %err, "dropping unresolvable due date");
                task.with_due_date(None)
            }
        };
    }

    task.with_due_date(Some(capitalize_phrase(&raw)))
}

/// Normalize every record of a transcript batch against the same source text
/// and reference instant. One record's resolver failure never aborts the rest.
pub fn normalize_batch(
    tasks: Vec<TaskRecord>,
    source_text: &str,
    reference: DateTime<FixedOffset>,
) -> Vec<TaskRecord> {
    tasks
        .into_iter()
        .map(|task| normalize_due_date(task, source_text, reference))
        .collect()
}
