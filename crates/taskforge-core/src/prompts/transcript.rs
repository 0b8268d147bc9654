//! Transcript extraction prompt: shared guidelines plus the multi-task
//! `{tasks:[...]}` output contract.

use chrono::{DateTime, FixedOffset};

use super::task_parsing::{base_guidelines, format_reference};
use crate::resolve::TZ_NAME;

/// Multi-task output contract appended to the base guidelines.
pub const TRANSCRIPT_CONTRACT: &str = r#"Your job is to extract MULTIPLE tasks from a meeting transcript. Each task should follow the same format and guidelines.

Example input:
"John needs to review the docs by Wednesday. Sarah please finish the design by tomorrow 3pm. Mike urgent task for client meeting tonight."

Example output:
{
  "tasks": [
    {
      "title": "Review the docs",
      "assignee": "John",
      "dueDate": "wednesday",
      "priority": "P3",
      "originalDue": "by Wednesday"
    },
    {
      "title": "Finish the design",
      "assignee": "Sarah",
      "dueDate": "2024-02-21T15:00:00+05:30",
      "priority": "P3",
      "originalDue": "tomorrow 3pm"
    },
    {
      "title": "Client meeting preparation",
      "assignee": "Mike",
      "dueDate": "tonight",
      "priority": "P1",
      "originalDue": "tonight"
    }
  ]
}

IMPORTANT:
1. For day names (e.g., "Wednesday", "Friday"), ALWAYS return just the lowercase day name as dueDate
2. For vague references (e.g., "tonight", "next week"), return the exact phrase in lowercase
3. Only use ISO date format for specific dates and times
4. Never convert day names to actual dates
5. Always return a valid JSON object with a "tasks" array"#;

/// System instruction for transcript extraction.
pub fn transcript_system(reference: DateTime<FixedOffset>) -> String {
    format!("{}\n\n{}", base_guidelines(reference), TRANSCRIPT_CONTRACT)
}

/// User message: the current time in the fixed timezone plus the transcript.
pub fn transcript_user(reference: DateTime<FixedOffset>, transcript: &str) -> String {
    format!(
        "Extract all tasks from this meeting transcript. Current date/time in {} is: {}\n\nTranscript: \"{}\"",
        TZ_NAME,
        format_reference(reference),
        transcript
    )
}
