//! Single-task extraction prompt: shared guidelines plus the one-object output
//! contract.
//!
//! The guidelines carry the whole due-date policy as few-shot rules: weekday
//! names and vague phrases come back as lowercase strings, everything else as
//! an ISO instant in the fixed timezone with exact times preserved and a
//! 23:59:59 default when no time was given.

use chrono::{DateTime, Datelike, FixedOffset};

use crate::resolve::TZ_NAME;

/// Base extraction rules. Placeholders: `{timezone}`, `{now}`, `{year}`.
pub const TASK_PARSING_GUIDELINES_TEMPLATE: &str = r#"You are a task parsing assistant that extracts structured data from natural language task descriptions. Your job is to identify:

1. Task title (the main action/work to be done)
2. Assignee (the person responsible for the task)
3. Due date/time reference
4. Priority level (P1, P2, P3, or P4)

Guidelines for extraction:
- ALWAYS try to identify a person's name as the assignee, even if not explicitly marked with "by" or "for"
- If no priority is specified, default to P3
- For due dates, follow these rules:
  * If ONLY a day name is mentioned (e.g., "by Wednesday"), return just the day name as a string (e.g., "wednesday")
  * If a vague time reference is used (e.g., "tonight", "next week"), return that exact phrase
  * For specific dates/times, format as ISO strings with these rules:
    - All times are in the {timezone} timezone
    - For explicit dates with year (e.g., "June 20, 2025"), use that exact year
    - For relative dates with time ("tomorrow 3pm"), calculate from: {now}
    - For dates without year (e.g., "June 20 at 2pm"), use current year ({year})
    - IMPORTANT: Always preserve the EXACT time mentioned (e.g., "3pm" should be exactly 15:00)
    - If no specific time given with date, default to 23:59:59
    - Return dates in ISO format with timezone offset for {timezone}

Example inputs and expected outputs:
- "Do it by Wednesday" -> dueDate: "wednesday"
- "Complete by tonight" -> dueDate: "tonight"
- "Due next week" -> dueDate: "next week"
- "Meeting tomorrow 3pm" -> dueDate: "2024-02-21T15:00:00+05:30"
- "Review by June 20th 2pm" -> dueDate: "2024-06-20T14:00:00+05:30"
- "Submit by Friday 6pm" -> dueDate: "friday"

IMPORTANT: For day names and vague time references, return the exact string in lowercase. For specific dates and times, return ISO format."#;

const SINGLE_TASK_CONTRACT: &str = r#"Example output:
{
  "title": "Review presentation",
  "assignee": "Sarah",
  "dueDate": "2024-05-29T15:00:00+05:30",
  "priority": "P2",
  "originalDue": "tomorrow at 3pm"
}

IMPORTANT:
1. For day names (e.g., "Wednesday", "Friday"), ALWAYS return just the lowercase day name as dueDate
2. For vague references (e.g., "tonight", "next week"), return the exact phrase in lowercase
3. Only use ISO date format for specific dates and times
4. Never convert day names to actual dates

You must respond with valid JSON containing these exact keys: title, assignee, dueDate, priority, originalDue"#;

/// Reference instant formatted the way the prompts state "now"
/// (en-US style, e.g. "6/20/2024, 3:00:00 PM").
pub fn format_reference(reference: DateTime<FixedOffset>) -> String {
    reference.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Fill the guideline placeholders from the reference instant.
pub fn base_guidelines(reference: DateTime<FixedOffset>) -> String {
    TASK_PARSING_GUIDELINES_TEMPLATE
        .replace("{timezone}", TZ_NAME)
        .replace("{now}", &format_reference(reference))
        .replace("{year}", &reference.year().to_string())
}

/// System instruction for single-task extraction.
pub fn single_task_system(reference: DateTime<FixedOffset>) -> String {
    format!("{}\n\n{}", base_guidelines(reference), SINGLE_TASK_CONTRACT)
}

/// User message: the current time in the fixed timezone plus the literal input.
pub fn single_task_user(reference: DateTime<FixedOffset>, task_text: &str) -> String {
    format!(
        "Parse this task and extract the components according to the guidelines. Current date/time in {} is: {}\n\nTask: \"{}\"",
        TZ_NAME,
        format_reference(reference),
        task_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_filled() {
        let reference = DateTime::parse_from_rfc3339("2024-06-20T15:04:05+05:30").unwrap();
        let system = single_task_system(reference);
        assert!(!system.contains("{timezone}"));
        assert!(!system.contains("{now}"));
        assert!(!system.contains("{year}"));
        assert!(system.contains("Asia/Kolkata"));
        assert!(system.contains("current year (2024)"));
        assert!(system.contains("6/20/2024, 3:04:05 PM"));
    }

    #[test]
    fn user_prompt_quotes_the_input_verbatim() {
        let reference = DateTime::parse_from_rfc3339("2024-06-20T15:04:05+05:30").unwrap();
        let user = single_task_user(reference, "Review docs by Wednesday");
        assert!(user.contains("Task: \"Review docs by Wednesday\""));
        assert!(user.contains("Asia/Kolkata"));
    }
}
