//! Edit-form prefill: converts a stored due date into a `datetime-local` field
//! value.
//!
//! Deliberately looser than the core canonicalization — these are editing
//! defaults, not storage policy: "tonight" lands on 8 PM today, "tomorrow" on
//! 9 AM, a weekday on its next occurrence at 9 AM. The core never does any of
//! this; phrases stay phrases until a user opens the edit form.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDateTime, Weekday};

const FIELD_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Convert a canonical due date (phrase or ISO instant) into a
/// `YYYY-MM-DDTHH:MM` field value. Returns `None` for phrases with no editing
/// default (e.g. "Soon") and for unparseable values. Consumed by the edit-form
/// UI; the extraction routes never touch it.
pub fn due_field_value(due: &str, now: DateTime<FixedOffset>) -> Option<String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(due) {
        return Some(instant.format(FIELD_FORMAT).to_string());
    }
    phrase_to_field_date(due, now).map(|dt| dt.format(FIELD_FORMAT).to_string())
}

/// Phrase-to-date conversion with editing defaults.
fn phrase_to_field_date(phrase: &str, now: DateTime<FixedOffset>) -> Option<NaiveDateTime> {
    let today = now.date_naive();
    let lower = phrase.trim().to_lowercase();

    if lower == "tonight" {
        return today.and_hms_opt(20, 0, 0);
    }
    if lower == "tomorrow" {
        return (today + Duration::days(1)).and_hms_opt(9, 0, 0);
    }

    let target = parse_weekday(&lower)?;
    let mut days_ahead =
        i64::from(target.num_days_from_sunday()) - i64::from(today.weekday().num_days_from_sunday());
    // Always forward: today's own name means next week.
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    (today + Duration::days(days_ahead)).and_hms_opt(9, 0, 0)
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Wednesday, June 19 2024, 15:00 IST
    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-19T15:00:00+05:30").unwrap()
    }

    #[test]
    fn tonight_is_eight_pm_today() {
        assert_eq!(
            due_field_value("Tonight", now()).as_deref(),
            Some("2024-06-19T20:00")
        );
    }

    #[test]
    fn tomorrow_is_nine_am() {
        assert_eq!(
            due_field_value("tomorrow", now()).as_deref(),
            Some("2024-06-20T09:00")
        );
    }

    #[test]
    fn weekday_is_next_occurrence_at_nine() {
        // Friday is two days out.
        assert_eq!(
            due_field_value("Friday", now()).as_deref(),
            Some("2024-06-21T09:00")
        );
        // Today's own name rolls a full week forward.
        assert_eq!(
            due_field_value("wednesday", now()).as_deref(),
            Some("2024-06-26T09:00")
        );
        // Monday already passed this week.
        assert_eq!(
            due_field_value("monday", now()).as_deref(),
            Some("2024-06-24T09:00")
        );
    }

    #[test]
    fn iso_instants_pass_through_trimmed_to_minutes() {
        assert_eq!(
            due_field_value("2024-06-20T14:30:00+05:30", now()).as_deref(),
            Some("2024-06-20T14:30")
        );
    }

    #[test]
    fn phrases_without_a_default_yield_none() {
        assert_eq!(due_field_value("Soon", now()), None);
        assert_eq!(due_field_value("Next week", now()), None);
        assert_eq!(due_field_value("", now()), None);
    }
}
