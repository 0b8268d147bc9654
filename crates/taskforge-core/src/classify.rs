//! Lexical classifiers for due-date expressions.
//!
//! Pure predicates, all case-insensitive. The dispatch order that makes them
//! safe (phrase checks before any timestamp parse) lives in [`crate::normalize`];
//! nothing here has side effects or cares about ordering.

use once_cell::sync::Lazy;
use regex::Regex;

/// The seven weekday names; matched by equality, never containment.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Closed vocabulary of vague relative-time phrases; matched by containment.
/// These are never converted to calendar dates by the core.
pub const VAGUE_TIME_REFS: [&str; 6] = [
    "tonight",
    "next week",
    "soon",
    "this evening",
    "this afternoon",
    "this week",
];

static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d{1,2}(?::\d{2})?\s*(?:am|pm)\b").expect("valid regex"));

static AT_BY_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:at|by)\s+\d{1,2}(?::\d{2})?\b").expect("valid regex"));

const MONTH_NAMES: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

static MONTH_THEN_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b{MONTH_NAMES}\s+\d{{1,2}}(?:st|nd|rd|th)?\b"))
        .expect("valid regex")
});

static DAY_THEN_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+{MONTH_NAMES}\b"))
        .expect("valid regex")
});

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("valid regex"));

static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").expect("valid regex"));

/// True iff `text` contains any member of the vague-phrase vocabulary.
pub fn is_vague_phrase(text: &str) -> bool {
    let lower = text.to_lowercase();
    VAGUE_TIME_REFS.iter().any(|phrase| lower.contains(phrase))
}

/// True iff `text`, trimmed, equals one of the seven weekday names.
/// Equality, not containment: "by wednesday" is not a weekday.
pub fn is_weekday(text: &str) -> bool {
    let trimmed = text.trim();
    WEEKDAYS.iter().any(|day| trimmed.eq_ignore_ascii_case(day))
}

/// True iff `text` carries an explicit clock time ("3pm", "10:30 am",
/// "at 5", "by 6:15").
pub fn has_explicit_time(text: &str) -> bool {
    CLOCK_TIME.is_match(text) || AT_BY_TIME.is_match(text)
}

/// True iff `text` carries an explicit calendar date: month-name + day in
/// either order (ordinal suffixes allowed), ISO `YYYY-MM-DD`, or `M/D/YYYY`.
pub fn has_explicit_date(text: &str) -> bool {
    MONTH_THEN_DAY.is_match(text)
        || DAY_THEN_MONTH.is_match(text)
        || ISO_DATE.is_match(text)
        || SLASH_DATE.is_match(text)
}
