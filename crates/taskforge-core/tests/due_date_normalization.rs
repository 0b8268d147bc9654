//! Integration test: due-date normalization — verifies the dispatch order
//! (phrases before any timestamp parse) and the year-inference policy of the
//! timestamp resolver.
//!
//! ## Scenarios
//! 1. Weekday names canonicalize to the capitalized name, for any reference instant.
//! 2. Vague-vocabulary phrases pass through capitalized, never parsed.
//! 3. Re-normalizing canonical output is a no-op (idempotence).
//! 4. Unknown phrases pass through with first-letter capitalization.
//! 5. Year inference: reference-year substitution, advance-when-past, explicit
//!    year trusted, "today" suppressing the advance.
//! 6. Malformed candidates degrade the field to null without aborting siblings.

use chrono::{DateTime, FixedOffset};
use taskforge_core::{
    classify, normalize_batch, normalize_due_date, resolve_timestamp, Priority, TaskRecord,
};

fn reference(iso: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(iso).unwrap()
}

fn task_due(due: &str) -> TaskRecord {
    TaskRecord {
        title: "Review the docs".to_string(),
        assignee: "John".to_string(),
        due_date: Some(due.to_string()),
        priority: Priority::P3,
        original_due: due.to_string(),
    }
}

// ===========================================================================
// Scenario 1+2: phrases canonicalize without parsing
// ===========================================================================

#[test]
fn weekdays_capitalize_regardless_of_reference() {
    for day in classify::WEEKDAYS {
        let expected = {
            let mut c = day.chars();
            c.next().unwrap().to_uppercase().collect::<String>() + c.as_str()
        };
        for r in ["2024-01-01T00:00:00+05:30", "2031-12-31T23:59:59+05:30"] {
            let out = normalize_due_date(task_due(day), "whatever", reference(r));
            assert_eq!(out.due_date.as_deref(), Some(expected.as_str()));
        }
        // Mixed-case input normalizes the same way.
        let out = normalize_due_date(
            task_due(&day.to_uppercase()),
            "whatever",
            reference("2024-01-01T00:00:00+05:30"),
        );
        assert_eq!(out.due_date.as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn vague_phrases_pass_through_capitalized() {
    let r = reference("2024-06-19T15:00:00+05:30");
    for phrase in classify::VAGUE_TIME_REFS {
        let out = normalize_due_date(task_due(phrase), "finish it", r);
        let got = out.due_date.unwrap();
        assert_eq!(got.to_lowercase(), phrase);
        assert!(got.chars().next().unwrap().is_uppercase());
    }
}

#[test]
fn normalization_is_idempotent() {
    let r = reference("2024-06-19T15:00:00+05:30");
    let once = normalize_due_date(task_due("next week"), "due next week", r);
    let twice = normalize_due_date(once.clone(), "due next week", r);
    assert_eq!(once, twice);
}

#[test]
fn unknown_phrases_keep_their_shape() {
    let r = reference("2024-06-19T15:00:00+05:30");
    let out = normalize_due_date(task_due("end of QUARTER"), "by end of quarter", r);
    assert_eq!(out.due_date.as_deref(), Some("End of quarter"));
}

#[test]
fn null_due_date_stays_null() {
    let r = reference("2024-06-19T15:00:00+05:30");
    let task = task_due("x").with_due_date(None);
    let out = normalize_due_date(task, "no deadline here", r);
    assert_eq!(out.due_date, None);
}

// ===========================================================================
// Scenario 5: year inference policy
// ===========================================================================

#[test]
fn reference_year_substituted_when_not_past() {
    // Candidate carries 2024; reference is early 2025. Feb 21 2025 is still
    // ahead of the reference, so the year lands on 2025 with time preserved.
    let result = resolve_timestamp(
        "2024-02-21T15:00:00",
        "meeting tomorrow 3pm",
        reference("2025-01-01T00:00:00+05:30"),
    )
    .unwrap();
    assert_eq!(result, "2025-02-21T15:00:00+05:30");
}

#[test]
fn year_advances_when_substitution_lands_in_the_past() {
    let result = resolve_timestamp(
        "2024-02-21T15:00:00",
        "review by feb 21 3pm",
        reference("2025-06-01T12:00:00+05:30"),
    )
    .unwrap();
    assert_eq!(result, "2026-02-21T15:00:00+05:30");
}

#[test]
fn explicit_year_is_trusted_even_in_the_past() {
    let result = resolve_timestamp(
        "2023-06-20T14:00:00",
        "log the June 20, 2023 review",
        reference("2025-06-01T12:00:00+05:30"),
    )
    .unwrap();
    assert_eq!(result, "2023-06-20T14:00:00+05:30");
}

#[test]
fn today_suppresses_the_year_advance() {
    // Same calendar day as the reference but an earlier hour: without "today"
    // this would roll a year forward.
    let result = resolve_timestamp(
        "2024-06-19T09:00:00",
        "wrap this up today by 9am",
        reference("2024-06-19T15:00:00+05:30"),
    )
    .unwrap();
    assert_eq!(result, "2024-06-19T09:00:00+05:30");
}

#[test]
fn same_instant_as_reference_is_not_advanced() {
    // "Strictly earlier" comparison: equality keeps the reference year.
    let result = resolve_timestamp(
        "2024-06-19T15:00:00",
        "due june 19 at 3pm",
        reference("2024-06-19T15:00:00+05:30"),
    )
    .unwrap();
    assert_eq!(result, "2024-06-19T15:00:00+05:30");
}

#[test]
fn offset_suffix_survives_on_already_qualified_candidates() {
    let result = resolve_timestamp(
        "2024-02-21T15:00:00+05:30",
        "meeting tomorrow 3pm",
        reference("2024-02-20T10:00:00+05:30"),
    )
    .unwrap();
    assert_eq!(result, "2024-02-21T15:00:00+05:30");
}

// ===========================================================================
// Scenario 6: malformed candidates and sibling isolation
// ===========================================================================

#[test]
fn malformed_candidate_degrades_to_null() {
    let r = reference("2024-06-19T15:00:00+05:30");
    let out = normalize_due_date(task_due("2024-13-40T99:99:99"), "garbage in", r);
    assert_eq!(out.due_date, None);
    assert_eq!(out.title, "Review the docs");
}

#[test]
fn one_bad_record_never_aborts_the_batch() {
    let r = reference("2024-06-19T15:00:00+05:30");
    let batch = vec![
        task_due("wednesday"),
        task_due("2024-13-40T99:99:99"),
        task_due("2024-06-20T14:00:00"),
    ];
    let out = normalize_batch(batch, "three tasks from standup", r);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].due_date.as_deref(), Some("Wednesday"));
    assert_eq!(out[1].due_date, None);
    assert_eq!(out[2].due_date.as_deref(), Some("2024-06-20T14:00:00+05:30"));
}
