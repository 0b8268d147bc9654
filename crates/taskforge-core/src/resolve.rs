//! Timestamp resolver: turns a timestamp-like candidate from the model into a
//! fully qualified instant in the deployment's fixed timezone.
//!
//! The year policy: a four-digit year literally present in the source text is
//! trusted as-is (even if past); otherwise the year is inferred from the
//! reference instant and bumped forward by one when the result would land in
//! the past — unless the source text says "today". Time-of-day is preserved
//! bit-for-bit; the resolver never invents a default time (the extraction
//! contract guarantees 23:59:59 is already present when no time was given).

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;

use crate::error::{NormalizeError, NormalizeResult};

/// Canonical timezone of the deployment (Asia/Kolkata). All emitted instants
/// carry this literal offset regardless of where the process runs.
pub const TZ_NAME: &str = "Asia/Kolkata";

/// Literal offset suffix appended to every resolved instant.
pub const TZ_OFFSET_SUFFIX: &str = "+05:30";

const TZ_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

static TZ_OFFSET: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(TZ_OFFSET_SECS).expect("+05:30 is a valid offset"));

/// The fixed deployment timezone as a chrono offset.
pub fn tz_offset() -> FixedOffset {
    *TZ_OFFSET
}

/// "Now" in the fixed timezone. Callers capture this ONCE per extraction call
/// and thread it through prompt assembly and normalization so the two never
/// diverge within a call.
pub fn reference_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&tz_offset())
}

/// Resolve a timestamp-like candidate against the source text and reference
/// instant, producing `YYYY-MM-DDTHH:MM:SS+05:30`.
///
/// Fails with [`NormalizeError::InvalidDate`] when the candidate does not
/// parse; the caller degrades the field to `None` and moves on.
pub fn resolve_timestamp(
    candidate: &str,
    source_text: &str,
    reference: DateTime<FixedOffset>,
) -> NormalizeResult<String> {
    let head = candidate
        .get(..19)
        .ok_or_else(|| NormalizeError::InvalidDate(candidate.to_string()))?;
    let parsed = NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| NormalizeError::InvalidDate(candidate.to_string()))?;

    // Reference converted into the fixed timezone once, not per-field.
    let reference = reference.with_timezone(&tz_offset());
    let reference_wall = reference.naive_local();

    let year_is_explicit = source_text.contains(&parsed.year().to_string());

    let resolved = if year_is_explicit {
        // The user typed that year; trust it even if it is in the past.
        parsed
    } else {
        let mut shifted = with_year_clamped(parsed, reference_wall.year())?;
        let mentions_today = source_text.to_lowercase().contains("today");
        if shifted < reference_wall && !mentions_today {
            // A bare month/day means the next occurrence.
            shifted = with_year_clamped(shifted, reference_wall.year() + 1)?;
        }
        shifted
    };

    Ok(format_with_offset(resolved))
}

/// Format civil wall-clock fields with the literal fixed offset.
fn format_with_offset(instant: NaiveDateTime) -> String {
    format!("{}{}", instant.format("%Y-%m-%dT%H:%M:%S"), TZ_OFFSET_SUFFIX)
}

/// Substitute the year, clamping Feb 29 to Feb 28 when the target year is not
/// a leap year.
fn with_year_clamped(instant: NaiveDateTime, year: i32) -> NormalizeResult<NaiveDateTime> {
    if let Some(shifted) = instant.with_year(year) {
        return Ok(shifted);
    }
    NaiveDate::from_ymd_opt(year, instant.month(), 28)
        .map(|date| date.and_time(instant.time()))
        .ok_or_else(|| NormalizeError::InvalidDate(instant.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(iso: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(iso).unwrap()
    }

    #[test]
    fn feb_29_clamps_when_target_year_is_not_leap() {
        let result = resolve_timestamp(
            "2024-02-29T10:00:00",
            "party on feb 29",
            reference("2025-06-01T00:00:00+05:30"),
        )
        .unwrap();
        // 2025 substitution clamps to Feb 28; that is past the June reference,
        // so the year advances to 2026 (also non-leap, stays on the 28th).
        assert_eq!(result, "2026-02-28T10:00:00+05:30");
    }

    #[test]
    fn malformed_candidates_fail() {
        let r = reference("2025-01-01T00:00:00+05:30");
        assert!(resolve_timestamp("2024-13-40T99:99:99", "x", r).is_err());
        assert!(resolve_timestamp("not a date", "x", r).is_err());
        assert!(resolve_timestamp("2024-02-2", "x", r).is_err());
    }
}
