use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMATS};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a raw corpus timestamp and truncates it to its calendar date.
///
/// Accepts RFC 3339, the layouts in `TIMESTAMP_FORMATS`, a bare
/// `YYYY-MM-DD` date, or Unix epoch seconds written with 9 or 10 digits.
/// Timestamps carrying an offset keep the calendar date of that offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }

    for format in TIMESTAMP_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date_time.date());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    // Shorter or longer digit runs (e.g. `20210105`) are not epoch seconds
    if !(9..=10).contains(&raw.len()) || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    raw.parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .map(|date_time| date_time.date_naive())
}
