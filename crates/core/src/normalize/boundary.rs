//! Start/stop boundary normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use datespace_domain::constants::{JS_TIMESTAMP_DIGITS, MILLIS_PER_SECOND, UNIX_TIMESTAMP_DIGITS};
use datespace_domain::{DateSpaceError, Result, TimeBoundary};

/// Naive layouts, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Offset layouts not covered by RFC 3339: minute precision, basic `+hhmm`
/// and hour-only `+hh` offsets. A trailing `Z` is rewritten to `+00:00` first.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve a boundary to epoch milliseconds.
///
/// `field` names the boundary (`"start"` or `"stop"`) in error messages.
///
/// # Errors
///
/// - [`DateSpaceError::Parse`] when a date string cannot be parsed
/// - [`DateSpaceError::Validation`] when a numeric timestamp has neither 10
///   nor 13 digits
pub fn normalize_boundary(value: &TimeBoundary, field: &str) -> Result<i64> {
    match value {
        TimeBoundary::Text(text) => parse_date(text).ok_or_else(|| {
            DateSpaceError::parse(field, format!("unable to parse {field} date '{text}'"))
        }),
        TimeBoundary::Timestamp(timestamp) => normalize_timestamp(*timestamp, field),
        TimeBoundary::DateTime(datetime) => Ok(datetime.timestamp_millis()),
    }
}

fn normalize_timestamp(timestamp: i64, field: &str) -> Result<i64> {
    let digits = timestamp.to_string();
    let is_plain = digits.bytes().all(|byte| byte.is_ascii_digit());

    match digits.len() {
        UNIX_TIMESTAMP_DIGITS if is_plain => Ok(timestamp * MILLIS_PER_SECOND),
        JS_TIMESTAMP_DIGITS if is_plain => Ok(timestamp),
        _ => Err(DateSpaceError::validation(
            field,
            format!(
                "numeric {field} date must be either a Unix (10-digit) or JavaScript (13-digit) timestamp, got {timestamp}"
            ),
        )),
    }
}

fn parse_date(text: &str) -> Option<i64> {
    let text = text.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.timestamp_millis());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(text) {
        return Some(datetime.timestamp_millis());
    }
    if let Some(millis) = parse_offset_datetime(text) {
        return Some(millis);
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    // Year-month resolves to the first of the month.
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(&format!("{text}-01"), DATE_FORMAT))
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

fn parse_offset_datetime(text: &str) -> Option<i64> {
    let zulu;
    let text = match text.strip_suffix(['Z', 'z']) {
        Some(body) => {
            zulu = format!("{body}+00:00");
            zulu.as_str()
        }
        None => text,
    };

    OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.timestamp_millis())
}
