//! Increment normalization and duration-string parsing.
//!
//! A duration string is one or more `<digits><unit>` segments, e.g. `"12h"`,
//! `"1day.500ms"` or `"1h30m"`. Anything between segments is a separator.
//! Segments are summed, so `"1h.1h"` is two hours. A leading `-` negates the
//! total.

use datespace_domain::constants::INCREMENT_FIELD;
use datespace_domain::{DateSpaceError, IncrementSpec, Result, UnitKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<digits><unit token>` segment of a duration string
    static ref SEGMENT_PATTERN: Regex = Regex::new(r"([0-9]+)([A-Za-z]+)")
        .expect("SEGMENT_PATTERN should compile - this is a bug");
}

/// Resolve an increment to a signed millisecond delta.
///
/// Numeric increments pass through unchanged, including fractional, zero,
/// negative and infinite values.
///
/// # Errors
///
/// - [`DateSpaceError::Type`] for a NaN increment
/// - [`DateSpaceError::Parse`] for an unparseable duration string
pub fn normalize_increment(spec: &IncrementSpec) -> Result<f64> {
    match spec {
        IncrementSpec::Millis(millis) if millis.is_nan() => Err(DateSpaceError::type_error(
            INCREMENT_FIELD,
            "increment must be a valid number",
        )),
        IncrementSpec::Millis(millis) => Ok(*millis),
        IncrementSpec::Text(text) => parse_increment(text).map(|millis| millis as f64),
    }
}

/// Parse a duration string into a signed millisecond total.
///
/// # Examples
///
/// ```
/// use datespace_core::normalize::parse_increment;
///
/// assert_eq!(parse_increment("12h").unwrap(), 43_200_000);
/// assert_eq!(parse_increment("1day.500ms").unwrap(), 86_400_500);
/// assert_eq!(parse_increment("-1d").unwrap(), -86_400_000);
/// assert!(parse_increment("soon").is_err());
/// ```
///
/// # Errors
///
/// Returns [`DateSpaceError::Parse`] when the string has no segments, a
/// segment names an unknown unit, or the total overflows `i64`.
pub fn parse_increment(text: &str) -> Result<i64> {
    let negative = text.starts_with('-');
    let mut segments = 0_usize;
    let mut total: i64 = 0;

    for captures in SEGMENT_PATTERN.captures_iter(text) {
        segments += 1;
        let digits = &captures[1];
        let token = &captures[2];

        let unit = UnitKind::from_token(token).ok_or_else(|| {
            DateSpaceError::parse(
                INCREMENT_FIELD,
                format!("unrecognized unit '{token}' in increment string '{text}'"),
            )
        })?;

        total = digits
            .parse::<i64>()
            .ok()
            .and_then(|count| count.checked_mul(unit.millis()))
            .and_then(|millis| {
                // Negative totals accumulate downward so `i64::MIN` stays reachable.
                if negative {
                    total.checked_sub(millis)
                } else {
                    total.checked_add(millis)
                }
            })
            .ok_or_else(|| {
                DateSpaceError::parse(
                    INCREMENT_FIELD,
                    format!("increment string '{text}' exceeds the representable range"),
                )
            })?;
    }

    if segments == 0 {
        return Err(DateSpaceError::parse(
            INCREMENT_FIELD,
            format!("unable to parse increment string '{text}'"),
        ));
    }

    Ok(total)
}
