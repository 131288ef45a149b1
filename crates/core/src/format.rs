//! Increment formatting
//!
//! Renders a millisecond count as a canonical duration string that
//! [`parse_increment`](crate::normalize::parse_increment) accepts.

use datespace_domain::UnitKind;

/// Format a millisecond count as a duration string, largest units first.
///
/// Units are the fixed-length ones from [`UnitKind`], so months and years are
/// calendar averages. Segments are joined with `.`.
///
/// # Examples
///
/// ```
/// use datespace_core::format::format_increment;
///
/// assert_eq!(format_increment(43_200_000), "12h");
/// assert_eq!(format_increment(86_400_500), "1d.500ms");
/// assert_eq!(format_increment(-90_000_000), "-1d.1h");
/// assert_eq!(format_increment(0), "0ms");
/// ```
pub fn format_increment(millis: i64) -> String {
    if millis == 0 {
        return format!("0{}", UnitKind::Millisecond.symbol());
    }

    let mut remaining = millis.unsigned_abs();
    let mut parts = Vec::new();

    for unit in UnitKind::ALL {
        let size = unit.millis().unsigned_abs();
        let count = remaining / size;
        if count > 0 {
            parts.push(format!("{count}{}", unit.symbol()));
            remaining %= size;
        }
    }

    let body = parts.join(".");
    if millis < 0 {
        format!("-{body}")
    } else {
        body
    }
}
