//! Timesheet time parsing and formatting.
//!
//! Timesheet cells arrive as strings in one of three shapes:
//! - `HH:MM`, e.g. `"08:30"`
//! - a spreadsheet time serial, a fraction of a day such as `"0.375"`
//! - a plain hour count such as `"8"`
//!
//! Anything else parses to `None`. Parsing never fails loudly; callers decide
//! what an absent time means.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{ClockTime, HOURS_PER_DAY};

/// Cell contents that spreadsheet readers use for an empty cell.
const NULL_LIKE: [&str; 3] = ["nan", "none", "null"];

/// Parses a raw timesheet cell into a [`ClockTime`].
///
/// `HH:MM` and fractional-day values are reduced into `[0, 24)`. Plain
/// integer hours are used as is, so `"25"` yields `25.0`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::parse_clock_time;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let time = parse_clock_time("07:30").unwrap();
/// assert_eq!(time.hours(), Decimal::from_str("7.5").unwrap());
///
/// // Spreadsheet serial: 0.875 of a day is 21:00
/// let time = parse_clock_time("0.875").unwrap();
/// assert_eq!(time.hours(), Decimal::from(21));
///
/// assert!(parse_clock_time("").is_none());
/// assert!(parse_clock_time("8:30:00").is_none());
/// ```
pub fn parse_clock_time(raw: &str) -> Option<ClockTime> {
    let raw = raw.trim();
    if raw.is_empty() || NULL_LIKE.iter().any(|null| raw.eq_ignore_ascii_case(null)) {
        return None;
    }

    if raw.contains(':') {
        return parse_hour_minute(raw);
    }

    if is_fractional_day(raw) {
        return parse_fractional_day(raw);
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return Decimal::from_str(raw).ok().map(ClockTime::unreduced);
    }

    None
}

/// Formats a parsed time as `HH:MM`, or an empty string when absent.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{format_clock_time, parse_clock_time};
///
/// assert_eq!(format_clock_time(parse_clock_time("8:05")), "08:05");
/// assert_eq!(format_clock_time(None), "");
/// ```
pub fn format_clock_time(time: Option<ClockTime>) -> String {
    time.map(|t| t.to_string()).unwrap_or_default()
}

fn parse_hour_minute(raw: &str) -> Option<ClockTime> {
    let mut parts = raw.split(':');
    let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let hour: i64 = hour.trim().parse().ok()?;
    let minute: i64 = minute.trim().parse().ok()?;
    Some(ClockTime::from_hm(hour, minute))
}

/// Digits with exactly one decimal point, e.g. `0.375` or `.5`.
fn is_fractional_day(raw: &str) -> bool {
    let digits = raw.bytes().filter(u8::is_ascii_digit).count();
    let points = raw.bytes().filter(|&b| b == b'.').count();
    points == 1 && digits > 0 && digits + points == raw.len()
}

fn parse_fractional_day(raw: &str) -> Option<ClockTime> {
    let normalized = match (raw.strip_prefix('.'), raw.strip_suffix('.')) {
        (Some(fraction), _) => format!("0.{fraction}"),
        (_, Some(whole)) => whole.to_string(),
        _ => raw.to_string(),
    };

    let days = Decimal::from_str(&normalized).ok()?;
    Some(ClockTime::from_hours(days.checked_mul(HOURS_PER_DAY)?))
}
