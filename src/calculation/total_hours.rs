//! Elapsed shift duration.

use rust_decimal::Decimal;

use crate::models::{ClockTime, HOURS_PER_DAY};

/// Calculates the elapsed hours between clock-in and clock-out.
///
/// An end time earlier than the start time means the shift ran past
/// midnight, giving `(24 - start) + end`. A missing time gives zero.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_total_hours;
/// use attendance_engine::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// let start = Some(ClockTime::from_hm(22, 0));
/// let end = Some(ClockTime::from_hm(6, 0));
/// assert_eq!(calculate_total_hours(start, end), Decimal::from(8));
///
/// assert_eq!(calculate_total_hours(None, end), Decimal::ZERO);
/// ```
pub fn calculate_total_hours(start: Option<ClockTime>, end: Option<ClockTime>) -> Decimal {
    let (Some(start), Some(end)) = (start, end) else {
        return Decimal::ZERO;
    };

    let start = start.hours();
    let end = end.hours();

    if end < start {
        (HOURS_PER_DAY - start) + end
    } else {
        end - start
    }
}
