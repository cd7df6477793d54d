//! Day/night shift classification.
//!
//! A shift is a night shift when the person clocks in at 20:00 or later, or
//! when the shift wraps past midnight having started before 08:00. Every
//! other shift is a day shift.

use rust_decimal::Decimal;

use crate::models::{ClockTime, ShiftKind};

/// Clock-in hour from which a shift counts as a night shift.
pub const NIGHT_SHIFT_START_HOUR: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Wrapped shifts starting before this hour also count as night shifts.
pub const EARLY_MORNING_CUTOFF_HOUR: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Returns true if the start/end pair is a night shift.
///
/// A missing start or end is never a night shift.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::is_night_shift;
/// use attendance_engine::models::ClockTime;
///
/// let start = Some(ClockTime::from_hm(20, 0));
/// let end = Some(ClockTime::from_hm(8, 0));
/// assert!(is_night_shift(start, end));
///
/// // Wrapping past midnight alone does not make a night shift
/// let start = Some(ClockTime::from_hm(19, 0));
/// let end = Some(ClockTime::from_hm(2, 0));
/// assert!(!is_night_shift(start, end));
///
/// assert!(!is_night_shift(None, end));
/// ```
pub fn is_night_shift(start: Option<ClockTime>, end: Option<ClockTime>) -> bool {
    let (Some(start), Some(end)) = (start, end) else {
        return false;
    };

    let start = start.hours();
    let end = end.hours();

    if start >= NIGHT_SHIFT_START_HOUR {
        return true;
    }

    end < start && start < EARLY_MORNING_CUTOFF_HOUR
}

/// Classifies a start/end pair as [`ShiftKind::Day`] or [`ShiftKind::Night`].
///
/// Returns [`ShiftKind::Invalid`] if either time is missing.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::classify_shift;
/// use attendance_engine::models::{ClockTime, ShiftKind};
///
/// let start = Some(ClockTime::from_hm(8, 0));
/// let end = Some(ClockTime::from_hm(17, 0));
/// assert_eq!(classify_shift(start, end), ShiftKind::Day);
/// assert_eq!(classify_shift(start, None), ShiftKind::Invalid);
/// ```
pub fn classify_shift(start: Option<ClockTime>, end: Option<ClockTime>) -> ShiftKind {
    if start.is_none() || end.is_none() {
        return ShiftKind::Invalid;
    }

    if is_night_shift(start, end) {
        ShiftKind::Night
    } else {
        ShiftKind::Day
    }
}
