//! Clock time model.
//!
//! A [`ClockTime`] is a time of day expressed as fractional hours, so
//! `08:30` is `8.5`. Values built through [`ClockTime::from_hours`] are
//! always reduced into `[0, 24)`.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// Hours in one calendar day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// A time of day in fractional hours.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// let time = ClockTime::from_hm(20, 30);
/// assert_eq!(time.hours(), Decimal::new(205, 1));
/// assert_eq!(time.to_string(), "20:30");
///
/// // Values wrap into a single day
/// assert_eq!(ClockTime::from_hours(Decimal::from(26)).hours(), Decimal::from(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClockTime(Decimal);

impl ClockTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime(Decimal::ZERO);

    /// Creates a clock time from an hour count, reduced modulo 24.
    pub fn from_hours(hours: Decimal) -> Self {
        Self(wrap_hours(hours).normalize())
    }

    /// Creates a clock time from an hour count without reducing it.
    ///
    /// Only the plain integer timesheet format produces these; `"25"` stays
    /// `25.0` and reaches the shift rules as is.
    pub(crate) fn unreduced(hours: Decimal) -> Self {
        Self(hours.normalize())
    }

    /// Creates a clock time from hour and minute components.
    pub fn from_hm(hour: i64, minute: i64) -> Self {
        Self::from_hours(Decimal::from(hour) + Decimal::from(minute) / MINUTES_PER_HOUR)
    }

    /// Returns the time as fractional hours.
    pub fn hours(self) -> Decimal {
        self.0
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        let minutes = Decimal::from(time.minute()) + Decimal::from(time.second()) / MINUTES_PER_HOUR;
        Self::from_hours(Decimal::from(time.hour()) + minutes / MINUTES_PER_HOUR)
    }
}

impl fmt::Display for ClockTime {
    /// Formats as zero-padded `HH:MM`, truncating seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrapped = wrap_hours(self.0);
        let hour = wrapped.floor();
        // Repeating sixtieths such as 20/60 sit a hair below the whole minute.
        let minute = ((wrapped - hour) * MINUTES_PER_HOUR).round_dp(6).floor();

        let mut hour = hour.to_u32().unwrap_or_default();
        let mut minute = minute.to_u32().unwrap_or_default();
        if minute >= 60 {
            minute -= 60;
            hour = (hour + 1) % 24;
        }

        write!(f, "{:02}:{:02}", hour, minute)
    }
}

/// Reduces an hour count into `[0, 24)`.
fn wrap_hours(hours: Decimal) -> Decimal {
    let remainder = hours % HOURS_PER_DAY;
    if remainder < Decimal::ZERO {
        remainder + HOURS_PER_DAY
    } else {
        remainder
    }
}
