//! Shift classification results.
//!
//! This module defines [`ShiftKind`] and [`ShiftRecord`], the output of running
//! one start/end pair through the shift rules.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::ClockTime;

/// Classification of a single shift.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ShiftKind;
///
/// assert_eq!(ShiftKind::Night.to_string(), "Night");
/// assert!(ShiftKind::Night.is_night());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    /// Day shift - midday window deductions apply.
    Day,
    /// Night shift - flat rest break deduction, allowance eligible.
    Night,
    /// Start or end time could not be parsed.
    Invalid,
}

impl ShiftKind {
    /// Returns true for [`ShiftKind::Night`].
    pub fn is_night(self) -> bool {
        matches!(self, ShiftKind::Night)
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftKind::Day => write!(f, "Day"),
            ShiftKind::Night => write!(f, "Night"),
            ShiftKind::Invalid => write!(f, "Invalid"),
        }
    }
}

/// The result of classifying one start/end pair.
///
/// Hours are kept at full precision here; rounding for display happens when
/// the record is turned into a [`ProcessedAttendance`](super::ProcessedAttendance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftRecord {
    /// Day, night or invalid.
    pub shift_kind: ShiftKind,
    /// Parsed start time, if it could be parsed.
    pub start: Option<ClockTime>,
    /// Parsed end time, if it could be parsed.
    pub end: Option<ClockTime>,
    /// Elapsed time between start and end, across midnight if needed.
    pub total_hours: Decimal,
    /// Break time taken off `total_hours`.
    pub deduction: Decimal,
    /// Total hours after the break deduction, never negative.
    pub effective_hours: Decimal,
    /// Night allowance earned by this shift.
    pub allowance_amount: Decimal,
}

impl ShiftRecord {
    /// The record produced when either time is missing or unparsable.
    pub fn invalid(start: Option<ClockTime>, end: Option<ClockTime>) -> Self {
        Self {
            shift_kind: ShiftKind::Invalid,
            start,
            end,
            total_hours: Decimal::ZERO,
            deduction: Decimal::ZERO,
            effective_hours: Decimal::ZERO,
            allowance_amount: Decimal::ZERO,
        }
    }

    /// Returns true if the shift was classified as a night shift.
    pub fn is_night_shift(&self) -> bool {
        self.shift_kind.is_night()
    }
}
