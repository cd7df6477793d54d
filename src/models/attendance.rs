//! Attendance record models.
//!
//! [`AttendanceRecord`] is one sign-in/sign-out pair as collected from a dated
//! timesheet page. [`ProcessedAttendance`] is the same record after the shift
//! rules have run, in the shape the report writer consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftKind;

/// One raw sign-in/sign-out pair.
///
/// Time strings are kept exactly as read from the timesheet. A person may
/// have several records on the same date.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
///
/// let json = r#"{"date": "2026-03-02", "start_time": "20:00", "end_time": "08:00"}"#;
/// let record: AttendanceRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.person, "");
/// assert_eq!(record.start_time, "20:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Name of the person who signed in.
    #[serde(default)]
    pub person: String,
    /// Labor company the person works for.
    #[serde(default)]
    pub company: String,
    /// Calendar date of the timesheet page.
    pub date: NaiveDate,
    /// Raw sign-in time.
    #[serde(default)]
    pub start_time: String,
    /// Raw sign-out time.
    #[serde(default)]
    pub end_time: String,
}

/// A processed attendance record.
///
/// Identity fields and raw times are passed through unchanged; hours are
/// rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedAttendance {
    /// Name of the person, passed through.
    pub person: String,
    /// Labor company, passed through.
    pub company: String,
    /// Calendar date, passed through.
    pub date: NaiveDate,
    /// Raw sign-in time, passed through.
    pub start_time: String,
    /// Raw sign-out time, passed through.
    pub end_time: String,
    /// Parsed sign-in time as `HH:MM`, empty if unparsable.
    pub start_time_formatted: String,
    /// Parsed sign-out time as `HH:MM`, empty if unparsable.
    pub end_time_formatted: String,
    /// Day, night or invalid.
    pub shift_kind: ShiftKind,
    /// Elapsed hours, rounded to 2 dp.
    pub total_hours: Decimal,
    /// Hours after break deductions, rounded to 2 dp.
    pub effective_hours: Decimal,
    /// Whether the shift is a night shift.
    pub is_night_shift: bool,
    /// Night allowance earned.
    pub allowance_amount: Decimal,
}
