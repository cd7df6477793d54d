//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod clock_time;
mod monthly_summary;
mod shift_record;

pub use attendance::{AttendanceRecord, ProcessedAttendance};
pub use clock_time::{ClockTime, HOURS_PER_DAY};
pub use monthly_summary::{CompanyMonthlySummary, DailyEntry, PersonMonthlySummary};
pub use shift_record::{ShiftKind, ShiftRecord};
