//! Attendance record processing.
//!
//! [`ShiftEngine`] runs one raw start/end pair through parsing,
//! classification, duration, deduction and allowance in that order. It holds
//! only the policy and is safe to share between threads.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};

use crate::config::{ConfigLoader, EngineConfig};
use crate::models::{AttendanceRecord, ProcessedAttendance, ShiftKind, ShiftRecord};

use super::effective_hours::calculate_effective_hours;
use super::night_allowance::calculate_night_allowance;
use super::shift_classifier::classify_shift;
use super::time_parser::{format_clock_time, parse_clock_time};

/// Decimal places hours are rounded to for display.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Stateless shift calculator configured with an allowance and break policy.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::ShiftEngine;
/// use attendance_engine::models::ShiftKind;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let engine = ShiftEngine::default();
/// let shift = engine.calculate_shift("20:00", "08:00");
///
/// assert_eq!(shift.shift_kind, ShiftKind::Night);
/// assert_eq!(shift.total_hours, Decimal::from(12));
/// assert_eq!(shift.effective_hours, Decimal::from_str("11.5").unwrap());
/// assert_eq!(shift.allowance_amount, Decimal::from(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftEngine {
    config: EngineConfig,
}

impl ShiftEngine {
    /// Creates an engine with the given policy.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates an engine from a loaded configuration.
    pub fn from_loader(loader: &ConfigLoader) -> Self {
        Self::new(loader.config().clone())
    }

    /// Returns the policy in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Calculates the shift for a raw start/end pair.
    ///
    /// If either string fails to parse the result is an invalid shift with
    /// zero hours and no allowance. This never fails.
    pub fn calculate_shift(&self, start_time: &str, end_time: &str) -> ShiftRecord {
        let start = parse_clock_time(start_time);
        let end = parse_clock_time(end_time);
        if start.is_none() || end.is_none() {
            return ShiftRecord::invalid(start, end);
        }

        let shift_kind = classify_shift(start, end);
        let hours = calculate_effective_hours(start, end, shift_kind, &self.config.shift);
        // Threshold is checked against the hours the record displays
        let allowance_amount = calculate_night_allowance(
            round_hours(hours.effective_hours),
            shift_kind,
            &self.config.night_allowance,
        );

        ShiftRecord {
            shift_kind,
            start,
            end,
            total_hours: hours.total_hours,
            deduction: hours.deduction,
            effective_hours: hours.effective_hours,
            allowance_amount,
        }
    }

    /// Processes one attendance record.
    ///
    /// Person, company, date and the raw time strings are passed through
    /// unchanged. Hours are rounded to two decimal places.
    pub fn process_record(&self, record: &AttendanceRecord) -> ProcessedAttendance {
        let shift = self.calculate_shift(&record.start_time, &record.end_time);
        log_shift(record, &shift);

        ProcessedAttendance {
            person: record.person.clone(),
            company: record.company.clone(),
            date: record.date,
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            start_time_formatted: format_clock_time(shift.start),
            end_time_formatted: format_clock_time(shift.end),
            shift_kind: shift.shift_kind,
            total_hours: round_hours(shift.total_hours),
            effective_hours: round_hours(shift.effective_hours),
            is_night_shift: shift.is_night_shift(),
            allowance_amount: shift.allowance_amount,
        }
    }

    /// Processes records in input order.
    pub fn process_batch(&self, records: &[AttendanceRecord]) -> Vec<ProcessedAttendance> {
        let processed: Vec<ProcessedAttendance> =
            records.iter().map(|r| self.process_record(r)).collect();

        let invalid = processed
            .iter()
            .filter(|p| p.shift_kind == ShiftKind::Invalid)
            .count();
        info!(
            records = processed.len(),
            invalid,
            "Processed attendance batch"
        );
        processed
    }
}

/// Rounds hours for display, halves away from zero.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

fn log_shift(record: &AttendanceRecord, shift: &ShiftRecord) {
    if shift.start.is_none() || shift.end.is_none() {
        warn!(
            person = %record.person,
            company = %record.company,
            date = %record.date,
            start_time = %record.start_time,
            end_time = %record.end_time,
            "Unparsable attendance time, shift marked invalid"
        );
        return;
    }

    debug!(
        person = %record.person,
        date = %record.date,
        shift_kind = %shift.shift_kind,
        total_hours = %shift.total_hours,
        effective_hours = %shift.effective_hours,
        allowance = %shift.allowance_amount,
        "Calculated shift"
    );
}
