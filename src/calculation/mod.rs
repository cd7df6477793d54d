//! Calculation logic for the attendance engine.
//!
//! This module contains the shift rules: time parsing and formatting,
//! day/night classification, elapsed duration with midnight rollover,
//! break deductions, the night allowance, the record processor that chains
//! them, and the monthly attendance statistics built from processed records.

mod effective_hours;
mod monthly_summary;
mod night_allowance;
mod record_processor;
mod shift_classifier;
mod time_parser;
mod total_hours;

pub use effective_hours::{
    DeductionRule, EffectiveHours, FULL_WINDOW_DEDUCTION, MIDDAY_WINDOW_END, MIDDAY_WINDOW_START,
    NIGHT_BREAK_DEDUCTION, PARTIAL_WINDOW_DEDUCTION, calculate_effective_hours, select_day_rule,
};
pub use monthly_summary::summarize_by_company;
pub use night_allowance::{
    NIGHT_ALLOWANCE_MIN_HOURS, NIGHT_ALLOWANCE_RATE, calculate_night_allowance,
};
pub use record_processor::{DISPLAY_DECIMAL_PLACES, ShiftEngine, round_hours};
pub use shift_classifier::{
    EARLY_MORNING_CUTOFF_HOUR, NIGHT_SHIFT_START_HOUR, classify_shift, is_night_shift,
};
pub use time_parser::{format_clock_time, parse_clock_time};
pub use total_hours::calculate_total_hours;
