//! Configuration types for the attendance engine.
//!
//! This module contains the policy structures that are deserialized from
//! `policy.yaml`. Every field has a default equal to the fixed company
//! policy, so a partial file only overrides what it names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{NIGHT_ALLOWANCE_MIN_HOURS, NIGHT_ALLOWANCE_RATE, NIGHT_BREAK_DEDUCTION};

/// Night shift allowance policy.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AllowancePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = AllowancePolicy::default();
/// assert_eq!(policy.rate, Decimal::from(10));
/// assert_eq!(policy.min_effective_hours, Decimal::from_str("11.5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowancePolicy {
    /// Amount paid for one qualifying night shift.
    pub rate: Decimal,
    /// Minimum effective hours a night shift needs to qualify.
    pub min_effective_hours: Decimal,
}

impl Default for AllowancePolicy {
    fn default() -> Self {
        Self {
            rate: NIGHT_ALLOWANCE_RATE,
            min_effective_hours: NIGHT_ALLOWANCE_MIN_HOURS,
        }
    }
}

/// Break deduction policy for shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftPolicy {
    /// Flat rest break deducted from every night shift, in hours.
    pub night_break_deduction: Decimal,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            night_break_deduction: NIGHT_BREAK_DEDUCTION,
        }
    }
}

/// The complete engine configuration loaded from `policy.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Night allowance policy.
    pub night_allowance: AllowancePolicy,
    /// Shift deduction policy.
    pub shift: ShiftPolicy,
}
