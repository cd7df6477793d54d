//! Effective hours after break deductions.
//!
//! Night shifts lose a flat rest break. Day shifts lose time according to how
//! they overlap the 11:00-17:00 midday window, which is presumed to contain a
//! meal break. Day rules are checked in a fixed order and the first match
//! wins:
//!
//! | # | Condition                          | Deduction |
//! |---|------------------------------------|-----------|
//! | 1 | start > 17:00                      | 0         |
//! | 2 | end <= 11:00                       | 0         |
//! | 3 | 11:00 < start <= 17:00             | 0.5h      |
//! | 4 | end <= 17:00 and start <= 11:00    | 0.5h      |
//! | 5 | start <= 11:00 and end >= 17:00    | 1h        |
//! | 6 | otherwise                          | 0         |

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::ShiftPolicy;
use crate::models::{ClockTime, ShiftKind};

use super::total_hours::calculate_total_hours;

/// Start of the midday meal window.
pub const MIDDAY_WINDOW_START: Decimal = Decimal::from_parts(11, 0, 0, false, 0);

/// End of the midday meal window.
pub const MIDDAY_WINDOW_END: Decimal = Decimal::from_parts(17, 0, 0, false, 0);

/// Deduction for a day shift that partly overlaps the midday window.
pub const PARTIAL_WINDOW_DEDUCTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Deduction for a day shift that spans the whole midday window.
pub const FULL_WINDOW_DEDUCTION: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Default flat rest break taken off every night shift.
pub const NIGHT_BREAK_DEDUCTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The deduction rule that was applied to a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionRule {
    /// Day rule 1: clock-in after the midday window.
    StartsAfterWindow,
    /// Day rule 2: clock-out before or at the start of the midday window.
    EndsBeforeWindow,
    /// Day rule 3: clock-in inside the midday window.
    StartsInWindow,
    /// Day rule 4: clock-in before the window, clock-out inside it.
    EndsInWindow,
    /// Day rule 5: shift covers the whole midday window.
    SpansWindow,
    /// Day rule 6: no other day rule matched.
    Unmatched,
    /// Flat night shift rest break.
    NightBreak,
    /// Invalid shift; nothing to deduct from.
    NotApplicable,
}

/// Total and effective hours of one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveHours {
    /// Elapsed hours before deductions.
    pub total_hours: Decimal,
    /// Hours deducted under `rule`.
    pub deduction: Decimal,
    /// `total_hours - deduction`, floored at zero.
    pub effective_hours: Decimal,
    /// The rule that produced `deduction`.
    pub rule: DeductionRule,
}

impl EffectiveHours {
    fn zero() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            deduction: Decimal::ZERO,
            effective_hours: Decimal::ZERO,
            rule: DeductionRule::NotApplicable,
        }
    }
}

/// Selects the day shift deduction rule for a start/end pair.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{select_day_rule, DeductionRule};
/// use attendance_engine::models::ClockTime;
///
/// // 12:00-18:00 starts inside the window, so rule 3 wins over rule 5
/// let rule = select_day_rule(ClockTime::from_hm(12, 0), ClockTime::from_hm(18, 0));
/// assert_eq!(rule, DeductionRule::StartsInWindow);
/// ```
pub fn select_day_rule(start: ClockTime, end: ClockTime) -> DeductionRule {
    let start = start.hours();
    let end = end.hours();

    if start > MIDDAY_WINDOW_END {
        DeductionRule::StartsAfterWindow
    } else if end <= MIDDAY_WINDOW_START {
        DeductionRule::EndsBeforeWindow
    } else if start > MIDDAY_WINDOW_START && start <= MIDDAY_WINDOW_END {
        DeductionRule::StartsInWindow
    } else if end <= MIDDAY_WINDOW_END && start <= MIDDAY_WINDOW_START {
        DeductionRule::EndsInWindow
    } else if start <= MIDDAY_WINDOW_START && end >= MIDDAY_WINDOW_END {
        DeductionRule::SpansWindow
    } else {
        DeductionRule::Unmatched
    }
}

/// Calculates effective hours for a classified shift.
///
/// # Arguments
///
/// * `start` - Parsed clock-in time
/// * `end` - Parsed clock-out time
/// * `shift_kind` - Classification from [`classify_shift`](super::classify_shift)
/// * `policy` - Supplies the night shift rest break
///
/// # Returns
///
/// An [`EffectiveHours`] with the total, the deduction and the rule applied.
/// Invalid shifts and missing times give all zeros.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{calculate_effective_hours, DeductionRule};
/// use attendance_engine::config::ShiftPolicy;
/// use attendance_engine::models::{ClockTime, ShiftKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_effective_hours(
///     Some(ClockTime::from_hm(8, 0)),
///     Some(ClockTime::from_hm(17, 0)),
///     ShiftKind::Day,
///     &ShiftPolicy::default(),
/// );
///
/// // end == 17:00 matches rule 4 before rule 5
/// assert_eq!(result.rule, DeductionRule::EndsInWindow);
/// assert_eq!(result.effective_hours, Decimal::from_str("8.5").unwrap());
/// ```
pub fn calculate_effective_hours(
    start: Option<ClockTime>,
    end: Option<ClockTime>,
    shift_kind: ShiftKind,
    policy: &ShiftPolicy,
) -> EffectiveHours {
    let (Some(start_time), Some(end_time)) = (start, end) else {
        return EffectiveHours::zero();
    };

    let (rule, deduction) = match shift_kind {
        ShiftKind::Invalid => return EffectiveHours::zero(),
        ShiftKind::Night => (DeductionRule::NightBreak, policy.night_break_deduction),
        ShiftKind::Day => {
            let rule = select_day_rule(start_time, end_time);
            let deduction = match rule {
                DeductionRule::StartsInWindow | DeductionRule::EndsInWindow => {
                    PARTIAL_WINDOW_DEDUCTION
                }
                DeductionRule::SpansWindow => FULL_WINDOW_DEDUCTION,
                _ => Decimal::ZERO,
            };
            (rule, deduction)
        }
    };

    let total_hours = calculate_total_hours(start, end);
    let effective_hours = (total_hours - deduction).max(Decimal::ZERO);

    EffectiveHours {
        total_hours,
        deduction,
        effective_hours,
        rule,
    }
}
