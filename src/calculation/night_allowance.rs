//! Night shift allowance.
//!
//! A fixed allowance is paid for a night shift whose effective hours reach
//! the policy minimum. There is no partial allowance.

use rust_decimal::Decimal;

use crate::config::AllowancePolicy;
use crate::models::ShiftKind;

/// Default allowance paid per qualifying night shift.
pub const NIGHT_ALLOWANCE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Default minimum effective hours for a night shift to qualify.
pub const NIGHT_ALLOWANCE_MIN_HOURS: Decimal = Decimal::from_parts(115, 0, 0, false, 1);

/// Calculates the night allowance for one shift.
///
/// # Arguments
///
/// * `effective_hours` - Hours after the night rest break
/// * `shift_kind` - Only [`ShiftKind::Night`] can qualify
/// * `policy` - Allowance rate and minimum hours
///
/// # Returns
///
/// `policy.rate` if the shift is a night shift with at least
/// `policy.min_effective_hours`, otherwise zero.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_night_allowance;
/// use attendance_engine::config::AllowancePolicy;
/// use attendance_engine::models::ShiftKind;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = AllowancePolicy::default();
///
/// let paid = calculate_night_allowance(Decimal::from_str("11.5").unwrap(), ShiftKind::Night, &policy);
/// assert_eq!(paid, Decimal::from(10));
///
/// let unpaid = calculate_night_allowance(Decimal::from_str("11.49").unwrap(), ShiftKind::Night, &policy);
/// assert_eq!(unpaid, Decimal::ZERO);
/// ```
pub fn calculate_night_allowance(
    effective_hours: Decimal,
    shift_kind: ShiftKind,
    policy: &AllowancePolicy,
) -> Decimal {
    if shift_kind.is_night() && effective_hours >= policy.min_effective_hours {
        policy.rate
    } else {
        Decimal::ZERO
    }
}
