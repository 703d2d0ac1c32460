//! Payroll and billing multipliers.
//!
//! Payroll multipliers are fixed business constants and have no
//! configuration surface. Billing multipliers depend on the caller's
//! overtime billing multiplier, and the double-time billing multiplier is
//! always derived from it.

use super::round2;
use crate::models::HourType;

/// Payroll multiplier for regular hours.
pub const PAY_MULTIPLIER_REG: f64 = 1.0;

/// Payroll multiplier for overtime hours.
pub const PAY_MULTIPLIER_OT: f64 = 1.5;

/// Payroll multiplier for double-time hours.
pub const PAY_MULTIPLIER_DT: f64 = 2.0;

/// Billing multiplier for regular hours.
pub const BILL_MULTIPLIER_REG: f64 = 1.0;

/// Returns the payroll multiplier for an hour type.
///
/// # Example
///
/// ```
/// use shift_rate_engine::calculation::payroll_multiplier;
/// use shift_rate_engine::models::HourType;
///
/// assert_eq!(payroll_multiplier(HourType::Ot), 1.5);
/// ```
pub const fn payroll_multiplier(hour_type: HourType) -> f64 {
    match hour_type {
        HourType::Reg => PAY_MULTIPLIER_REG,
        HourType::Ot => PAY_MULTIPLIER_OT,
        HourType::Dt => PAY_MULTIPLIER_DT,
    }
}

/// Derives the double-time billing multiplier: `round2(ot * 4 / 3)`.
///
/// # Example
///
/// ```
/// use shift_rate_engine::calculation::billing_dt_multiplier;
///
/// assert_eq!(billing_dt_multiplier(1.5), 2.0);
/// assert_eq!(billing_dt_multiplier(1.4), 1.87);
/// ```
pub fn billing_dt_multiplier(ot_bill_multiplier: f64) -> f64 {
    round2(ot_bill_multiplier * 4.0 / 3.0)
}

/// Returns the billing multiplier for an hour type.
pub fn billing_multiplier(hour_type: HourType, ot_bill_multiplier: f64) -> f64 {
    match hour_type {
        HourType::Reg => BILL_MULTIPLIER_REG,
        HourType::Ot => ot_bill_multiplier,
        HourType::Dt => billing_dt_multiplier(ot_bill_multiplier),
    }
}
