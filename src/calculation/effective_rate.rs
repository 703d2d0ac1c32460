//! Effective per-hour rate calculation.

use super::round2;

/// Computes the rounded per-hour rate for a bucket.
///
/// For shift-differential hours the delta is added to the base rate before
/// the multiplier is applied. Other hours never see the delta.
///
/// Called once with the pay rate pair and once with the bill rate pair for
/// every row.
///
/// # Examples
///
/// ```
/// use shift_rate_engine::calculation::effective_rate;
///
/// // (25.00 + 3.00) x 1.5
/// assert_eq!(effective_rate(25.0, 3.0, 1.5, true), 42.0);
/// // the delta is ignored without the flag
/// assert_eq!(effective_rate(25.0, 3.0, 1.5, false), 37.5);
/// ```
pub fn effective_rate(base_rate: f64, sd_delta_rate: f64, multiplier: f64, is_sd: bool) -> f64 {
    if is_sd {
        round2((base_rate + sd_delta_rate) * multiplier)
    } else {
        round2(base_rate * multiplier)
    }
}
