//! Row and totals builder.
//!
//! Turns one [`RateInputs`] record into the six ordered [`PreviewRow`]s and
//! their totals. The same result feeds the interactive preview and the
//! payroll run snapshot.

use super::{billing_multiplier, effective_rate, payroll_multiplier, round2};
use crate::models::{Bucket, PreviewResult, PreviewRow, RateInputs};

/// Computes pay and bill rows for every bucket, plus totals.
///
/// Rounding happens at three points and all of them are observable:
/// each effective rate, each row amount, and each total. Totals are sums
/// of the already-rounded row values, rounded again, never recomputed from
/// unrounded products.
///
/// Inputs are not validated. NaN and negative values propagate into the
/// affected rows and totals.
///
/// # Example
///
/// ```
/// use shift_rate_engine::calculation::compute_preview_rows;
/// use shift_rate_engine::models::RateInputs;
///
/// let result = compute_preview_rows(&RateInputs {
///     base_pay_rate: 25.0,
///     base_bill_rate: 45.0,
///     ot_bill_multiplier: 1.5,
///     sd_pay_delta_rate: 3.0,
///     sd_bill_delta_rate: 5.0,
///     reg_hours: 40.0,
///     ot_hours: 8.0,
///     dt_hours: 4.0,
///     reg_sd_hours: 16.0,
///     ot_sd_hours: 4.0,
///     dt_sd_hours: 2.0,
/// });
///
/// assert_eq!(result.total_hours, 74.0);
/// assert_eq!(result.total_pay, 2228.0);
/// assert_eq!(result.total_bill, 4000.0);
/// ```
pub fn compute_preview_rows(input: &RateInputs) -> PreviewResult {
    let rows: Vec<PreviewRow> = Bucket::ORDER
        .into_iter()
        .map(|bucket| build_row(input, bucket))
        .collect();

    let total_hours = round2(rows.iter().map(|r| r.hours).sum::<f64>());
    let total_pay = round2(rows.iter().map(|r| r.pay_amount).sum::<f64>());
    let total_bill = round2(rows.iter().map(|r| r.bill_amount).sum::<f64>());

    PreviewResult {
        rows,
        total_hours,
        total_pay,
        total_bill,
    }
}

fn build_row(input: &RateInputs, bucket: Bucket) -> PreviewRow {
    let hours = input.hours_for(bucket);
    let is_sd = bucket.is_shift_differential();

    let pay_multiplier = payroll_multiplier(bucket.hour_type());
    let bill_multiplier = billing_multiplier(bucket.hour_type(), input.ot_bill_multiplier);
    let effective_pay_rate = effective_rate(
        input.base_pay_rate,
        input.sd_pay_delta_rate,
        pay_multiplier,
        is_sd,
    );
    let effective_bill_rate = effective_rate(
        input.base_bill_rate,
        input.sd_bill_delta_rate,
        bill_multiplier,
        is_sd,
    );

    PreviewRow {
        bucket,
        hours,
        pay_multiplier,
        bill_multiplier,
        effective_pay_rate,
        effective_bill_rate,
        pay_amount: round2(effective_pay_rate * hours),
        bill_amount: round2(effective_bill_rate * hours),
    }
}
