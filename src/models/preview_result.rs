//! Output of a rate computation.

use serde::{Deserialize, Serialize};

use super::Bucket;

/// A single bucket's computed rates and amounts.
///
/// # Example
///
/// ```
/// use shift_rate_engine::models::{Bucket, PreviewRow};
///
/// let row = PreviewRow {
///     bucket: Bucket::Ot,
///     hours: 8.0,
///     pay_multiplier: 1.5,
///     bill_multiplier: 1.5,
///     effective_pay_rate: 37.5,
///     effective_bill_rate: 67.5,
///     pay_amount: 300.0,
///     bill_amount: 540.0,
/// };
/// assert_eq!(row.bucket.label(), "OT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    /// Which bucket this row describes.
    pub bucket: Bucket,
    /// Hours for the bucket, exactly as supplied.
    pub hours: f64,
    /// The payroll multiplier applied.
    pub pay_multiplier: f64,
    /// The billing multiplier applied.
    pub bill_multiplier: f64,
    /// Pay rate per hour after delta and multiplier, rounded to cents.
    pub effective_pay_rate: f64,
    /// Bill rate per hour after delta and multiplier, rounded to cents.
    pub effective_bill_rate: f64,
    /// `effective_pay_rate * hours`, rounded to cents.
    pub pay_amount: f64,
    /// `effective_bill_rate * hours`, rounded to cents.
    pub bill_amount: f64,
}

/// The six rows of a computation plus their totals.
///
/// Rows always follow [`Bucket::ORDER`]. Totals are sums of the published
/// row values, each re-rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    /// One row per bucket, in fixed order.
    pub rows: Vec<PreviewRow>,
    /// Sum of row hours.
    pub total_hours: f64,
    /// Sum of row pay amounts.
    pub total_pay: f64,
    /// Sum of row bill amounts.
    pub total_bill: f64,
}

impl PreviewResult {
    /// Looks up the row for a bucket.
    pub fn row(&self, bucket: Bucket) -> Option<&PreviewRow> {
        self.rows.iter().find(|r| r.bucket == bucket)
    }

    /// Names the first total that overflowed to a non-finite value.
    ///
    /// A non-finite row always leaves its total non-finite, so checking the
    /// totals covers every row.
    pub fn non_finite_total(&self) -> Option<&'static str> {
        [
            ("totalHours", self.total_hours),
            ("totalPay", self.total_pay),
            ("totalBill", self.total_bill),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }
}
