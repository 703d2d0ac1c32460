//! Payroll run models.
//!
//! A finalized payroll run is kept as an immutable JSON snapshot that embeds
//! each worker's [`PreviewResult`] verbatim next to the rates and rollup
//! hours it was computed from.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HourBuckets, PreviewResult, RateSchedule};
use crate::error::{EngineError, EngineResult};

/// One worker's entry in a payroll run request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerTimesheet {
    /// The worker's identifier in the host system.
    pub worker_id: String,
    /// The worker's rate card for the period.
    pub rates: RateSchedule,
    /// Hours per bucket from the weekly rollup.
    pub rollup: HourBuckets,
}

/// One worker's computed entry inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSnapshot {
    /// The worker's identifier in the host system.
    pub worker_id: String,
    /// Rates the preview was computed from.
    pub rates: RateSchedule,
    /// Rollup hours the preview was computed from.
    pub rollup: HourBuckets,
    /// The engine output, unchanged.
    pub preview: PreviewResult,
}

/// Run-wide totals, summed exactly from each worker's rounded totals.
///
/// # Example
///
/// ```
/// use shift_rate_engine::models::RunTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = RunTotals {
///     worker_count: 2,
///     total_hours: Decimal::from_str("80.00").unwrap(),
///     total_pay: Decimal::from_str("2000.00").unwrap(),
///     total_bill: Decimal::from_str("3600.00").unwrap(),
/// };
/// assert_eq!(totals.total_pay.to_string(), "2000.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTotals {
    /// Number of workers in the run.
    pub worker_count: usize,
    /// Total hours across workers.
    pub total_hours: Decimal,
    /// Total payroll cost across workers.
    pub total_pay: Decimal,
    /// Total customer billing across workers.
    pub total_bill: Decimal,
}

/// The audit document for a finalized payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRunSnapshot {
    /// Identifier of the run.
    pub run_id: Uuid,
    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Last day of the pay period.
    pub period_end: NaiveDate,
    /// Timezone label the period dates are expressed in.
    pub timezone: String,
    /// When the run was finalized.
    pub finalized_at: DateTime<Utc>,
    /// Version of the engine that produced the previews.
    pub engine_version: String,
    /// Per-worker entries, in request order.
    pub workers: Vec<WorkerSnapshot>,
    /// Run-wide totals.
    pub totals: RunTotals,
}

impl PayrollRunSnapshot {
    /// Serializes the snapshot into a storable record.
    pub fn to_record(&self) -> EngineResult<PayrollRunRecord> {
        let snapshot_json =
            serde_json::to_string(self).map_err(|e| EngineError::SnapshotError {
                message: e.to_string(),
            })?;

        Ok(PayrollRunRecord {
            run_id: self.run_id,
            period_start: self.period_start,
            period_end: self.period_end,
            timezone: self.timezone.clone(),
            snapshot_json,
        })
    }
}

/// A stored payroll run: lookup keys plus the opaque snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRunRecord {
    /// Identifier of the run.
    pub run_id: Uuid,
    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Last day of the pay period.
    pub period_end: NaiveDate,
    /// Timezone label.
    pub timezone: String,
    /// The serialized [`PayrollRunSnapshot`].
    pub snapshot_json: String,
}
