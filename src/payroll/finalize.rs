//! Payroll run finalization.
//!
//! Validates a run request, computes each worker's preview with the engine
//! and assembles the snapshot that is stored as the run's audit record.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::compute_preview_rows;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    PayPeriod, PayrollRunSnapshot, RateInputs, RunTotals, WorkerSnapshot, WorkerTimesheet,
};

/// Version stamped into every snapshot.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed to finalize one payroll run.
#[derive(Debug, Clone)]
pub struct PayrollRunInput {
    /// The period the run covers.
    pub period: PayPeriod,
    /// Timezone label for the period. Falls back to the configured default
    /// when absent or blank.
    pub timezone: Option<String>,
    /// One entry per worker.
    pub workers: Vec<WorkerTimesheet>,
}

/// Finalizes a payroll run into an immutable snapshot.
///
/// Every worker is validated before any preview is computed, so a rejected
/// run produces no partial output.
///
/// # Errors
///
/// - `InvalidPayPeriod` when the period ends before it starts
/// - `EmptyPayrollRun` when no workers are supplied
/// - `InvalidWorker` for a blank or repeated worker id
/// - `InvalidRateInput` for a rate or hour value the engine must not see
/// - `NonFiniteAmount` if a worker total cannot be carried into run totals
/// - `RunTotalOverflow` if the sum across workers exceeds the decimal range
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use shift_rate_engine::models::{HourBuckets, PayPeriod, RateSchedule, WorkerTimesheet};
/// use shift_rate_engine::payroll::{PayrollRunInput, finalize_payroll_run};
/// use uuid::Uuid;
///
/// let input = PayrollRunInput {
///     period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
///     },
///     timezone: None,
///     workers: vec![WorkerTimesheet {
///         worker_id: "emp_001".to_string(),
///         rates: RateSchedule {
///             base_pay_rate: 20.0,
///             base_bill_rate: 32.0,
///             ot_bill_multiplier: 1.5,
///             sd_pay_delta_rate: 0.0,
///             sd_bill_delta_rate: 0.0,
///         },
///         rollup: HourBuckets {
///             reg_hours: 40.0,
///             ot_hours: 0.0,
///             dt_hours: 0.0,
///             reg_sd_hours: 0.0,
///             ot_sd_hours: 0.0,
///             dt_sd_hours: 0.0,
///         },
///     }],
/// };
///
/// let snapshot = finalize_payroll_run(input, "America/Chicago", Uuid::new_v4(), Utc::now())?;
/// assert_eq!(snapshot.timezone, "America/Chicago");
/// assert_eq!(snapshot.totals.total_pay.to_string(), "800.00");
/// # Ok::<(), shift_rate_engine::error::EngineError>(())
/// ```
pub fn finalize_payroll_run(
    input: PayrollRunInput,
    default_timezone: &str,
    run_id: Uuid,
    finalized_at: DateTime<Utc>,
) -> EngineResult<PayrollRunSnapshot> {
    input.period.validate()?;
    validate_workers(&input.workers)?;

    let timezone = input
        .timezone
        .filter(|tz| !tz.trim().is_empty())
        .unwrap_or_else(|| default_timezone.to_string());

    let workers: Vec<WorkerSnapshot> = input
        .workers
        .into_iter()
        .map(|worker| {
            let inputs = RateInputs::from_parts(&worker.rates, &worker.rollup);
            let preview = compute_preview_rows(&inputs);
            debug!(
                run_id = %run_id,
                worker_id = %worker.worker_id,
                total_pay = preview.total_pay,
                total_bill = preview.total_bill,
                "Computed worker preview"
            );
            WorkerSnapshot {
                worker_id: worker.worker_id,
                rates: worker.rates,
                rollup: worker.rollup,
                preview,
            }
        })
        .collect();

    let totals = run_totals(&workers)?;

    Ok(PayrollRunSnapshot {
        run_id,
        period_start: input.period.start_date,
        period_end: input.period.end_date,
        timezone,
        finalized_at,
        engine_version: ENGINE_VERSION.to_string(),
        workers,
        totals,
    })
}

fn validate_workers(workers: &[WorkerTimesheet]) -> EngineResult<()> {
    if workers.is_empty() {
        return Err(EngineError::EmptyPayrollRun);
    }

    let mut seen = HashSet::new();
    for worker in workers {
        if worker.worker_id.trim().is_empty() {
            return Err(EngineError::InvalidWorker {
                worker_id: worker.worker_id.clone(),
                message: "worker id must not be empty".to_string(),
            });
        }
        if !seen.insert(worker.worker_id.as_str()) {
            return Err(EngineError::InvalidWorker {
                worker_id: worker.worker_id.clone(),
                message: "worker appears more than once in the run".to_string(),
            });
        }
        worker.rates.validate()?;
        worker.rollup.validate()?;
    }
    Ok(())
}

fn run_totals(workers: &[WorkerSnapshot]) -> EngineResult<RunTotals> {
    let mut total_hours = cents(Decimal::ZERO);
    let mut total_pay = cents(Decimal::ZERO);
    let mut total_bill = cents(Decimal::ZERO);

    for worker in workers {
        let preview = &worker.preview;
        total_hours = add_total(
            total_hours,
            to_cents(preview.total_hours, &worker.worker_id, "totalHours")?,
            "totalHours",
        )?;
        total_pay = add_total(
            total_pay,
            to_cents(preview.total_pay, &worker.worker_id, "totalPay")?,
            "totalPay",
        )?;
        total_bill = add_total(
            total_bill,
            to_cents(preview.total_bill, &worker.worker_id, "totalBill")?,
            "totalBill",
        )?;
    }

    Ok(RunTotals {
        worker_count: workers.len(),
        total_hours,
        total_pay,
        total_bill,
    })
}

fn to_cents(value: f64, worker_id: &str, field: &str) -> EngineResult<Decimal> {
    Decimal::from_f64(value)
        .map(cents)
        .ok_or_else(|| EngineError::NonFiniteAmount {
            worker_id: worker_id.to_string(),
            field: field.to_string(),
        })
}

fn add_total(total: Decimal, amount: Decimal, field: &str) -> EngineResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| EngineError::RunTotalOverflow {
            field: field.to_string(),
        })
}

fn cents(mut amount: Decimal) -> Decimal {
    amount.rescale(2);
    amount
}
