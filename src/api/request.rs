//! Request types for the shift rate engine API.
//!
//! `POST /preview` takes a [`RateInputs`](crate::models::RateInputs) body
//! directly. This module defines the body for `POST /payroll-runs`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HourBuckets, PayPeriod, RateSchedule, WorkerTimesheet};
use crate::payroll::PayrollRunInput;

/// Request body for `POST /payroll-runs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRunRequest {
    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Last day of the pay period.
    pub period_end: NaiveDate,
    /// Optional timezone label; the configured default applies otherwise.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Workers included in the run.
    pub workers: Vec<WorkerRequest>,
}

/// One worker in a payroll run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRequest {
    /// The worker's identifier.
    pub worker_id: String,
    /// Rate card for the period.
    pub rates: RateSchedule,
    /// Hours per bucket from the weekly rollup.
    pub rollup: HourBuckets,
}

impl From<WorkerRequest> for WorkerTimesheet {
    fn from(req: WorkerRequest) -> Self {
        WorkerTimesheet {
            worker_id: req.worker_id,
            rates: req.rates,
            rollup: req.rollup,
        }
    }
}

impl From<PayrollRunRequest> for PayrollRunInput {
    fn from(req: PayrollRunRequest) -> Self {
        PayrollRunInput {
            period: PayPeriod {
                start_date: req.period_start,
                end_date: req.period_end,
            },
            timezone: req.timezone,
            workers: req.workers.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN_JSON: &str = r#"{
        "periodStart": "2026-01-05",
        "periodEnd": "2026-01-11",
        "workers": [
            {
                "workerId": "emp_001",
                "rates": {
                    "basePayRate": 25.0,
                    "baseBillRate": 45.0,
                    "otBillMultiplier": 1.5,
                    "sdPayDeltaRate": 3.0,
                    "sdBillDeltaRate": 5.0
                },
                "rollup": {
                    "regHours": 40,
                    "otHours": 8,
                    "dtHours": 4,
                    "regSdHours": 16,
                    "otSdHours": 4,
                    "dtSdHours": 2
                }
            }
        ]
    }"#;

    #[test]
    fn test_deserialize_payroll_run_request() {
        let request: PayrollRunRequest = serde_json::from_str(RUN_JSON).unwrap();

        assert_eq!(request.period_start, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert!(request.timezone.is_none());
        assert_eq!(request.workers.len(), 1);
        assert_eq!(request.workers[0].worker_id, "emp_001");
        assert_eq!(request.workers[0].rollup.reg_sd_hours, 16.0);
    }

    #[test]
    fn test_conversion_to_run_input() {
        let request: PayrollRunRequest = serde_json::from_str(RUN_JSON).unwrap();
        let input: PayrollRunInput = request.into();

        assert_eq!(input.period.start_date, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(input.period.end_date, NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
        assert_eq!(input.workers[0].worker_id, "emp_001");
        assert_eq!(input.workers[0].rates.sd_bill_delta_rate, 5.0);
    }

    #[test]
    fn test_missing_rollup_hours_rejected() {
        let json = RUN_JSON.replace("\"dtSdHours\": 2", "\"unused\": 0");
        let err = serde_json::from_str::<PayrollRunRequest>(&json).unwrap_err();

        assert!(err.to_string().contains("missing field `dtSdHours`"));
    }
}
