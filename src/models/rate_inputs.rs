//! Caller-supplied inputs for one rate computation.
//!
//! [`RateInputs`] is the flat record the engine consumes. A host usually
//! assembles it from two sources: a worker's [`RateSchedule`] and the
//! [`HourBuckets`] produced by the weekly rollup.
//!
//! Every field is required. Nothing is defaulted, because a silently
//! defaulted rate or hour value changes financial output.

use serde::{Deserialize, Serialize};

use super::Bucket;
use crate::error::{EngineError, EngineResult};

/// The full input record for a single preview computation.
///
/// The engine does not validate this record. Hosts call
/// [`RateInputs::validate`] first and reject the request on error; without
/// that, degenerate values (NaN, negatives) flow through the arithmetic
/// unchanged.
///
/// # Example
///
/// ```
/// use shift_rate_engine::models::RateInputs;
///
/// let inputs = RateInputs {
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
/// };
/// assert!(inputs.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateInputs {
    /// Base payroll rate per hour.
    pub base_pay_rate: f64,
    /// Base billing rate per hour.
    pub base_bill_rate: f64,
    /// Billing multiplier for overtime hours.
    pub ot_bill_multiplier: f64,
    /// Per-hour amount added to the pay rate for shift-differential hours.
    pub sd_pay_delta_rate: f64,
    /// Per-hour amount added to the bill rate for shift-differential hours.
    pub sd_bill_delta_rate: f64,
    /// Regular hours.
    pub reg_hours: f64,
    /// Overtime hours.
    pub ot_hours: f64,
    /// Double-time hours.
    pub dt_hours: f64,
    /// Regular shift-differential hours.
    pub reg_sd_hours: f64,
    /// Overtime shift-differential hours.
    pub ot_sd_hours: f64,
    /// Double-time shift-differential hours.
    pub dt_sd_hours: f64,
}

impl RateInputs {
    /// Joins a rate schedule and an hour rollup into one input record.
    pub fn from_parts(rates: &RateSchedule, hours: &HourBuckets) -> Self {
        Self {
            base_pay_rate: rates.base_pay_rate,
            base_bill_rate: rates.base_bill_rate,
            ot_bill_multiplier: rates.ot_bill_multiplier,
            sd_pay_delta_rate: rates.sd_pay_delta_rate,
            sd_bill_delta_rate: rates.sd_bill_delta_rate,
            reg_hours: hours.reg_hours,
            ot_hours: hours.ot_hours,
            dt_hours: hours.dt_hours,
            reg_sd_hours: hours.reg_sd_hours,
            ot_sd_hours: hours.ot_sd_hours,
            dt_sd_hours: hours.dt_sd_hours,
        }
    }

    /// The rate half of this record.
    pub fn rates(&self) -> RateSchedule {
        RateSchedule {
            base_pay_rate: self.base_pay_rate,
            base_bill_rate: self.base_bill_rate,
            ot_bill_multiplier: self.ot_bill_multiplier,
            sd_pay_delta_rate: self.sd_pay_delta_rate,
            sd_bill_delta_rate: self.sd_bill_delta_rate,
        }
    }

    /// The hour half of this record.
    pub fn hours(&self) -> HourBuckets {
        HourBuckets {
            reg_hours: self.reg_hours,
            ot_hours: self.ot_hours,
            dt_hours: self.dt_hours,
            reg_sd_hours: self.reg_sd_hours,
            ot_sd_hours: self.ot_sd_hours,
            dt_sd_hours: self.dt_sd_hours,
        }
    }

    /// Hours recorded for a bucket.
    pub fn hours_for(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Reg => self.reg_hours,
            Bucket::Ot => self.ot_hours,
            Bucket::Dt => self.dt_hours,
            Bucket::RegSd => self.reg_sd_hours,
            Bucket::OtSd => self.ot_sd_hours,
            Bucket::DtSd => self.dt_sd_hours,
        }
    }

    /// Checks the record before it is handed to the engine.
    ///
    /// Returns the first rejected field as [`EngineError::InvalidRateInput`].
    pub fn validate(&self) -> EngineResult<()> {
        self.rates().validate()?;
        self.hours().validate()
    }
}

/// The rate half of [`RateInputs`], as held on a worker's rate card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSchedule {
    /// Base payroll rate per hour.
    pub base_pay_rate: f64,
    /// Base billing rate per hour.
    pub base_bill_rate: f64,
    /// Billing multiplier for overtime hours.
    pub ot_bill_multiplier: f64,
    /// Shift-differential pay delta per hour.
    pub sd_pay_delta_rate: f64,
    /// Shift-differential bill delta per hour.
    pub sd_bill_delta_rate: f64,
}

impl RateSchedule {
    /// Rejects non-finite values, negative base rates and a non-positive
    /// overtime billing multiplier. Deltas may be negative.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("basePayRate", self.base_pay_rate)?;
        non_negative("baseBillRate", self.base_bill_rate)?;

        finite("otBillMultiplier", self.ot_bill_multiplier)?;
        if self.ot_bill_multiplier <= 0.0 {
            return Err(EngineError::invalid_rate_input(
                "otBillMultiplier",
                format!("must be greater than zero, got {}", self.ot_bill_multiplier),
            ));
        }

        finite("sdPayDeltaRate", self.sd_pay_delta_rate)?;
        finite("sdBillDeltaRate", self.sd_bill_delta_rate)
    }
}

/// Hours per bucket for one worker, as produced by the weekly rollup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBuckets {
    /// Regular hours.
    pub reg_hours: f64,
    /// Overtime hours.
    pub ot_hours: f64,
    /// Double-time hours.
    pub dt_hours: f64,
    /// Regular shift-differential hours.
    pub reg_sd_hours: f64,
    /// Overtime shift-differential hours.
    pub ot_sd_hours: f64,
    /// Double-time shift-differential hours.
    pub dt_sd_hours: f64,
}

impl HourBuckets {
    /// Rejects negative or non-finite hours. Zero is valid.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("regHours", self.reg_hours)?;
        non_negative("otHours", self.ot_hours)?;
        non_negative("dtHours", self.dt_hours)?;
        non_negative("regSdHours", self.reg_sd_hours)?;
        non_negative("otSdHours", self.ot_sd_hours)?;
        non_negative("dtSdHours", self.dt_sd_hours)
    }
}

fn finite(field: &str, value: f64) -> EngineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid_rate_input(
            field,
            format!("must be a finite number, got {}", value),
        ))
    }
}

fn non_negative(field: &str, value: f64) -> EngineResult<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid_rate_input(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}
