//! Core data models for the shift rate engine.
//!
//! This module contains the engine's input and output records and the
//! payroll run documents built from them.

mod bucket;
mod pay_period;
mod payroll_run;
mod preview_result;
mod rate_inputs;

pub use bucket::{Bucket, HourType};
pub use pay_period::PayPeriod;
pub use payroll_run::{
    PayrollRunRecord, PayrollRunSnapshot, RunTotals, WorkerSnapshot, WorkerTimesheet,
};
pub use preview_result::{PreviewResult, PreviewRow};
pub use rate_inputs::{HourBuckets, RateInputs, RateSchedule};
