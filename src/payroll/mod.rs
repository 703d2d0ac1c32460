//! Payroll run finalization and storage.
//!
//! The finalize path is the authoritative consumer of the rate engine: it
//! validates a run, computes every worker's preview and keeps the result as
//! an immutable snapshot keyed by run id, pay period and timezone label.

mod finalize;
mod store;

pub use finalize::{ENGINE_VERSION, PayrollRunInput, finalize_payroll_run};
pub use store::{InMemoryPayrollRuns, PayrollRunRepository};
