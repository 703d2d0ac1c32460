//! Rate and amount calculation for payroll and billing.
//!
//! This module contains the pure computation that turns a worker's rates
//! and bucketed hours into payroll cost and customer billing: money
//! rounding, the multiplier table, effective rate calculation, and the
//! row/totals builder. Nothing here performs I/O or keeps state between
//! calls, so every function is safe to call concurrently.

mod effective_rate;
mod multipliers;
mod preview;
mod rounding;

pub use effective_rate::effective_rate;
pub use multipliers::{
    BILL_MULTIPLIER_REG, PAY_MULTIPLIER_DT, PAY_MULTIPLIER_OT, PAY_MULTIPLIER_REG,
    billing_dt_multiplier, billing_multiplier, payroll_multiplier,
};
pub use preview::compute_preview_rows;
pub use rounding::round2;
