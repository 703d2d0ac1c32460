//! Payroll and billing rate engine for staffing operations.
//!
//! This crate turns a worker's base rates, shift differential deltas and
//! weekly hour rollup into six pay/bill rows (regular, overtime and double
//! time, each with and without shift differential) plus rounded totals.
//! The same engine backs an interactive preview and the authoritative
//! payroll run finalization, which stores immutable snapshots.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
