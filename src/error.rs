//! Error types for the shift rate engine.
//!
//! The rate computation itself cannot fail. Every variant here belongs to a
//! boundary around it: configuration loading, input validation before a
//! computation, and the payroll finalization path.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the shift rate engine.
///
/// # Example
///
/// ```
/// use shift_rate_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration value '{field}': {message}")]
    ConfigInvalid {
        /// The configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A rate or hour value was rejected before reaching the engine.
    #[error("Invalid rate input '{field}': {message}")]
    InvalidRateInput {
        /// The offending field, using its wire name.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The pay period ends before it starts.
    #[error("Invalid pay period: end {end} is before start {start}")]
    InvalidPayPeriod {
        /// First day of the period.
        start: NaiveDate,
        /// Last day of the period.
        end: NaiveDate,
    },

    /// A payroll run was submitted without any workers.
    #[error("Payroll run must include at least one worker")]
    EmptyPayrollRun,

    /// A worker id was empty or appeared more than once in a run.
    #[error("Invalid worker '{worker_id}': {message}")]
    InvalidWorker {
        /// The worker id as submitted.
        worker_id: String,
        /// Why the worker entry was rejected.
        message: String,
    },

    /// An amount could not be carried into the run totals.
    #[error("Amount in '{field}' for worker '{worker_id}' is not a finite decimal")]
    NonFiniteAmount {
        /// The worker whose totals were non-finite.
        worker_id: String,
        /// The totals field that was non-finite.
        field: String,
    },

    /// A computed total overflowed to a non-finite value.
    #[error("Total '{field}' is not a finite amount")]
    NonFiniteTotal {
        /// The totals field that was non-finite.
        field: String,
    },

    /// Summing worker totals exceeded the decimal range.
    #[error("Run total '{field}' exceeds the representable amount")]
    RunTotalOverflow {
        /// The run totals field that overflowed.
        field: String,
    },

    /// A payroll run with this id has already been stored.
    #[error("Payroll run already exists: {run_id}")]
    RunAlreadyExists {
        /// The duplicate run id.
        run_id: Uuid,
    },

    /// No payroll run is stored under this id.
    #[error("Payroll run not found: {run_id}")]
    RunNotFound {
        /// The requested run id.
        run_id: Uuid,
    },

    /// The snapshot document could not be serialized.
    #[error("Failed to serialize payroll run snapshot: {message}")]
    SnapshotError {
        /// A description of the serialization failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidRateInput`].
    pub fn invalid_rate_input(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidRateInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
