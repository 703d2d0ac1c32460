//! Application state for the shift rate engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::payroll::{InMemoryPayrollRuns, PayrollRunRepository};

/// Shared application state.
///
/// Holds the loaded configuration and the payroll run store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    runs: Arc<dyn PayrollRunRepository>,
}

impl AppState {
    /// Creates application state backed by an in-memory run store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_repository(config, Arc::new(InMemoryPayrollRuns::new()))
    }

    /// Creates application state backed by the given run store.
    pub fn with_repository(config: ConfigLoader, runs: Arc<dyn PayrollRunRepository>) -> Self {
        Self {
            config: Arc::new(config),
            runs,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll run store.
    pub fn runs(&self) -> &dyn PayrollRunRepository {
        self.runs.as_ref()
    }
}
