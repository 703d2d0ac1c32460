//! Payroll run persistence.
//!
//! Runs are stored as [`PayrollRunRecord`]s and never modified after
//! insertion. [`PayrollRunRepository`] is the seam a database-backed store
//! plugs into; [`InMemoryPayrollRuns`] backs the bundled server and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollRunRecord;

/// Storage for finalized payroll runs.
pub trait PayrollRunRepository: Send + Sync {
    /// Stores a new run. Fails with `RunAlreadyExists` if the id is taken.
    fn insert(&self, record: PayrollRunRecord) -> EngineResult<()>;

    /// Fetches a run by id. Fails with `RunNotFound` if absent.
    fn get(&self, run_id: Uuid) -> EngineResult<PayrollRunRecord>;
}

/// A process-local run store.
#[derive(Debug, Default)]
pub struct InMemoryPayrollRuns {
    runs: RwLock<HashMap<Uuid, PayrollRunRecord>>,
}

impl InMemoryPayrollRuns {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored runs.
    pub fn len(&self) -> usize {
        self.runs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether no runs are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PayrollRunRepository for InMemoryPayrollRuns {
    fn insert(&self, record: PayrollRunRecord) -> EngineResult<()> {
        let mut runs = self.runs.write().unwrap_or_else(|poisoned| poisoned.into_inner());

        if runs.contains_key(&record.run_id) {
            return Err(EngineError::RunAlreadyExists {
                run_id: record.run_id,
            });
        }
        runs.insert(record.run_id, record);
        Ok(())
    }

    fn get(&self, run_id: Uuid) -> EngineResult<PayrollRunRecord> {
        let runs = self.runs.read().unwrap_or_else(|poisoned| poisoned.into_inner());

        runs.get(&run_id)
            .cloned()
            .ok_or(EngineError::RunNotFound { run_id })
    }
}
