//! Pay period model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date range a payroll run covers, inclusive on both ends.
///
/// # Example
///
/// ```
/// use shift_rate_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
/// };
///
/// assert!(period.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Rejects a period whose end date precedes its start date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPayPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}
