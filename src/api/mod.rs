//! HTTP API module for the shift rate engine.
//!
//! This module exposes the interactive preview and the payroll run
//! finalize/lookup endpoints over REST.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRunRequest, WorkerRequest};
pub use response::{ApiError, ApiErrorResponse, PREVIEW_NOTICE, PreviewResponse};
pub use state::AppState;
