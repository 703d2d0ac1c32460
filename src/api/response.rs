//! Response types for the shift rate engine API.
//!
//! This module defines the preview response body, the error response
//! structures and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::PreviewResult;

/// Notice attached to every preview response.
pub const PREVIEW_NOTICE: &str = "Preview only. Not an invoice. Not a snapshot.";

/// Response body for `POST /preview`.
///
/// Carries the engine result alongside an explicit marker that it is not
/// authoritative. Finalized figures come only from `POST /payroll-runs`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    /// Always `true`.
    pub preview_only: bool,
    /// Human-readable preview notice.
    pub notice: &'static str,
    /// The engine output.
    #[serde(flatten)]
    pub result: PreviewResult,
}

impl PreviewResponse {
    /// Wraps an engine result as a preview.
    pub fn new(result: PreviewResult) -> Self {
        Self {
            preview_only: true,
            notice: PREVIEW_NOTICE,
            result,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid run id error response.
    pub fn invalid_run_id(raw: &str) -> Self {
        Self::with_details(
            "INVALID_RUN_ID",
            format!("Invalid payroll run id: {}", raw),
            "Payroll run ids are UUIDs",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::ConfigInvalid { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidRateInput { field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_RATE_INPUT",
                    message,
                    format!("Field '{}' was rejected before computation", field),
                ),
            ),
            EngineError::InvalidPayPeriod { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PAY_PERIOD", message),
            ),
            EngineError::EmptyPayrollRun => (
                StatusCode::BAD_REQUEST,
                ApiError::new("EMPTY_PAYROLL_RUN", message),
            ),
            EngineError::InvalidWorker { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_WORKER", message),
            ),
            EngineError::NonFiniteAmount { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "NON_FINITE_AMOUNT",
                    message,
                    "Rates and hours are too large to total",
                ),
            ),
            EngineError::NonFiniteTotal { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "NON_FINITE_AMOUNT",
                    message,
                    "Rates and hours are too large to total",
                ),
            ),
            EngineError::RunTotalOverflow { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("RUN_TOTAL_OVERFLOW", message),
            ),
            EngineError::RunAlreadyExists { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("RUN_ALREADY_EXISTS", message),
            ),
            EngineError::RunNotFound { .. } => {
                (StatusCode::NOT_FOUND, ApiError::new("RUN_NOT_FOUND", message))
            }
            EngineError::SnapshotError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("SNAPSHOT_ERROR", "Snapshot could not be stored", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
