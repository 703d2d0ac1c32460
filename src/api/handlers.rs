//! HTTP request handlers for the shift rate engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_preview_rows;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollRunSnapshot, RateInputs};
use crate::payroll::{ENGINE_VERSION, PayrollRunInput, finalize_payroll_run};

use super::request::PayrollRunRequest;
use super::response::{ApiError, ApiErrorResponse, PreviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/preview", post(preview_handler))
        .route("/payroll-runs", post(finalize_handler))
        .route("/payroll-runs/:run_id", get(get_run_handler))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: ENGINE_VERSION,
    })
}

/// Handler for POST /preview.
///
/// Validates the rate inputs, runs the engine and returns the rows flagged
/// as preview only.
async fn preview_handler(payload: Result<Json<RateInputs>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    let inputs = match payload {
        Ok(Json(inputs)) => inputs,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = inputs.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Preview input rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let result = compute_preview_rows(&inputs);
    if let Some(field) = result.non_finite_total() {
        let err = EngineError::NonFiniteTotal {
            field: field.to_string(),
        };
        warn!(correlation_id = %correlation_id, error = %err, "Preview totals overflowed");
        return ApiErrorResponse::from(err).into_response();
    }
    info!(
        correlation_id = %correlation_id,
        total_hours = result.total_hours,
        total_pay = result.total_pay,
        total_bill = result.total_bill,
        duration_us = start_time.elapsed().as_micros(),
        "Preview computed"
    );

    json_response(StatusCode::OK, &PreviewResponse::new(result))
}

/// Handler for POST /payroll-runs.
///
/// Finalizes the run, stores its snapshot and returns the snapshot.
async fn finalize_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let run_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, run_id = %run_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input: PayrollRunInput = request.into();
    let worker_count = input.workers.len();

    let start_time = Instant::now();
    match finalize_and_store(&state, input, run_id) {
        Ok(snapshot) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %run_id,
                worker_count,
                period_start = %snapshot.period_start,
                period_end = %snapshot.period_end,
                timezone = %snapshot.timezone,
                total_pay = %snapshot.totals.total_pay,
                total_bill = %snapshot.totals.total_bill,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll run finalized"
            );
            json_response(StatusCode::CREATED, &snapshot)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                run_id = %run_id,
                worker_count,
                error = %err,
                "Payroll run rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn finalize_and_store(
    state: &AppState,
    input: PayrollRunInput,
    run_id: Uuid,
) -> EngineResult<PayrollRunSnapshot> {
    let snapshot =
        finalize_payroll_run(input, state.config().default_timezone(), run_id, Utc::now())?;
    state.runs().insert(snapshot.to_record()?)?;
    Ok(snapshot)
}

/// Handler for GET /payroll-runs/{run_id}.
///
/// Returns the stored snapshot document exactly as it was written.
async fn get_run_handler(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let run_id = match Uuid::parse_str(&raw_id) {
        Ok(run_id) => run_id,
        Err(_) => {
            warn!(correlation_id = %correlation_id, run_id = %raw_id, "Invalid run id");
            return ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::invalid_run_id(&raw_id))
                .into_response();
        }
    };

    match state.runs().get(run_id) {
        Ok(record) => {
            info!(correlation_id = %correlation_id, run_id = %run_id, "Payroll run fetched");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                record.snapshot_json,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, run_id = %run_id, error = %err, "Payroll run lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to an API error.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}
