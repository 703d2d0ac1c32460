//! Integration tests for the shift rate engine HTTP API.
//!
//! This test suite covers:
//! - Preview computation for the reference rate card
//! - Preview input validation and request parsing errors
//! - Payroll run finalization, snapshot storage and lookup
//! - Payroll run validation errors

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use shift_rate_engine::api::{AppState, PREVIEW_NOTICE, create_router};
use shift_rate_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/engine.yaml").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

async fn post_raw(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

fn seed_rates() -> Value {
    json!({
        "basePayRate": 25.0,
        "baseBillRate": 45.0,
        "otBillMultiplier": 1.5,
        "sdPayDeltaRate": 3.0,
        "sdBillDeltaRate": 5.0
    })
}

fn seed_rollup() -> Value {
    json!({
        "regHours": 40,
        "otHours": 8,
        "dtHours": 4,
        "regSdHours": 16,
        "otSdHours": 4,
        "dtSdHours": 2
    })
}

/// Flat preview body: rates and hours side by side.
fn seed_preview_request() -> Value {
    let mut body = seed_rates();
    let rollup = seed_rollup();
    for (key, value) in rollup.as_object().unwrap() {
        body[key] = value.clone();
    }
    body
}

fn worker(worker_id: &str, rates: Value, rollup: Value) -> Value {
    json!({
        "workerId": worker_id,
        "rates": rates,
        "rollup": rollup
    })
}

fn run_request(workers: Vec<Value>) -> Value {
    json!({
        "periodStart": "2026-01-05",
        "periodEnd": "2026-01-11",
        "workers": workers
    })
}

fn as_f64(value: &Value) -> f64 {
    value.as_f64().unwrap()
}

// =============================================================================
// SECTION 1: Preview
// =============================================================================

#[tokio::test]
async fn test_preview_reference_rate_card() {
    let (status, result) =
        post_json(create_router_for_test(), "/preview", seed_preview_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["previewOnly"], true);
    assert_eq!(result["notice"], PREVIEW_NOTICE);
    assert_eq!(as_f64(&result["totalHours"]), 74.0);
    assert_eq!(as_f64(&result["totalPay"]), 2228.0);
    assert_eq!(as_f64(&result["totalBill"]), 4000.0);
}

#[tokio::test]
async fn test_preview_rows_in_fixed_order_with_labels() {
    let (_, result) =
        post_json(create_router_for_test(), "/preview", seed_preview_request()).await;

    let buckets: Vec<&str> = result["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["bucket"].as_str().unwrap())
        .collect();
    assert_eq!(buckets, ["REG", "OT", "DT", "REG (SD)", "OT (SD)", "DT (SD)"]);
}

#[tokio::test]
async fn test_preview_row_fields() {
    let (_, result) =
        post_json(create_router_for_test(), "/preview", seed_preview_request()).await;

    let dt_sd = &result["rows"][5];
    assert_eq!(as_f64(&dt_sd["hours"]), 2.0);
    assert_eq!(as_f64(&dt_sd["payMultiplier"]), 2.0);
    assert_eq!(as_f64(&dt_sd["billMultiplier"]), 2.0);
    assert_eq!(as_f64(&dt_sd["effectivePayRate"]), 56.0);
    assert_eq!(as_f64(&dt_sd["effectiveBillRate"]), 100.0);
    assert_eq!(as_f64(&dt_sd["payAmount"]), 112.0);
    assert_eq!(as_f64(&dt_sd["billAmount"]), 200.0);
}

#[tokio::test]
async fn test_preview_derives_dt_bill_multiplier() {
    let mut body = seed_preview_request();
    body["otBillMultiplier"] = json!(1.4);

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_f64(&result["rows"][1]["billMultiplier"]), 1.4);
    assert_eq!(as_f64(&result["rows"][2]["billMultiplier"]), 1.87);
    // 45 * 1.87 = 84.15
    assert_eq!(as_f64(&result["rows"][2]["effectiveBillRate"]), 84.15);
}

#[tokio::test]
async fn test_preview_zero_hours() {
    let mut body = seed_preview_request();
    for key in ["regHours", "otHours", "dtHours", "regSdHours", "otSdHours", "dtSdHours"] {
        body[key] = json!(0);
    }

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_f64(&result["totalHours"]), 0.0);
    assert_eq!(as_f64(&result["totalPay"]), 0.0);
    assert_eq!(as_f64(&result["totalBill"]), 0.0);
    // Rates are still reported for empty buckets
    assert_eq!(as_f64(&result["rows"][3]["effectivePayRate"]), 28.0);
}

#[tokio::test]
async fn test_preview_negative_delta_is_accepted() {
    let mut body = seed_preview_request();
    body["sdPayDeltaRate"] = json!(-2.0);

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::OK);
    // (25 - 2) * 1 = 23
    assert_eq!(as_f64(&result["rows"][3]["effectivePayRate"]), 23.0);
}

// =============================================================================
// SECTION 2: Preview Errors
// =============================================================================

#[tokio::test]
async fn test_preview_negative_hours_rejected() {
    let mut body = seed_preview_request();
    body["otHours"] = json!(-1);

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RATE_INPUT");
    assert!(result["message"].as_str().unwrap().contains("otHours"));
}

#[tokio::test]
async fn test_preview_zero_ot_bill_multiplier_rejected() {
    let mut body = seed_preview_request();
    body["otBillMultiplier"] = json!(0);

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RATE_INPUT");
}

#[tokio::test]
async fn test_preview_missing_field_is_validation_error() {
    let mut body = seed_preview_request();
    body.as_object_mut().unwrap().remove("dtSdHours");

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("dtSdHours"));
}

#[tokio::test]
async fn test_preview_wrong_type_is_malformed() {
    let mut body = seed_preview_request();
    body["regHours"] = json!("forty");

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_preview_invalid_json_syntax() {
    let (status, result) =
        post_raw(create_router_for_test(), "/preview", "{\"regHours\": ".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_preview_overflowing_amounts_rejected() {
    // Every input is finite but the scaled rate overflows f64
    let mut body = seed_preview_request();
    body["basePayRate"] = json!(1e307);
    body["regHours"] = json!(50);

    let (status, result) = post_json(create_router_for_test(), "/preview", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "NON_FINITE_AMOUNT");
    assert!(result["message"].as_str().unwrap().contains("totalPay"));
}

// =============================================================================
// SECTION 3: Payroll Runs
// =============================================================================

#[tokio::test]
async fn test_finalize_run_returns_snapshot() {
    let router = create_router_for_test();
    let body = run_request(vec![worker("emp_001", seed_rates(), seed_rollup())]);

    let (status, snapshot) = post_json(router, "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(snapshot["runId"].as_str().is_some());
    assert_eq!(snapshot["periodStart"], "2026-01-05");
    assert_eq!(snapshot["periodEnd"], "2026-01-11");
    assert_eq!(snapshot["timezone"], "America/Chicago");
    assert_eq!(snapshot["engineVersion"], env!("CARGO_PKG_VERSION"));
    assert_eq!(snapshot["workers"][0]["workerId"], "emp_001");
    assert_eq!(as_f64(&snapshot["workers"][0]["preview"]["totalPay"]), 2228.0);
    assert_eq!(snapshot["totals"]["workerCount"], 1);
    assert_eq!(snapshot["totals"]["totalHours"], "74.00");
    assert_eq!(snapshot["totals"]["totalPay"], "2228.00");
    assert_eq!(snapshot["totals"]["totalBill"], "4000.00");
}

#[tokio::test]
async fn test_finalize_run_matches_preview() {
    let router = create_router_for_test();
    let (_, preview) = post_json(router.clone(), "/preview", seed_preview_request()).await;
    let (_, snapshot) = post_json(
        router,
        "/payroll-runs",
        run_request(vec![worker("emp_001", seed_rates(), seed_rollup())]),
    )
    .await;

    assert_eq!(snapshot["workers"][0]["preview"]["rows"], preview["rows"]);
    assert_eq!(
        snapshot["workers"][0]["preview"]["totalBill"],
        preview["totalBill"]
    );
}

#[tokio::test]
async fn test_finalize_run_sums_workers_exactly() {
    let router = create_router_for_test();
    let mut small = seed_rollup();
    for key in ["regHours", "otHours", "dtHours", "regSdHours", "otSdHours", "dtSdHours"] {
        small[key] = json!(0);
    }
    small["regHours"] = json!(0.1);
    let mut rates = seed_rates();
    rates["basePayRate"] = json!(1.0);
    rates["baseBillRate"] = json!(1.0);

    let mut other = small.clone();
    other["regHours"] = json!(0.2);

    let body = run_request(vec![
        worker("emp_001", rates.clone(), small),
        worker("emp_002", rates, other),
    ]);
    let (status, snapshot) = post_json(router, "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(snapshot["totals"]["workerCount"], 2);
    assert_eq!(snapshot["totals"]["totalHours"], "0.30");
    assert_eq!(snapshot["totals"]["totalPay"], "0.30");
}

#[tokio::test]
async fn test_finalize_run_uses_requested_timezone() {
    let mut body = run_request(vec![worker("emp_001", seed_rates(), seed_rollup())]);
    body["timezone"] = json!("Australia/Sydney");

    let (status, snapshot) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(snapshot["timezone"], "Australia/Sydney");
}

#[tokio::test]
async fn test_fetch_run_returns_stored_snapshot() {
    let router = create_router_for_test();
    let body = run_request(vec![worker("emp_001", seed_rates(), seed_rollup())]);

    let (status, created) = post_json(router.clone(), "/payroll-runs", body).await;
    assert_eq!(status, StatusCode::CREATED);

    let run_id = created["runId"].as_str().unwrap();
    let (status, fetched) = get(router, &format!("/payroll-runs/{}", run_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_each_run_gets_its_own_id() {
    let router = create_router_for_test();
    let body = run_request(vec![worker("emp_001", seed_rates(), seed_rollup())]);

    let (_, first) = post_json(router.clone(), "/payroll-runs", body.clone()).await;
    let (_, second) = post_json(router, "/payroll-runs", body).await;

    assert_ne!(first["runId"], second["runId"]);
}

#[tokio::test]
async fn test_fetch_unknown_run_returns_404() {
    let (status, result) = get(
        create_router_for_test(),
        "/payroll-runs/7f9c2c1e-4a7b-4a55-9d1e-3c2a1b0f9e8d",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "RUN_NOT_FOUND");
}

#[tokio::test]
async fn test_fetch_malformed_run_id_returns_400() {
    let (status, result) = get(create_router_for_test(), "/payroll-runs/run-42").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RUN_ID");
}

// =============================================================================
// SECTION 4: Payroll Run Errors
// =============================================================================

#[tokio::test]
async fn test_empty_run_rejected() {
    let (status, result) =
        post_json(create_router_for_test(), "/payroll-runs", run_request(vec![])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "EMPTY_PAYROLL_RUN");
}

#[tokio::test]
async fn test_duplicate_worker_rejected() {
    let body = run_request(vec![
        worker("emp_001", seed_rates(), seed_rollup()),
        worker("emp_001", seed_rates(), seed_rollup()),
    ]);

    let (status, result) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_WORKER");
}

#[tokio::test]
async fn test_blank_worker_id_rejected() {
    let body = run_request(vec![worker("  ", seed_rates(), seed_rollup())]);

    let (status, result) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_WORKER");
}

#[tokio::test]
async fn test_reversed_period_rejected() {
    let mut body = run_request(vec![worker("emp_001", seed_rates(), seed_rollup())]);
    body["periodStart"] = json!("2026-01-11");
    body["periodEnd"] = json!("2026-01-05");

    let (status, result) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_PAY_PERIOD");
}

#[tokio::test]
async fn test_run_with_negative_hours_rejected() {
    let mut rollup = seed_rollup();
    rollup["regSdHours"] = json!(-4);
    let body = run_request(vec![worker("emp_001", seed_rates(), rollup)]);

    let (status, result) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_RATE_INPUT");
}

#[tokio::test]
async fn test_run_with_overflowing_amounts_rejected() {
    let mut rates = seed_rates();
    rates["baseBillRate"] = json!(f64::MAX);
    let body = run_request(vec![worker("emp_001", rates, seed_rollup())]);

    let (status, result) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "NON_FINITE_AMOUNT");
}

#[tokio::test]
async fn test_run_total_overflow_rejected() {
    // Each worker's pay total fits a decimal, the run-wide sum does not
    let mut rates = seed_rates();
    rates["basePayRate"] = json!(1e27);
    let rollup = json!({
        "regHours": 50,
        "otHours": 0,
        "dtHours": 0,
        "regSdHours": 0,
        "otSdHours": 0,
        "dtSdHours": 0
    });
    let body = run_request(vec![
        worker("emp_001", rates.clone(), rollup.clone()),
        worker("emp_002", rates, rollup),
    ]);

    let (status, result) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "RUN_TOTAL_OVERFLOW");
    assert!(result["message"].as_str().unwrap().contains("totalPay"));
}

#[tokio::test]
async fn test_rejected_run_is_not_stored() {
    let router = create_router_for_test();
    let (status, _) = post_json(router.clone(), "/payroll-runs", run_request(vec![])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = post_json(
        router,
        "/payroll-runs",
        run_request(vec![worker("emp_001", seed_rates(), seed_rollup())]),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["totals"]["workerCount"], 1);
}

#[tokio::test]
async fn test_run_missing_rollup_field_is_validation_error() {
    let mut rollup = seed_rollup();
    rollup.as_object_mut().unwrap().remove("otSdHours");
    let body = run_request(vec![worker("emp_001", seed_rates(), rollup)]);

    let (status, result) = post_json(create_router_for_test(), "/payroll-runs", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}
