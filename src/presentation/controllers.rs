//! HTTP handlers for the scan API

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::application::ScanSegmentUseCase;
use crate::config::Config;
use crate::domain::ScanRejection;
use crate::presentation::models::{ErrorResponse, HealthResponse, ScanResponse};

/// Shared application state, assembled once in `create_app` and read-only
/// while serving.
#[derive(Clone)]
pub struct AppState {
    pub scan_use_case: Arc<ScanSegmentUseCase>,
    pub config: Arc<Config>,
    pub startup_time: Instant,
}

/// POST /api/v1/scan - Trigger a discovery scan of a configured segment
#[utoipa::path(
    post,
    path = "/api/v1/scan",
    request_body = crate::application::use_cases::ScanRequest,
    responses(
        (status = 200, description = "Scan completed", body = ScanResponse),
        (status = 400, description = "Unknown segment", body = ErrorResponse),
        (status = 403, description = "Missing or incorrect scan password", body = ErrorResponse),
        (status = 500, description = "Discovery tool failed; details in server logs", body = ErrorResponse)
    ),
    tag = "scan"
)]
pub async fn run_scan(State(state): State<AppState>, body: Bytes) -> Response {
    // The raw body goes to the pipeline so decode failures get the same
    // 403-class outcome as a bad credential
    match state.scan_use_case.execute(&body).await {
        Ok(result) => (StatusCode::OK, Json(ScanResponse::from(result))).into_response(),
        Err(rejection) => rejection_response(rejection),
    }
}

fn rejection_response(rejection: ScanRejection) -> Response {
    let (status, error) = match rejection {
        ScanRejection::BadCredential => (StatusCode::FORBIDDEN, "forbidden"),
        ScanRejection::UnknownSegment { .. } => (StatusCode::BAD_REQUEST, "bad request"),
        ScanRejection::DiscoveryFailure => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "error running scan, see server logs for details",
        ),
    };
    (status, Json(ErrorResponse::new(error))).into_response()
}

/// GET /health - Service liveness
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.startup_time.elapsed().as_secs(),
    })
}
