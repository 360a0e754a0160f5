//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use auth_service::{HealthResponse, ReadinessResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check against the credential store
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.service_context().store().count().await {
        Ok(users) => (StatusCode::OK, Json(ReadinessResponse::ready(users))).into_response(),
        Err(e) => {
            warn!(error = %e, "Credential store not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "unavailable" })),
            )
                .into_response()
        }
    }
}
