//! Health check handlers
//!
//! Liveness and readiness endpoints.

use axum::{extract::State, http::StatusCode, Json};
use dine_service::dto::ReadinessResponse;
use tracing::warn;

use crate::state::AppState;

/// Liveness check
///
/// GET /healthz
pub async fn liveness() -> &'static str {
    "ok"
}

/// Readiness check against the database
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = match state.service_context().pool() {
        Some(pool) => match dine_db::ping(pool).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database readiness check failed");
                false
            }
        },
        // In-memory repositories have nothing to ping
        None => true,
    };

    let response = ReadinessResponse::new(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
