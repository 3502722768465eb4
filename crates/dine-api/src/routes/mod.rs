//! Route definitions
//!
//! API routes are mounted under /api; health checks live at the root.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{admin, auth, health, me, searches};
use crate::state::AppState;

/// Create the API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Liveness and readiness checks
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::liveness))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(search_routes())
        .merge(admin_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/me", get(me::get_me))
}

fn search_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/searches",
            post(searches::create_search).get(searches::list_searches),
        )
        .route("/results/:id", get(searches::get_result))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/logs", get(admin::list_logs))
        .route("/admin/logs/:search_id", delete(admin::delete_log))
        .route("/admin/audit", get(admin::list_audit))
}
