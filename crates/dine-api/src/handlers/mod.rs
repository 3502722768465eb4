//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod health;
pub mod me;
pub mod searches;

use crate::response::ApiError;

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
