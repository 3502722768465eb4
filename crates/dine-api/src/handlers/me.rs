//! Current user handler

use axum::{extract::State, Json};
use dine_service::dto::MeResponse;
use dine_service::AuthService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/me
pub async fn get_me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<MeResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(&auth.actor()).await?;
    Ok(Json(response))
}
