//! Admin handlers

use axum::{extract::State, Json};
use dine_service::dto::{AuditLogResponse, DeletedResponse, ItemsResponse, SearchListItem};
use dine_service::AdminService;

use crate::extractors::{AdminUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/admin/logs
pub async fn list_logs(
    State(state): State<AppState>,
    admin: AdminUser,
) -> ApiResult<Json<ItemsResponse<SearchListItem>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_logs(&admin.actor()).await?))
}

/// DELETE /api/admin/logs/:search_id
pub async fn delete_log(
    State(state): State<AppState>,
    admin: AdminUser,
    IdPath(search_id): IdPath,
) -> ApiResult<Json<DeletedResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.delete_log(&admin.actor(), search_id).await?))
}

/// GET /api/admin/audit
pub async fn list_audit(
    State(state): State<AppState>,
    admin: AdminUser,
) -> ApiResult<Json<ItemsResponse<AuditLogResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.audit(&admin.actor()).await?))
}
