//! Search and result handlers

use axum::{extract::State, Json};
use dine_service::dto::{
    CreateSearchRequest, CreatedResponse, ItemsResponse, ResultDetailResponse, SearchListItem,
};
use dine_service::SearchService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a search and run the recommendation pipeline
///
/// POST /api/searches
pub async fn create_search(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSearchRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = SearchService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// The caller's search history
///
/// GET /api/searches
pub async fn list_searches(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ItemsResponse<SearchListItem>>> {
    let service = SearchService::new(state.service_context());
    let response = service.list_mine(&auth.actor()).await?;
    Ok(Json(response))
}

/// A recommendation and the search behind it
///
/// GET /api/results/:id
pub async fn get_result(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(rec_id): IdPath,
) -> ApiResult<Json<ResultDetailResponse>> {
    let service = SearchService::new(state.service_context());
    let response = service.get_result(&auth.actor(), rec_id).await?;
    Ok(Json(response))
}
