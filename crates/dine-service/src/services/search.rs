//! Search service
//!
//! Submitting a search runs the recommendation pipeline inline and stores
//! the outcome. History and result lookups are owner scoped.

use dine_core::{AuditAction, DomainError, Recommendation, Search, SearchQuery, SearchStatus, Snowflake};
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::dto::{
    CreateSearchRequest, CreatedResponse, ItemsResponse, RecommendationResponse,
    ResultDetailResponse, SearchListItem, SearchResponse,
};
use crate::recommend::Recommender;

use super::actor::Actor;
use super::audit::AuditTrail;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Most searches shown in a user's own history
pub const HISTORY_LIMIT: i64 = 50;

/// Search service
pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a pending search, run the pipeline and persist its result.
    /// Returns the id of the new recommendation.
    #[instrument(skip(self, request), fields(user_id = %actor.id, location = %request.location))]
    pub async fn create(&self, actor: &Actor, request: CreateSearchRequest) -> ServiceResult<CreatedResponse> {
        let query = SearchQuery::from(request);
        query.validate()?;

        let mut search = Search::new(self.ctx.generate_id(), actor.id, query);
        self.ctx.search_repo().create(&search).await?;

        match self.complete(&mut search).await {
            Ok(recommendation) => {
                AuditTrail::new(self.ctx)
                    .record(
                        Some(actor.id),
                        AuditAction::SearchCreate,
                        Some(search.id),
                        Some(json!({ "rec_id": recommendation.id })),
                    )
                    .await;

                info!(search_id = %search.id, rec_id = %recommendation.id, "Search completed");
                Ok(CreatedResponse {
                    id: recommendation.id.to_string(),
                })
            }
            Err(e) => {
                if e.is_pipeline() {
                    warn!(search_id = %search.id, error = %e, "Recommendation pipeline failed");
                } else {
                    error!(search_id = %search.id, error = %e, "Failed to store recommendation");
                }
                if let Err(status_err) = self.fail(&mut search).await {
                    error!(search_id = %search.id, error = %status_err, "Failed to mark search as failed");
                }
                Err(e)
            }
        }
    }

    /// Run the pipeline, then store the recommendation and mark the search done together
    async fn complete(&self, search: &mut Search) -> ServiceResult<Recommendation> {
        let draft = Recommender::from_context(self.ctx)
            .recommend(&search.query)
            .await?;

        let recommendation = Recommendation::new(
            self.ctx.generate_id(),
            search.id,
            draft.summary,
            draft.restaurant,
            draft.cafe,
            draft.raw,
        );
        self.ctx.recommendation_repo().complete(&recommendation).await?;
        search.resolve(SearchStatus::Done);
        Ok(recommendation)
    }

    async fn fail(&self, search: &mut Search) -> ServiceResult<()> {
        self.ctx
            .search_repo()
            .update_status(search.id, SearchStatus::Failed)
            .await?;
        search.resolve(SearchStatus::Failed);
        Ok(())
    }

    /// The caller's own searches, newest first
    #[instrument(skip(self), fields(user_id = %actor.id))]
    pub async fn list_mine(&self, actor: &Actor) -> ServiceResult<ItemsResponse<SearchListItem>> {
        let listings = self
            .ctx
            .search_repo()
            .list_by_user(actor.id, HISTORY_LIMIT)
            .await?;
        Ok(ItemsResponse::new(
            listings.iter().map(SearchListItem::from).collect(),
        ))
    }

    /// Every user's searches, newest first
    #[instrument(skip(self))]
    pub async fn list_all(&self, limit: i64) -> ServiceResult<ItemsResponse<SearchListItem>> {
        let listings = self.ctx.search_repo().list_all(limit).await?;
        Ok(ItemsResponse::new(
            listings.iter().map(SearchListItem::from).collect(),
        ))
    }

    /// A recommendation with the search that produced it.
    /// Only the search owner or an admin may read it.
    #[instrument(skip(self), fields(user_id = %actor.id))]
    pub async fn get_result(&self, actor: &Actor, rec_id: Snowflake) -> ServiceResult<ResultDetailResponse> {
        let recommendation = self
            .ctx
            .recommendation_repo()
            .find_by_id(rec_id)
            .await?
            .ok_or(DomainError::RecommendationNotFound(rec_id))?;

        let search = self
            .ctx
            .search_repo()
            .find_by_id(recommendation.search_id)
            .await?
            .ok_or(DomainError::SearchNotFound(recommendation.search_id))?;

        if !actor.can_read(&search) {
            warn!(search_id = %search.id, "Result requested by someone other than its owner");
            return Err(DomainError::NotSearchOwner.into());
        }

        Ok(ResultDetailResponse {
            result: RecommendationResponse::from(&recommendation),
            search: SearchResponse::from(&search),
        })
    }

    /// Delete a search and its recommendation. Returns how many searches went away.
    #[instrument(skip(self))]
    pub async fn delete(&self, search_id: Snowflake) -> ServiceResult<u64> {
        self.ctx
            .recommendation_repo()
            .delete_by_search(search_id)
            .await?;
        let deleted = self.ctx.search_repo().delete(search_id).await?;
        info!(deleted, "Search deleted");
        Ok(deleted)
    }
}
