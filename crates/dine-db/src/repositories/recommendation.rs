//! PostgreSQL implementation of RecommendationRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use dine_core::{
    DomainError, Recommendation, RecommendationRepository, RepoResult, SearchStatus, Snowflake,
};

use crate::models::RecommendationModel;

use super::error::{map_db_error, map_unique_violation};

const RECOMMENDATION_COLUMNS: &str =
    "id, search_id, weather, pick_reason, restaurant, cafe, raw, created_at";

/// PostgreSQL implementation of RecommendationRepository
#[derive(Clone)]
pub struct PgRecommendationRepository {
    pool: PgPool,
}

impl PgRecommendationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationRepository for PgRecommendationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Recommendation>> {
        let sql = format!("SELECT {RECOMMENDATION_COLUMNS} FROM recommendations WHERE id = $1");
        let result = sqlx::query_as::<_, RecommendationModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Recommendation::from))
    }

    #[instrument(skip(self, recommendation), fields(rec_id = %recommendation.id, search_id = %recommendation.search_id))]
    async fn complete(&self, recommendation: &Recommendation) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO recommendations (id, search_id, weather, pick_reason, restaurant, cafe, raw, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(recommendation.id.into_inner())
        .bind(recommendation.search_id.into_inner())
        .bind(&recommendation.summary.weather)
        .bind(&recommendation.summary.pick_reason)
        .bind(Json(&recommendation.restaurant))
        .bind(Json(&recommendation.cafe))
        .bind(&recommendation.raw)
        .bind(recommendation.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                DomainError::SearchNotFound(recommendation.search_id)
            }
            _ => map_unique_violation(e, || DomainError::RecommendationExists),
        })?;

        let result = sqlx::query("UPDATE searches SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(recommendation.search_id.into_inner())
            .bind(SearchStatus::Done.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        // Dropping the transaction rolls back the insert
        if result.rows_affected() == 0 {
            return Err(DomainError::SearchNotFound(recommendation.search_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_search(&self, search_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM recommendations WHERE search_id = $1")
            .bind(search_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
