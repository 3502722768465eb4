//! PostgreSQL implementation of SearchRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use dine_core::{
    DomainError, RepoResult, Search, SearchListing, SearchRepository, SearchStatus, Snowflake,
};

use crate::models::{SearchListingModel, SearchModel};

use super::error::{convert_rows, map_db_error};

/// PostgreSQL implementation of SearchRepository
#[derive(Clone)]
pub struct PgSearchRepository {
    pool: PgPool,
}

impl PgSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchRepository for PgSearchRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Search>> {
        let result = sqlx::query_as::<_, SearchModel>(
            r"
            SELECT id, user_id, location, mood, category, companions, budget, atmosphere,
                   status, created_at, updated_at
            FROM searches
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Search::try_from).transpose()
    }

    #[instrument(skip(self, search), fields(search_id = %search.id, user_id = %search.user_id))]
    async fn create(&self, search: &Search) -> RepoResult<()> {
        let q = &search.query;
        sqlx::query(
            r"
            INSERT INTO searches (id, user_id, location, mood, category, companions, budget,
                                  atmosphere, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(search.id.into_inner())
        .bind(search.user_id.into_inner())
        .bind(&q.location)
        .bind(&q.mood)
        .bind(&q.category)
        .bind(&q.companions)
        .bind(q.budget)
        .bind(&q.atmosphere)
        .bind(search.status.as_str())
        .bind(search.created_at)
        .bind(search.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Snowflake, status: SearchStatus) -> RepoResult<()> {
        let result = sqlx::query("UPDATE searches SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id.into_inner())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SearchNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<SearchListing>> {
        let rows = sqlx::query_as::<_, SearchListingModel>(
            r"
            SELECT s.id, s.user_id, s.location, s.mood, s.category, s.companions, s.budget,
                   s.atmosphere, s.status, s.created_at, s.updated_at, r.id AS rec_id
            FROM searches s
            LEFT JOIN recommendations r ON r.search_id = s.id
            WHERE s.user_id = $1
            ORDER BY s.created_at DESC, s.id DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_rows(rows)
    }

    #[instrument(skip(self))]
    async fn list_all(&self, limit: i64) -> RepoResult<Vec<SearchListing>> {
        let rows = sqlx::query_as::<_, SearchListingModel>(
            r"
            SELECT s.id, s.user_id, s.location, s.mood, s.category, s.companions, s.budget,
                   s.atmosphere, s.status, s.created_at, s.updated_at, r.id AS rec_id
            FROM searches s
            LEFT JOIN recommendations r ON r.search_id = s.id
            ORDER BY s.created_at DESC, s.id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_rows(rows)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM searches WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
