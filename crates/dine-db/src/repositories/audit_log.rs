//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use dine_core::{AuditLog, AuditLogRepository, RepoResult};

use crate::models::AuditLogModel;

use super::error::{convert_rows, map_db_error};

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(action = %entry.action))]
    async fn append(&self, entry: &AuditLog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO audit_logs (id, actor_id, action, target_id, meta, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(entry.id.into_inner())
        .bind(entry.actor_id.map(|id| id.into_inner()))
        .bind(entry.action.as_str())
        .bind(entry.target_id.map(|id| id.into_inner()))
        .bind(&entry.meta)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<AuditLog>> {
        let rows = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, actor_id, action, target_id, meta, created_at
            FROM audit_logs
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        convert_rows(rows)
    }
}
