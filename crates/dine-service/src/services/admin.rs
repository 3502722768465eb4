//! Admin service - search logs and the audit trail

use dine_core::{AuditAction, DomainError, Snowflake};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::dto::{AuditLogResponse, DeletedResponse, ItemsResponse, SearchListItem};

use super::actor::Actor;
use super::audit::AuditTrail;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::search::SearchService;

/// Most searches shown in the admin log view
pub const ADMIN_LOG_LIMIT: i64 = 200;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All searches, newest first
    #[instrument(skip(self), fields(admin_id = %actor.id))]
    pub async fn list_logs(&self, actor: &Actor) -> ServiceResult<ItemsResponse<SearchListItem>> {
        require_admin(actor)?;
        SearchService::new(self.ctx).list_all(ADMIN_LOG_LIMIT).await
    }

    /// Delete one search together with its recommendation
    #[instrument(skip(self), fields(admin_id = %actor.id))]
    pub async fn delete_log(&self, actor: &Actor, search_id: Snowflake) -> ServiceResult<DeletedResponse> {
        require_admin(actor)?;
        let deleted = SearchService::new(self.ctx).delete(search_id).await?;

        AuditTrail::new(self.ctx)
            .record(
                Some(actor.id),
                AuditAction::SearchDelete,
                Some(search_id),
                Some(json!({ "deleted": deleted })),
            )
            .await;

        info!(%search_id, deleted, "Search log deleted by admin");
        Ok(DeletedResponse { deleted })
    }

    /// Newest audit entries
    #[instrument(skip(self), fields(admin_id = %actor.id))]
    pub async fn audit(&self, actor: &Actor) -> ServiceResult<ItemsResponse<AuditLogResponse>> {
        require_admin(actor)?;
        AuditTrail::new(self.ctx).recent().await
    }
}

fn require_admin(actor: &Actor) -> Result<(), DomainError> {
    if actor.is_admin() {
        Ok(())
    } else {
        warn!(user_id = %actor.id, "Admin operation refused");
        Err(DomainError::AdminOnly)
    }
}
