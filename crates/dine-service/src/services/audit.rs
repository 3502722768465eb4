//! Audit trail - append-only record of who did what

use dine_core::{AuditAction, AuditLog, Snowflake};
use serde_json::Value as JsonValue;
use tracing::{instrument, warn};

use crate::dto::{AuditLogResponse, ItemsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Most audit entries returned by one listing
pub const AUDIT_LIST_LIMIT: i64 = 200;

/// Audit trail service
pub struct AuditTrail<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditTrail<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append an entry. A failed write is logged and does not fail the caller.
    #[instrument(skip(self, action, meta), fields(action = action.as_str()))]
    pub async fn record(
        &self,
        actor_id: Option<Snowflake>,
        action: AuditAction,
        target_id: Option<Snowflake>,
        meta: Option<JsonValue>,
    ) {
        let mut entry = AuditLog::new(self.ctx.generate_id(), actor_id, action);
        if let Some(target_id) = target_id {
            entry = entry.with_target(target_id);
        }
        if let Some(meta) = meta {
            entry = entry.with_meta(meta);
        }

        if let Err(e) = self.ctx.audit_repo().append(&entry).await {
            warn!(error = %e, "Failed to append audit entry");
        }
    }

    /// Newest entries first
    #[instrument(skip(self))]
    pub async fn recent(&self) -> ServiceResult<ItemsResponse<AuditLogResponse>> {
        let entries = self.ctx.audit_repo().list_recent(AUDIT_LIST_LIMIT).await?;
        Ok(ItemsResponse::new(
            entries.iter().map(AuditLogResponse::from).collect(),
        ))
    }
}
