//! Audit log model -> entity

use dine_core::{AuditLog, DomainError, Snowflake};

use crate::models::AuditLogModel;

impl TryFrom<AuditLogModel> for AuditLog {
    type Error = DomainError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: Snowflake::new(model.id),
            actor_id: model.actor_id.map(Snowflake::new),
            action: model
                .action
                .parse()
                .map_err(|e: DomainError| DomainError::DatabaseError(e.to_string()))?,
            target_id: model.target_id.map(Snowflake::new),
            meta: model.meta,
            created_at: model.created_at,
        })
    }
}
