//! Audit log entity - append-only record of security-relevant actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Register,
    Login,
    SearchCreate,
    SearchDelete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "REGISTER",
            Self::Login => "LOGIN",
            Self::SearchCreate => "SEARCH_CREATE",
            Self::SearchDelete => "SEARCH_DELETE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REGISTER" => Ok(Self::Register),
            "LOGIN" => Ok(Self::Login),
            "SEARCH_CREATE" => Ok(Self::SearchCreate),
            "SEARCH_DELETE" => Ok(Self::SearchDelete),
            other => Err(DomainError::ValidationError(format!(
                "unknown audit action: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: Snowflake,
    pub actor_id: Option<Snowflake>,
    pub action: AuditAction,
    pub target_id: Option<Snowflake>,
    pub meta: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    pub fn new(id: Snowflake, actor_id: Option<Snowflake>, action: AuditAction) -> Self {
        Self {
            id,
            actor_id,
            action,
            target_id: None,
            meta: JsonValue::Object(serde_json::Map::new()),
            created_at: Utc::now(),
        }
    }

    pub fn with_target(mut self, target_id: Snowflake) -> Self {
        self.target_id = Some(target_id);
        self
    }

    pub fn with_meta(mut self, meta: JsonValue) -> Self {
        self.meta = meta;
        self
    }
}
