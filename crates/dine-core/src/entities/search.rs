//! Search entity - one submitted recommendation query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub location: String,
    pub mood: String,
    pub category: String,
    pub companions: String,
    pub budget: i64,
    pub atmosphere: String,
}

impl SearchQuery {
    /// Reject queries the pipeline cannot run
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.location.trim().is_empty() {
            return Err(DomainError::MissingField("location"));
        }
        if self.budget < 0 {
            return Err(DomainError::ValidationError(
                "budget must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Human-readable explanation of why this pick was made
    pub fn pick_reason(&self) -> String {
        format!(
            "현재 위치: {}, 기분: {}, 카테고리: {}, 목적: {}, 예산: {}원, 분위기: {}",
            self.location, self.mood, self.category, self.companions, self.budget, self.atmosphere
        )
    }
}

/// Lifecycle of a search: pending until the pipeline resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    #[default]
    Pending,
    Done,
    Failed,
}

impl SearchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Done and failed are terminal
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::ValidationError(format!(
                "unknown search status: {other}"
            ))),
        }
    }
}

/// A search submitted by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub query: SearchQuery,
    pub status: SearchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Search {
    /// Create a pending search
    pub fn new(id: Snowflake, user_id: Snowflake, query: SearchQuery) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            query,
            status: SearchStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Move to a terminal status
    pub fn resolve(&mut self, status: SearchStatus) {
        debug_assert!(status.is_terminal(), "search cannot return to pending");
        self.status = status;
        self.updated_at = Utc::now();
    }
}
