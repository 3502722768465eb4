//! Search database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for searches table
#[derive(Debug, Clone, FromRow)]
pub struct SearchModel {
    pub id: i64,
    pub user_id: i64,
    pub location: String,
    pub mood: String,
    pub category: String,
    pub companions: String,
    pub budget: i64,
    pub atmosphere: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A search row left-joined with its recommendation id
#[derive(Debug, Clone, FromRow)]
pub struct SearchListingModel {
    #[sqlx(flatten)]
    pub search: SearchModel,
    pub rec_id: Option<i64>,
}
