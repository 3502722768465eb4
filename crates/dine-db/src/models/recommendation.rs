//! Recommendation database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::types::Json;
use sqlx::FromRow;

use dine_core::{CafePick, RestaurantPick};

/// Database model for recommendations table; the pick blocks are JSONB
#[derive(Debug, Clone, FromRow)]
pub struct RecommendationModel {
    pub id: i64,
    pub search_id: i64,
    pub weather: String,
    pub pick_reason: String,
    pub restaurant: Json<RestaurantPick>,
    pub cafe: Json<CafePick>,
    pub raw: JsonValue,
    pub created_at: DateTime<Utc>,
}
