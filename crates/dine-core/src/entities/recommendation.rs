//! Recommendation entity - the persisted output of a successful search

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::value_objects::Snowflake;

/// Context shown above the picks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub weather: String,
    pub pick_reason: String,
}

/// Restaurant block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPick {
    pub name: String,
    pub ai_summary: String,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub estimated_price: String,
    pub map_link: String,
    pub detail_link: String,
}

/// Cafe block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafePick {
    pub name: String,
    pub ai_analysis: String,
    pub rating: Option<f64>,
    pub estimated_price: String,
    pub map_link: String,
    pub detail_link: String,
    /// Not computed; a fixed walking-distance label
    pub distance_from_restaurant: String,
}

/// Combined restaurant + cafe result, 1:1 with a search
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: Snowflake,
    pub search_id: Snowflake,
    pub summary: RecommendationSummary,
    pub restaurant: RestaurantPick,
    pub cafe: CafePick,
    /// Free-form upstream provenance
    pub raw: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(
        id: Snowflake,
        search_id: Snowflake,
        summary: RecommendationSummary,
        restaurant: RestaurantPick,
        cafe: CafePick,
        raw: JsonValue,
    ) -> Self {
        Self {
            id,
            search_id,
            summary,
            restaurant,
            cafe,
            raw,
            created_at: Utc::now(),
        }
    }
}

/// Google Maps link for a place id
pub fn place_link(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{place_id}")
}
