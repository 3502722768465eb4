//! Recommendation model -> entity

use dine_core::{Recommendation, RecommendationSummary, Snowflake};

use crate::models::RecommendationModel;

impl From<RecommendationModel> for Recommendation {
    fn from(model: RecommendationModel) -> Self {
        Recommendation {
            id: Snowflake::new(model.id),
            search_id: Snowflake::new(model.search_id),
            summary: RecommendationSummary {
                weather: model.weather,
                pick_reason: model.pick_reason,
            },
            restaurant: model.restaurant.0,
            cafe: model.cafe.0,
            raw: model.raw,
            created_at: model.created_at,
        }
    }
}
