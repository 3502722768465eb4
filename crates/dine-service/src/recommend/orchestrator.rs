//! The recommendation orchestrator
//!
//! Every step depends on the one before it. Any upstream failure aborts the
//! run; there are no partial results and no retries.

use dine_core::{
    place_link, CafePick, Coordinates, CurrentWeather, DomainError, LanguageModel, PlaceDetails,
    PlaceSearch, PlacesProvider, PriceTier, RecommendationSummary, RestaurantPick, SearchQuery,
    WeatherProvider,
};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, instrument};

use super::extract::extract_coordinates;
use super::prompts::{self, CAFE_RADIUS_M, RESTAURANT_RADIUS_M};
use crate::services::ServiceContext;

/// Shown in place of a walking distance; not computed from coordinates yet
const CAFE_DISTANCE_PLACEHOLDER: &str = "도보 5분";

/// Everything the pipeline produced, ready to be stored as a recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationDraft {
    pub summary: RecommendationSummary,
    pub restaurant: RestaurantPick,
    pub cafe: CafePick,
    pub raw: JsonValue,
}

/// Runs the pipeline against the three upstream ports
pub struct Recommender<'a> {
    language_model: &'a dyn LanguageModel,
    weather: &'a dyn WeatherProvider,
    places: &'a dyn PlacesProvider,
}

impl<'a> Recommender<'a> {
    pub fn new(
        language_model: &'a dyn LanguageModel,
        weather: &'a dyn WeatherProvider,
        places: &'a dyn PlacesProvider,
    ) -> Self {
        Self {
            language_model,
            weather,
            places,
        }
    }

    pub fn from_context(ctx: &'a ServiceContext) -> Self {
        Self::new(ctx.language_model(), ctx.weather(), ctx.places())
    }

    /// Run the whole pipeline for one query
    #[instrument(skip(self, query), fields(location = %query.location, category = %query.category))]
    pub async fn recommend(&self, query: &SearchQuery) -> Result<RecommendationDraft, DomainError> {
        let at = self.geocode(&query.location).await?;
        let weather = self.weather.current(at).await?;
        debug!(code = weather.weather_code, temperature = weather.temperature, "weather fetched");

        let (restaurant_id, restaurant) = self.pick_restaurant(query, at).await?;
        let (cafe_id, cafe) = self.pick_cafe(query, at).await?;

        info!(restaurant = %restaurant.name, cafe = %cafe.name, "recommendation assembled");

        Ok(RecommendationDraft {
            summary: RecommendationSummary {
                weather: weather.describe(),
                pick_reason: query.pick_reason(),
            },
            raw: provenance(at, &weather, &restaurant_id, &cafe_id),
            restaurant,
            cafe,
        })
    }

    async fn geocode(&self, location: &str) -> Result<Coordinates, DomainError> {
        let reply = self.language_model.complete(prompts::geocode(location)).await?;
        let at = extract_coordinates(&reply)?;
        debug!(lat = at.lat, lon = at.lon, "location geocoded");
        Ok(at)
    }

    async fn pick_restaurant(
        &self,
        query: &SearchQuery,
        at: Coordinates,
    ) -> Result<(String, RestaurantPick), DomainError> {
        let search = PlaceSearch {
            query: prompts::restaurant_search_term(query),
            near: at,
            radius_m: RESTAURANT_RADIUS_M,
        };
        let details = self.top_match(&search, "restaurant").await?;

        let price = PriceTier::resolve(details.price_level, query.budget);
        let summary = self
            .language_model
            .complete(prompts::restaurant_summary(&details, price, query))
            .await?;

        let link = place_link(&details.place_id);
        let pick = RestaurantPick {
            name: details.name,
            ai_summary: summary,
            rating: details.rating,
            review_count: details.user_ratings_total,
            estimated_price: price.symbol().to_string(),
            map_link: link.clone(),
            detail_link: link,
        };
        Ok((details.place_id, pick))
    }

    async fn pick_cafe(
        &self,
        query: &SearchQuery,
        at: Coordinates,
    ) -> Result<(String, CafePick), DomainError> {
        let search = PlaceSearch {
            query: prompts::cafe_search_term(query),
            near: at,
            radius_m: CAFE_RADIUS_M,
        };
        let details = self.top_match(&search, "cafe").await?;

        let price = PriceTier::from_price_level(details.price_level).unwrap_or(PriceTier::CAFE_FALLBACK);
        let analysis = self
            .language_model
            .complete(prompts::cafe_analysis(&details, query))
            .await?;

        let link = place_link(&details.place_id);
        let pick = CafePick {
            name: details.name,
            ai_analysis: analysis,
            rating: details.rating,
            estimated_price: price.symbol().to_string(),
            map_link: link.clone(),
            detail_link: link,
            distance_from_restaurant: CAFE_DISTANCE_PLACEHOLDER.to_string(),
        };
        Ok((details.place_id, pick))
    }

    /// Details of the first ranked text search hit
    async fn top_match(
        &self,
        search: &PlaceSearch,
        kind: &'static str,
    ) -> Result<PlaceDetails, DomainError> {
        let hits = self.places.text_search(search).await?;
        let first = hits.into_iter().next().ok_or(DomainError::NoPlaceFound(kind))?;
        debug!(kind, place_id = %first.place_id, name = %first.name, "place selected");
        self.places.details(&first.place_id).await
    }
}

/// Raw payload stored next to the recommendation
fn provenance(at: Coordinates, weather: &CurrentWeather, restaurant_id: &str, cafe_id: &str) -> JsonValue {
    json!({
        "fromOpenAI": true,
        "coordinates": { "lat": at.lat, "lon": at.lon },
        "weather": {
            "temperature": weather.temperature,
            "weather_code": weather.weather_code,
        },
        "restaurant_place_id": restaurant_id,
        "cafe_place_id": cafe_id,
    })
}
