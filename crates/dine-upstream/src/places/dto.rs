//! Wire types for the places text search and details endpoints
//!
//! Both endpoints answer 200 with an API-level `status`; only `OK` and
//! `ZERO_RESULTS` are successes.

use serde::Deserialize;

use dine_core::{Coordinates, PlaceDetails, PlaceSummary};

#[derive(Debug, Deserialize)]
pub(super) struct TextSearchResponseDto {
    pub(super) status: String,
    pub(super) error_message: Option<String>,
    #[serde(default)]
    pub(super) results: Vec<TextSearchResultDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TextSearchResultDto {
    pub(super) place_id: String,
    #[serde(default)]
    pub(super) name: String,
}

impl From<TextSearchResultDto> for PlaceSummary {
    fn from(dto: TextSearchResultDto) -> Self {
        PlaceSummary {
            place_id: dto.place_id,
            name: dto.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsResponseDto {
    pub(super) status: String,
    pub(super) error_message: Option<String>,
    pub(super) result: Option<DetailsResultDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsResultDto {
    pub(super) place_id: Option<String>,
    pub(super) name: String,
    pub(super) rating: Option<f64>,
    pub(super) user_ratings_total: Option<i64>,
    pub(super) formatted_address: Option<String>,
    pub(super) price_level: Option<i64>,
    pub(super) geometry: Option<GeometryDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeometryDto {
    pub(super) location: LatLngDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct LatLngDto {
    pub(super) lat: f64,
    pub(super) lng: f64,
}

impl DetailsResultDto {
    /// `requested_id` fills in when the API omits `place_id` from the result
    pub(super) fn into_details(self, requested_id: &str) -> PlaceDetails {
        PlaceDetails {
            place_id: self.place_id.unwrap_or_else(|| requested_id.to_string()),
            name: self.name,
            rating: self.rating,
            user_ratings_total: self.user_ratings_total,
            formatted_address: self.formatted_address,
            price_level: self.price_level,
            location: self
                .geometry
                .map(|g| Coordinates::new(g.location.lat, g.location.lng)),
        }
    }
}

/// `Err(message)` for API-level failures
pub(super) fn check_status(status: &str, error_message: Option<&str>) -> Result<(), String> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(match error_message {
            Some(detail) => format!("{other}: {detail}"),
            None => other.to_string(),
        }),
    }
}
