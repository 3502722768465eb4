//! Reqwest-backed `PlacesProvider`

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use dine_common::GoogleMapsConfig;
use dine_core::{DomainError, PlaceDetails, PlaceSearch, PlaceSummary, PlacesProvider, UpstreamResult};

use super::dto::{check_status, DetailsResponseDto, TextSearchResponseDto};
use crate::http::{build_client, map_transport_error, read_json, trim_base};

const SERVICE: &str = "places";
const LANGUAGE: &str = "ko";
const DETAIL_FIELDS: &str =
    "name,rating,user_ratings_total,formatted_address,geometry,place_id,price_level";

/// Google Places web service client
pub struct GooglePlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client()?,
            base_url: trim_base(base_url),
            api_key: api_key.into(),
        })
    }

    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn from_config(config: &GoogleMapsConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url, config.api_key.clone())
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    #[instrument(skip(self, search), fields(query = %search.query, radius = search.radius_m))]
    async fn text_search(&self, search: &PlaceSearch) -> UpstreamResult<Vec<PlaceSummary>> {
        let response = self
            .client
            .get(format!("{}/maps/api/place/textsearch/json", self.base_url))
            .query(&[
                ("query", search.query.clone()),
                ("location", search.near.to_query_param()),
                ("radius", search.radius_m.to_string()),
                ("language", LANGUAGE.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, e))?;

        let decoded: TextSearchResponseDto = read_json(SERVICE, response).await?;
        check_status(&decoded.status, decoded.error_message.as_deref())
            .map_err(|message| DomainError::upstream(SERVICE, message))?;

        debug!(hits = decoded.results.len(), "Text search finished");
        Ok(decoded.results.into_iter().map(PlaceSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn details(&self, place_id: &str) -> UpstreamResult<PlaceDetails> {
        let response = self
            .client
            .get(format!("{}/maps/api/place/details/json", self.base_url))
            .query(&[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("language", LANGUAGE),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, e))?;

        let decoded: DetailsResponseDto = read_json(SERVICE, response).await?;
        check_status(&decoded.status, decoded.error_message.as_deref())
            .map_err(|message| DomainError::upstream(SERVICE, message))?;

        decoded
            .result
            .map(|result| result.into_details(place_id))
            .ok_or_else(|| DomainError::upstream(SERVICE, format!("no details for {place_id}")))
    }
}
