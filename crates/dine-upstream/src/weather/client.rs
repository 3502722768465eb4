//! Reqwest-backed `WeatherProvider`

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use dine_common::WeatherConfig;
use dine_core::{Coordinates, CurrentWeather, DomainError, UpstreamResult, WeatherProvider};

use super::dto::ForecastResponseDto;
use crate::http::{build_client, map_transport_error, read_json, trim_base};

const SERVICE: &str = "weather";
const TIMEZONE: &str = "Asia/Seoul";

/// Open-Meteo current conditions client
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client()?,
            base_url: trim_base(base_url),
        })
    }

    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn from_config(config: &WeatherConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(skip(self, at), fields(lat = at.lat, lon = at.lon))]
    async fn current(&self, at: Coordinates) -> UpstreamResult<CurrentWeather> {
        let response = self
            .client
            .get(format!("{}/v1/forecast", self.base_url))
            .query(&[
                ("latitude", at.lat.to_string()),
                ("longitude", at.lon.to_string()),
                ("current", "temperature_2m,weather_code".to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, e))?;

        let decoded: ForecastResponseDto = read_json(SERVICE, response).await?;
        let current = decoded
            .current
            .ok_or_else(|| DomainError::upstream(SERVICE, "response has no current block"))?;

        debug!(code = current.weather_code, temp = current.temperature_2m, "Current weather");
        Ok(current.into())
    }
}
