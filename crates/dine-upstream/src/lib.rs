//! # dine-upstream
//!
//! Reqwest-backed adapters for the ports the recommendation pipeline calls:
//!
//! - [`OpenAiClient`] implements `LanguageModel` (chat completions)
//! - [`OpenMeteoClient`] implements `WeatherProvider` (current conditions)
//! - [`GooglePlacesClient`] implements `PlacesProvider` (text search + details)
//!
//! Every adapter owns transport details only. Non-success statuses, bodies
//! that fail to decode and API-level error statuses all surface as
//! `DomainError::Upstream` naming the service.

mod http;
pub mod openai;
pub mod places;
pub mod weather;

pub use openai::OpenAiClient;
pub use places::GooglePlacesClient;
pub use weather::OpenMeteoClient;
