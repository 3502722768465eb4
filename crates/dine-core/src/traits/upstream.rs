//! Upstream ports - the third-party services the recommendation pipeline calls
//!
//! Adapters live in `dine-upstream`; tests substitute in-memory stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{weather_label, Coordinates};

/// Result type for upstream calls
pub type UpstreamResult<T> = Result<T, DomainError>;

// ============================================================================
// Language model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// A system instruction followed by a single user prompt
    pub fn new(system: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            temperature,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Text of the first choice. An empty or missing reply is `EmptyModelReply`.
    async fn complete(&self, request: ChatRequest) -> UpstreamResult<String>;
}

// ============================================================================
// Weather
// ============================================================================

/// Current conditions at a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weather_code: i64,
}

impl CurrentWeather {
    /// `"{label} {temp}℃"`
    pub fn describe(&self) -> String {
        format!("{} {}℃", weather_label(self.weather_code), self.temperature)
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, at: Coordinates) -> UpstreamResult<CurrentWeather>;
}

// ============================================================================
// Places
// ============================================================================

/// Text search around a point
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSearch {
    pub query: String,
    pub near: Coordinates,
    pub radius_m: u32,
}

/// A ranked text-search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
}

/// Place details
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub formatted_address: Option<String>,
    pub price_level: Option<i64>,
    pub location: Option<Coordinates>,
}

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Ranked results, best first. May be empty.
    async fn text_search(&self, search: &PlaceSearch) -> UpstreamResult<Vec<PlaceSummary>>;

    async fn details(&self, place_id: &str) -> UpstreamResult<PlaceDetails>;
}
