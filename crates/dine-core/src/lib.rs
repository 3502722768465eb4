//! # dine-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! ports for the outside services the recommendation pipeline talks to.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_email, place_link, AuditAction, AuditLog, CafePick, Recommendation,
    RecommendationSummary, RestaurantPick, Role, Search, SearchQuery, SearchStatus, User,
};
pub use error::DomainError;
pub use traits::{
    AuditLogRepository, ChatMessage, ChatRequest, ChatRole, CurrentWeather, LanguageModel,
    PlaceDetails, PlaceSearch, PlaceSummary, PlacesProvider, RecommendationRepository,
    RepoResult, SearchListing, SearchRepository, UpstreamResult, UserRepository,
    WeatherProvider,
};
pub use value_objects::{
    category_query, weather_label, Coordinates, PriceTier, Snowflake, SnowflakeGenerator,
    SnowflakeParseError, UNKNOWN_WEATHER_LABEL,
};
