//! Ports - interfaces the domain needs from infrastructure

mod repositories;
mod upstream;

pub use repositories::{
    AuditLogRepository, RecommendationRepository, RepoResult, SearchListing, SearchRepository,
    UserRepository,
};
pub use upstream::{
    ChatMessage, ChatRequest, ChatRole, CurrentWeather, LanguageModel, PlaceDetails, PlaceSearch,
    PlaceSummary, PlacesProvider, UpstreamResult, WeatherProvider,
};
