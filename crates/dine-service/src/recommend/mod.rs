//! Recommendation pipeline
//!
//! Geocode the location with the language model, read the current weather,
//! pick a restaurant and a cafe from the places API and let the language
//! model describe both.

mod extract;
mod orchestrator;
mod prompts;

pub use extract::extract_coordinates;
pub use orchestrator::{RecommendationDraft, Recommender};
pub use prompts::{CAFE_SEARCH_TERM, CAFE_RADIUS_M, RESTAURANT_RADIUS_M};
