//! Domain entities - core business objects

mod audit_log;
mod recommendation;
mod search;
mod user;

pub use audit_log::{AuditAction, AuditLog};
pub use recommendation::{place_link, CafePick, Recommendation, RecommendationSummary, RestaurantPick};
pub use search::{Search, SearchQuery, SearchStatus};
pub use user::{normalize_email, Role, User};
