//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod recommendation;
mod search;
mod user;

pub use audit_log::AuditLogModel;
pub use recommendation::RecommendationModel;
pub use search::{SearchListingModel, SearchModel};
pub use user::UserModel;
