//! Repository implementations - PostgreSQL implementations of the `dine-core` traits

mod audit_log;
mod error;
mod recommendation;
mod search;
mod user;

pub use audit_log::PgAuditLogRepository;
pub use recommendation::PgRecommendationRepository;
pub use search::PgSearchRepository;
pub use user::PgUserRepository;
