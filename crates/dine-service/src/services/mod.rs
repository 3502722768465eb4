//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for one request.

pub mod actor;
pub mod admin;
pub mod audit;
pub mod auth;
pub mod context;
pub mod error;
pub mod search;

pub use actor::Actor;
pub use admin::AdminService;
pub use audit::AuditTrail;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use search::SearchService;
