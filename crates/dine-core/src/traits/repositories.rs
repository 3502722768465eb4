//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{AuditLog, Recommendation, Search, SearchStatus, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user. A taken email yields `EmailAlreadyExists`.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Search Repository
// ============================================================================

/// A search together with the id of its recommendation, if one exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchListing {
    pub search: Search,
    pub rec_id: Option<Snowflake>,
}

#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Search>>;

    async fn create(&self, search: &Search) -> RepoResult<()>;

    /// Set the status (and bump `updated_at`)
    async fn update_status(&self, id: Snowflake, status: SearchStatus) -> RepoResult<()>;

    /// A user's searches, newest first
    async fn list_by_user(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<SearchListing>>;

    /// Every search, newest first
    async fn list_all(&self, limit: i64) -> RepoResult<Vec<SearchListing>>;

    /// Delete a search; returns the number of rows removed
    async fn delete(&self, id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Recommendation Repository
// ============================================================================

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Recommendation>>;

    /// Insert and mark the owning search `done` in one transaction.
    /// A second recommendation for the same search yields `RecommendationExists`;
    /// a missing search yields `SearchNotFound` and nothing is stored.
    async fn complete(&self, recommendation: &Recommendation) -> RepoResult<()>;

    async fn delete_by_search(&self, search_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, entry: &AuditLog) -> RepoResult<()>;

    /// Newest entries first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<AuditLog>>;
}
