//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Search not found: {0}")]
    SearchNotFound(Snowflake),

    #[error("Recommendation not found: {0}")]
    RecommendationNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the owner of this search")]
    NotSearchOwner,

    #[error("Administrator role required")]
    AdminOnly,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Search already has a recommendation")]
    RecommendationExists,

    // =========================================================================
    // Recommendation Pipeline Errors
    // =========================================================================
    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    #[error("{service} request failed: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("No {0} found")]
    NoPlaceFound(&'static str),

    #[error("Language model returned an empty reply")]
    EmptyModelReply,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Build an upstream failure for the named service
    pub fn upstream(service: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::SearchNotFound(_) => "UNKNOWN_SEARCH",
            Self::RecommendationNotFound(_) => "UNKNOWN_RECOMMENDATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidEmail => "INVALID_EMAIL",

            // Authorization
            Self::NotSearchOwner => "NOT_SEARCH_OWNER",
            Self::AdminOnly => "ADMIN_ONLY",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RecommendationExists => "RECOMMENDATION_EXISTS",

            // Pipeline
            Self::Geocoding(_) => "GEOCODING_FAILED",
            Self::Upstream { .. } => "UPSTREAM_FAILED",
            Self::NoPlaceFound(_) => "NO_PLACE_FOUND",
            Self::EmptyModelReply => "EMPTY_MODEL_REPLY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::SearchNotFound(_) | Self::RecommendationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::MissingField(_) | Self::InvalidEmail
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotSearchOwner | Self::AdminOnly)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::RecommendationExists)
    }

    /// Check if this error came out of the recommendation pipeline
    pub fn is_pipeline(&self) -> bool {
        matches!(
            self,
            Self::Geocoding(_)
                | Self::Upstream { .. }
                | Self::NoPlaceFound(_)
                | Self::EmptyModelReply
        )
    }
}
