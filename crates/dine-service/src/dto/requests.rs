//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Missing string fields deserialize as empty so the required-field checks
//! answer with a 400 instead of a body rejection.

use dine_core::SearchQuery;
use serde::{Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Search Requests
// ============================================================================

/// Submit a new recommendation search
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateSearchRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[serde(default)]
    pub mood: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub companions: String,

    /// Won; accepts a number or a numeric string, absent means 0
    #[serde(default, deserialize_with = "budget_from_any")]
    #[validate(range(min = 0, message = "budget must not be negative"))]
    pub budget: i64,

    #[serde(default)]
    pub atmosphere: String,
}

impl From<CreateSearchRequest> for SearchQuery {
    fn from(request: CreateSearchRequest) -> Self {
        Self {
            location: request.location.trim().to_string(),
            mood: request.mood,
            category: request.category,
            companions: request.companions,
            budget: request.budget,
            atmosphere: request.atmosphere,
        }
    }
}

fn budget_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Budget {
        Int(i64),
        Float(f64),
        Text(String),
        Null(()),
    }

    match Budget::deserialize(deserializer)? {
        Budget::Int(value) => Ok(value),
        Budget::Float(value) if value.is_finite() => Ok(value.trunc() as i64),
        Budget::Float(_) => Err(D::Error::custom("budget must be a finite number")),
        Budget::Text(text) if text.trim().is_empty() => Ok(0),
        Budget::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("budget must be a number")),
        Budget::Null(()) => Ok(0),
    }
}
