//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use dine_core::{CafePick, RecommendationSummary, RestaurantPick, Role};
use serde::Serialize;
use serde_json::Value as JsonValue;

// ============================================================================
// Common Response Types
// ============================================================================

/// `{items: [...]}` list wrapper
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// `{ok: true}`
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{id}` of a freshly created resource
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// `{deleted: n}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

// ============================================================================
// Auth / User Responses
// ============================================================================

/// User as shown in the login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub email: String,
    pub role: Role,
}

/// Login response with the bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUserResponse,
}

/// Current user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// `GET /api/me`
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

// ============================================================================
// Search / Result Responses
// ============================================================================

/// A stored search and its query
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub id: String,
    pub user_id: String,
    pub query: SearchQueryResponse,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchQueryResponse {
    pub location: String,
    pub mood: String,
    pub category: String,
    pub companions: String,
    pub budget: i64,
    pub atmosphere: String,
}

/// History row: the search plus the id of its recommendation, if any
#[derive(Debug, Clone, Serialize)]
pub struct SearchListItem {
    #[serde(flatten)]
    pub search: SearchResponse,
    pub rec_id: Option<String>,
}

/// A persisted recommendation
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub id: String,
    pub search_id: String,
    pub summary: RecommendationSummary,
    pub restaurant: RestaurantPick,
    pub cafe: CafePick,
    pub raw: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// `GET /api/results/:id`
#[derive(Debug, Serialize)]
pub struct ResultDetailResponse {
    pub result: RecommendationResponse,
    pub search: SearchResponse,
}

// ============================================================================
// Audit Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: String,
    pub actor_id: Option<String>,
    pub action: String,
    pub target_id: Option<String>,
    pub meta: JsonValue,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn new(database_ok: bool) -> Self {
        let label = if database_ok { "healthy" } else { "unhealthy" };
        Self {
            status: if database_ok { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.database == "healthy"
    }
}
