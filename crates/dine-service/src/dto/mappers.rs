//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use dine_core::{AuditLog, Recommendation, Search, SearchListing, SearchQuery, User};

use super::responses::{
    AuditLogResponse, LoginUserResponse, RecommendationResponse, SearchListItem,
    SearchQueryResponse, SearchResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for LoginUserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            role: user.role,
        }
    }
}

// ============================================================================
// Search Mappers
// ============================================================================

impl From<&SearchQuery> for SearchQueryResponse {
    fn from(query: &SearchQuery) -> Self {
        Self {
            location: query.location.clone(),
            mood: query.mood.clone(),
            category: query.category.clone(),
            companions: query.companions.clone(),
            budget: query.budget,
            atmosphere: query.atmosphere.clone(),
        }
    }
}

impl From<&Search> for SearchResponse {
    fn from(search: &Search) -> Self {
        Self {
            id: search.id.to_string(),
            user_id: search.user_id.to_string(),
            query: SearchQueryResponse::from(&search.query),
            status: search.status.as_str().to_string(),
            created_at: search.created_at,
            updated_at: search.updated_at,
        }
    }
}

impl From<&SearchListing> for SearchListItem {
    fn from(listing: &SearchListing) -> Self {
        Self {
            search: SearchResponse::from(&listing.search),
            rec_id: listing.rec_id.map(|id| id.to_string()),
        }
    }
}

// ============================================================================
// Recommendation Mappers
// ============================================================================

impl From<&Recommendation> for RecommendationResponse {
    fn from(rec: &Recommendation) -> Self {
        Self {
            id: rec.id.to_string(),
            search_id: rec.search_id.to_string(),
            summary: rec.summary.clone(),
            restaurant: rec.restaurant.clone(),
            cafe: rec.cafe.clone(),
            raw: rec.raw.clone(),
            created_at: rec.created_at,
        }
    }
}

// ============================================================================
// Audit Mappers
// ============================================================================

impl From<&AuditLog> for AuditLogResponse {
    fn from(entry: &AuditLog) -> Self {
        Self {
            id: entry.id.to_string(),
            actor_id: entry.actor_id.map(|id| id.to_string()),
            action: entry.action.as_str().to_string(),
            target_id: entry.target_id.map(|id| id.to_string()),
            meta: entry.meta.clone(),
            created_at: entry.created_at,
        }
    }
}
