//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateSearchRequest, LoginRequest, RegisterRequest};
pub use responses::{
    AuditLogResponse, CreatedResponse, DeletedResponse, HealthChecks, ItemsResponse,
    LoginResponse, LoginUserResponse, MeResponse, OkResponse, ReadinessResponse,
    RecommendationResponse, ResultDetailResponse, SearchListItem, SearchResponse, UserResponse,
};
