//! # dine-service
//!
//! Application layer containing the services, the recommendation pipeline and DTOs.

pub mod dto;
pub mod recommend;
pub mod services;

pub use recommend::{extract_coordinates, RecommendationDraft, Recommender};
pub use services::{
    Actor, AdminService, AuditTrail, AuthService, SearchService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
