//! Service context - dependency container for services
//!
//! Holds the repositories, the upstream ports and the auth helpers every
//! service borrows for the length of one request.

use std::sync::Arc;

use dine_common::auth::{JwtService, PasswordService};
use dine_core::traits::{
    AuditLogRepository, LanguageModel, PlacesProvider, RecommendationRepository,
    SearchRepository, UserRepository, WeatherProvider,
};
use dine_core::{Snowflake, SnowflakeGenerator};
use dine_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// It provides access to:
/// - Database repositories (and the pool, when backed by PostgreSQL)
/// - The language model, weather and places ports used by the recommender
/// - JWT and password services for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when running on in-memory repositories
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    search_repo: Arc<dyn SearchRepository>,
    recommendation_repo: Arc<dyn RecommendationRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,

    // Upstream ports
    language_model: Arc<dyn LanguageModel>,
    weather: Arc<dyn WeatherProvider>,
    places: Arc<dyn PlacesProvider>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Start a builder; every dependency except the pool is required
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// PostgreSQL pool, if the repositories are database backed
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn search_repo(&self) -> &dyn SearchRepository {
        self.search_repo.as_ref()
    }

    pub fn recommendation_repo(&self) -> &dyn RecommendationRepository {
        self.recommendation_repo.as_ref()
    }

    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    // === Upstream Ports ===

    pub fn language_model(&self) -> &dyn LanguageModel {
        self.language_model.as_ref()
    }

    pub fn weather(&self) -> &dyn WeatherProvider {
        self.weather.as_ref()
    }

    pub fn places(&self) -> &dyn PlacesProvider {
        self.places.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> PasswordService {
        self.password_service
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("upstreams", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    search_repo: Option<Arc<dyn SearchRepository>>,
    recommendation_repo: Option<Arc<dyn RecommendationRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    language_model: Option<Arc<dyn LanguageModel>>,
    weather: Option<Arc<dyn WeatherProvider>>,
    places: Option<Arc<dyn PlacesProvider>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn search_repo(mut self, repo: Arc<dyn SearchRepository>) -> Self {
        self.search_repo = Some(repo);
        self
    }

    pub fn recommendation_repo(mut self, repo: Arc<dyn RecommendationRepository>) -> Self {
        self.recommendation_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn language_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.language_model = Some(model);
        self
    }

    pub fn weather(mut self, provider: Arc<dyn WeatherProvider>) -> Self {
        self.weather = Some(provider);
        self
    }

    pub fn places(mut self, provider: Arc<dyn PlacesProvider>) -> Self {
        self.places = Some(provider);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: require(self.user_repo, "user_repo")?,
            search_repo: require(self.search_repo, "search_repo")?,
            recommendation_repo: require(self.recommendation_repo, "recommendation_repo")?,
            audit_repo: require(self.audit_repo, "audit_repo")?,
            language_model: require(self.language_model, "language_model")?,
            weather: require(self.weather, "weather")?,
            places: require(self.places, "places")?,
            jwt_service: require(self.jwt_service, "jwt_service")?,
            password_service: PasswordService::new(),
            snowflake_generator: require(self.snowflake_generator, "snowflake_generator")?,
        })
    }
}

fn require<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
