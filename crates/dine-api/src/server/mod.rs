//! Server setup and initialization
//!
//! Wires configuration into repositories, upstream clients and services, then
//! serves the router.

use std::sync::Arc;

use axum::Router;
use dine_common::{AppConfig, AppError, JwtService};
use dine_core::SnowflakeGenerator;
use dine_db::{
    create_pool, run_migrations, PgAuditLogRepository, PgRecommendationRepository,
    PgSearchRepository, PgUserRepository, PoolSettings,
};
use dine_service::{AuthService, ServiceContext};
use dine_upstream::{GooglePlacesClient, OpenAiClient, OpenMeteoClient};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::handlers::not_found;
use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete application with all routes and middleware
///
/// # Errors
/// Returns a config error when the middleware settings are unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api
        .merge(health_routes())
        .fallback(not_found)
        .with_state(state))
}

/// Connect to the database and build every dependency the services need
///
/// # Errors
/// Fails when the database is unreachable, migrations fail or an HTTP client
/// cannot be constructed
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolSettings::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let upstream = &config.upstream;
    let language_model = OpenAiClient::from_config(&upstream.openai).map_err(client_error)?;
    let weather = OpenMeteoClient::from_config(&upstream.weather).map_err(client_error)?;
    let places = GooglePlacesClient::from_config(&upstream.google_maps).map_err(client_error)?;

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.expiry_seconds));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContext::builder()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .search_repo(Arc::new(PgSearchRepository::new(pool.clone())))
        .recommendation_repo(Arc::new(PgRecommendationRepository::new(pool.clone())))
        .audit_repo(Arc::new(PgAuditLogRepository::new(pool)))
        .language_model(Arc::new(language_model))
        .weather(Arc::new(weather))
        .places(Arc::new(places))
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

fn client_error(e: reqwest::Error) -> AppError {
    AppError::Config(format!("Failed to build HTTP client: {e}"))
}

/// Create the configured administrator if it does not exist yet
///
/// # Errors
/// Returns an error when the user store cannot be reached
pub async fn seed_admin(state: &AppState) -> Result<(), AppError> {
    let Some(admin) = &state.config().admin else {
        return Ok(());
    };

    let service = AuthService::new(state.service_context());
    match service.ensure_admin(&admin.email, &admin.password).await {
        Ok(true) => info!(email = %admin.email, "Administrator account created"),
        Ok(false) => info!(email = %admin.email, "Administrator account already present"),
        Err(e) if e.status_code() == 400 => {
            warn!(error = %e, "Skipping administrator seed with invalid credentials");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup fails or the listener dies
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    seed_admin(&state).await?;
    let app = create_app(state)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
