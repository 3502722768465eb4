//! # dine-db
//!
//! Database layer implementing the `dine-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use dine_db::{create_pool, run_migrations, PgUserRepository, PoolSettings};
//!
//! let pool = create_pool(&PoolSettings::from(&config.database)).await?;
//! run_migrations(&pool).await?;
//! let users = PgUserRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, run_migrations, PgPool, PoolSettings, MIGRATIONS_DIR};
pub use repositories::{
    PgAuditLogRepository, PgRecommendationRepository, PgSearchRepository, PgUserRepository,
};
