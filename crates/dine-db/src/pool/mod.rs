//! Database connection pool and migrations

mod postgres;

pub use postgres::{create_pool, ping, run_migrations, PoolSettings, MIGRATIONS_DIR};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
