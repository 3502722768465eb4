//! Configuration structs

mod app_config;

pub use app_config::{
    AdminSeedConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    Environment, GoogleMapsConfig, JwtConfig, OpenAiConfig, RateLimitConfig, ServerConfig,
    SnowflakeConfig, UpstreamConfig, WeatherConfig,
};
