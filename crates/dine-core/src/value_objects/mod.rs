//! Value objects - immutable types that represent domain concepts

mod category;
mod coordinates;
mod price_tier;
mod snowflake;
mod weather;

pub use category::category_query;
pub use coordinates::Coordinates;
pub use price_tier::PriceTier;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use weather::{weather_label, UNKNOWN_WEATHER_LABEL};
