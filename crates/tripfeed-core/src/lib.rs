//! Shared domain types and configuration for the tripfeed workspace.
//!
//! The canonical hotel, restaurant and weather records live here so that
//! the search and weather services, the cache, and the CLI all agree on a
//! single serialized shape.

pub mod app_config;
pub mod config;
pub mod fetched;
pub mod records;

use thiserror::Error;

pub use app_config::{AppConfig, SearchDefaults};
pub use config::{load_app_config, load_app_config_from_env};
pub use fetched::{FallbackReason, Fetched, Source};
pub use records::{
    AmenityIcon, Coordinates, CurrentConditions, DailyForecast, HotelRecord, ListingKind,
    RestaurantRecord, UvIndex, WeatherSnapshot,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
