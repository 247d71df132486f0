//! Current conditions and a five-day forecast from an Open-Meteo-style API.
//!
//! [`WeatherService`] caches snapshots per place for
//! [`WEATHER_CACHE_TTL`] and falls back to a static snapshot when the
//! forecast API cannot be reached.

pub mod client;
pub mod codes;
pub mod error;
pub mod fallback;
pub mod service;
pub mod transform;
pub mod types;

pub use client::ForecastClient;
pub use codes::{describe, WeatherCode};
pub use error::WeatherError;
pub use service::{WeatherService, WEATHER_CACHE_PREFIX, WEATHER_CACHE_TTL};
pub use transform::{day_label, uv_bucket};
