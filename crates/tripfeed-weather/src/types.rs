//! Forecast API response types.

use chrono::NaiveDate;
use serde::Deserialize;

/// Subset of the forecast payload requested by [`crate::ForecastClient`].
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentBlock,
    pub daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
pub struct CurrentBlock {
    /// Local time of the observation in the requested timezone, minute
    /// precision: `"2026-03-01T14:30"`.
    #[serde(default)]
    pub time: Option<String>,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    /// WMO weather interpretation code.
    pub weather_code: u16,
    pub wind_speed_10m: f64,
}

/// Parallel arrays, one element per forecast day.
#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<NaiveDate>,
    pub weather_code: Vec<u16>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

/// Body of a rejected request: `{"error": true, "reason": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub reason: String,
}
