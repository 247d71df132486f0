//! HTTP client for the forecast API.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::WeatherError;
use crate::types::{ApiErrorResponse, ForecastResponse};

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const FORECAST_DAYS: &str = "7";

/// Client for the forecast endpoint. No API key is needed.
#[derive(Debug)]
pub struct ForecastClient {
    client: Client,
    base_url: Url,
}

impl ForecastClient {
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, WeatherError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`WeatherError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| WeatherError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches current conditions and a 7-day daily forecast, with times
    /// reported in `timezone` (an IANA name such as `"Asia/Kolkata"`).
    ///
    /// # Errors
    ///
    /// - [`WeatherError::Api`] if the API rejects the request with a reason.
    /// - [`WeatherError::Http`] on network failure.
    /// - [`WeatherError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`WeatherError::Deserialize`] if the body is not the expected shape.
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<ForecastResponse, WeatherError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &latitude.to_string())
            .append_pair("longitude", &longitude.to_string())
            .append_pair("current", CURRENT_FIELDS)
            .append_pair("daily", DAILY_FIELDS)
            .append_pair("timezone", timezone)
            .append_pair("forecast_days", FORECAST_DAYS);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(ApiErrorResponse { reason }) = serde_json::from_str(&body) {
                return Err(WeatherError::Api { reason });
            }
            return Err(WeatherError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::Deserialize {
            context: format!("forecast(lat={latitude}, lon={longitude})"),
            source: e,
        })
    }
}
