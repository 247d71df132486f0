use std::time::Duration;

use chrono::{Local, Timelike};
use tripfeed_cache::{place_key, ExpiringCache};
use tripfeed_core::{AppConfig, Fetched, WeatherSnapshot};

use crate::client::ForecastClient;
use crate::error::WeatherError;
use crate::fallback::fallback_snapshot;
use crate::transform::{build_snapshot, observation_hour};

/// How long a place's snapshot stays fresh.
pub const WEATHER_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

pub const WEATHER_CACHE_PREFIX: &str = "weather_cache";

#[derive(Debug)]
pub struct WeatherService {
    client: ForecastClient,
    cache: ExpiringCache,
    /// IANA timezone the forecast is reported in.
    timezone: String,
}

impl WeatherService {
    #[must_use]
    pub fn new(client: ForecastClient, cache: ExpiringCache, timezone: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            timezone: timezone.into(),
        }
    }

    /// # Errors
    ///
    /// Returns [`WeatherError`] if the HTTP client cannot be built or the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig, cache: ExpiringCache) -> Result<Self, WeatherError> {
        let client = ForecastClient::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.forecast_base_url,
        )?;
        Ok(Self::new(client, cache, config.timezone.clone()))
    }

    /// Current conditions and a five-day forecast for `place`.
    ///
    /// `place` only names the cache entry; the request uses the coordinates.
    pub async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
        place: &str,
    ) -> Fetched<WeatherSnapshot> {
        let key = place_key(WEATHER_CACHE_PREFIX, place);
        if let Some(hit) = self.cache.get(&key, WEATHER_CACHE_TTL).await {
            return Fetched::cached(hit);
        }

        tracing::info!(place, latitude, longitude, "fetching weather");
        let live = self
            .client
            .forecast(latitude, longitude, &self.timezone)
            .await
            .and_then(|response| {
                let hour = observation_hour(response.current.time.as_deref())
                    .unwrap_or_else(|| Local::now().hour());
                build_snapshot(&response, hour)
            });

        match live {
            Ok(snapshot) => {
                self.cache.set(&key, &snapshot).await;
                Fetched::network(snapshot)
            }
            Err(e) => {
                tracing::warn!(place, error = %e, "weather fetch failed, serving fallback");
                Fetched::fallback(
                    fallback_snapshot(Local::now().date_naive()),
                    e.fallback_reason(),
                )
            }
        }
    }

    /// Drops every cached weather snapshot and returns how many were removed.
    pub async fn clear_weather_cache(&self) -> usize {
        self.cache
            .clear(&format!("{WEATHER_CACHE_PREFIX}_"))
            .await
    }
}
