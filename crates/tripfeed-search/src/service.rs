//! Cache-first hotel and restaurant fetches.
//!
//! Every fetch is total: a cache hit, a fresh provider answer, or one of the
//! static fallback lists, tagged with where it came from.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tripfeed_cache::{place_key, ExpiringCache};
use tripfeed_core::{
    AppConfig, FallbackReason, Fetched, HotelRecord, RestaurantRecord, SearchDefaults,
};

use crate::client::{Engine, HotelQuery, LocalQuery, SearchClient};
use crate::error::SearchError;
use crate::fallback::{fallback_hotels, fallback_restaurants};
use crate::normalize::{normalize_hotels, normalize_restaurants};

/// How long hotel and restaurant results stay fresh.
pub const SEARCH_CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

pub const HOTELS_CACHE_PREFIX: &str = "cached_google_hotels";
pub const RESTAURANTS_CACHE_PREFIX: &str = "cached_google_restaurants";

/// Guests per room on every hotel query.
const ADULTS: u32 = 2;
const DAYS_UNTIL_CHECK_IN: u64 = 7;
const STAY_NIGHTS: u64 = 2;

/// The `(check_in, check_out)` dates quoted for hotels searched on `today`:
/// a two-night stay starting a week out.
#[must_use]
pub fn stay_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let check_in = today + chrono::Days::new(DAYS_UNTIL_CHECK_IN);
    (check_in, check_in + chrono::Days::new(STAY_NIGHTS))
}

#[derive(Debug)]
pub struct SearchService {
    /// `None` when no API key is configured.
    client: Option<SearchClient>,
    cache: ExpiringCache,
    defaults: SearchDefaults,
}

impl SearchService {
    #[must_use]
    pub fn new(
        client: Option<SearchClient>,
        cache: ExpiringCache,
        defaults: SearchDefaults,
    ) -> Self {
        Self {
            client,
            cache,
            defaults,
        }
    }

    /// Builds the service from application config. A missing API key is not
    /// an error here; fetches degrade to fallback data instead.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP client cannot be built or the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig, cache: ExpiringCache) -> Result<Self, SearchError> {
        let client = config
            .search_api_key
            .as_deref()
            .map(|key| {
                SearchClient::with_base_url(
                    key,
                    config.request_timeout_secs,
                    &config.user_agent,
                    &config.search_base_url,
                )
            })
            .transpose()?;
        Ok(Self::new(client, cache, config.search.clone()))
    }

    /// Hotels for `location`, from cache unless `force_refresh` is set.
    pub async fn fetch_hotels(
        &self,
        location: &str,
        force_refresh: bool,
    ) -> Fetched<Vec<HotelRecord>> {
        let key = place_key(HOTELS_CACHE_PREFIX, location);
        if let Some(hit) = self.cached(&key, force_refresh).await {
            return Fetched::cached(hit);
        }

        let live = self.live_hotels(location).await;
        self.settle(&key, Engine::GoogleHotels, location, live, fallback_hotels)
            .await
    }

    /// Restaurants around `location`, from cache unless `force_refresh` is set.
    pub async fn fetch_restaurants(
        &self,
        location: &str,
        force_refresh: bool,
    ) -> Fetched<Vec<RestaurantRecord>> {
        let key = place_key(RESTAURANTS_CACHE_PREFIX, location);
        if let Some(hit) = self.cached(&key, force_refresh).await {
            return Fetched::cached(hit);
        }

        let live = self.live_restaurants(location).await;
        self.settle(&key, Engine::GoogleLocal, location, live, fallback_restaurants)
            .await
    }

    async fn live_hotels(&self, location: &str) -> Result<Vec<HotelRecord>, SearchError> {
        let client = self.client()?;
        let (check_in, check_out) = stay_window(Local::now().date_naive());
        let query = HotelQuery {
            q: location,
            check_in,
            check_out,
            adults: ADULTS,
            currency: &self.defaults.currency,
            country: &self.defaults.country,
            language: &self.defaults.language,
        };

        tracing::info!(location, %check_in, %check_out, "fetching hotels");
        let properties = client.search_hotels(&query).await?;
        Ok(normalize_hotels(properties, location))
    }

    async fn live_restaurants(
        &self,
        location: &str,
    ) -> Result<Vec<RestaurantRecord>, SearchError> {
        let client = self.client()?;
        let q = format!("restaurants {location}");
        let query = LocalQuery {
            q: &q,
            map_center: &self.defaults.map_center,
            language: &self.defaults.language,
        };

        tracing::info!(location, "fetching restaurants");
        let results = client.search_restaurants(&query).await?;
        Ok(normalize_restaurants(results, location))
    }

    fn client(&self) -> Result<&SearchClient, SearchError> {
        self.client.as_ref().ok_or(SearchError::MissingCredential)
    }

    async fn cached<T: DeserializeOwned>(&self, key: &str, force_refresh: bool) -> Option<T> {
        if force_refresh {
            tracing::debug!(key, "refresh requested, skipping cache");
            return None;
        }
        self.cache.get(key, SEARCH_CACHE_TTL).await
    }

    /// Caches and returns a non-empty live result; anything else becomes
    /// fallback data with the matching reason.
    async fn settle<T: Serialize>(
        &self,
        key: &str,
        engine: Engine,
        location: &str,
        live: Result<Vec<T>, SearchError>,
        fallback: fn() -> Vec<T>,
    ) -> Fetched<Vec<T>> {
        match live {
            Ok(records) if records.is_empty() => {
                tracing::warn!(
                    engine = engine.as_str(),
                    location,
                    "search returned no usable results, serving fallback"
                );
                Fetched::fallback(fallback(), FallbackReason::EmptyResult)
            }
            Ok(records) => {
                self.cache.set(key, &records).await;
                tracing::info!(
                    engine = engine.as_str(),
                    location,
                    count = records.len(),
                    "search results cached"
                );
                Fetched::network(records)
            }
            Err(e) => {
                tracing::warn!(
                    engine = engine.as_str(),
                    location,
                    error = %e,
                    "search failed, serving fallback"
                );
                Fetched::fallback(fallback(), e.fallback_reason())
            }
        }
    }
}
