//! HTTP client for the search provider.
//!
//! Wraps `reqwest` with API key management, query construction for the two
//! engines, and typed response decoding. Provider-reported failures (an
//! `"error"` field in a `200 OK` body) surface as [`SearchError::Provider`].

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SearchError;
use crate::types::{
    ErrorResponse, HotelSearchResponse, LocalSearchResponse, ProviderResponse, RawLocalResult,
    RawProperty,
};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";

/// The provider engines this client speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    GoogleHotels,
    GoogleLocal,
}

impl Engine {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoogleHotels => "google_hotels",
            Self::GoogleLocal => "google_local",
        }
    }
}

/// Parameters for a `google_hotels` search.
#[derive(Debug, Clone)]
pub struct HotelQuery<'a> {
    pub q: &'a str,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub currency: &'a str,
    pub country: &'a str,
    pub language: &'a str,
}

/// Parameters for a `google_local` search.
#[derive(Debug, Clone)]
pub struct LocalQuery<'a> {
    pub q: &'a str,
    /// Map viewport, e.g. `"@15.2993,74.1240,14z"`.
    pub map_center: &'a str,
    pub language: &'a str,
}

/// Client for the search provider's JSON endpoint.
///
/// Use [`SearchClient::new`] for production or [`SearchClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SearchClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// Unlike a REST root, `base_url` is the full search endpoint including
    /// its path, e.g. `http://127.0.0.1:4000/search.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| SearchError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Searches hotel listings for a place and stay window.
    ///
    /// Items that fail to decode individually are skipped with a warning.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Provider`] if the body carries an `"error"` field.
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the body is not the expected shape.
    pub async fn search_hotels(
        &self,
        query: &HotelQuery<'_>,
    ) -> Result<Vec<RawProperty>, SearchError> {
        let check_in = query.check_in.format("%Y-%m-%d").to_string();
        let check_out = query.check_out.format("%Y-%m-%d").to_string();
        let adults = query.adults.to_string();
        let url = self.build_url(
            Engine::GoogleHotels,
            &[
                ("q", query.q),
                ("check_in_date", &check_in),
                ("check_out_date", &check_out),
                ("adults", &adults),
                ("currency", query.currency),
                ("gl", query.country),
                ("hl", query.language),
            ],
        );

        let body = self.request_json(&url).await?;
        let response: HotelSearchResponse = decode(body, Engine::GoogleHotels, query.q)?;
        Ok(decode_items(response.properties, Engine::GoogleHotels))
    }

    /// Searches local businesses (restaurants) around the configured map center.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Provider`] if the body carries an `"error"` field.
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the body is not the expected shape.
    pub async fn search_restaurants(
        &self,
        query: &LocalQuery<'_>,
    ) -> Result<Vec<RawLocalResult>, SearchError> {
        let url = self.build_url(
            Engine::GoogleLocal,
            &[
                ("q", query.q),
                ("ll", query.map_center),
                ("hl", query.language),
            ],
        );

        let body = self.request_json(&url).await?;
        let response: LocalSearchResponse = decode(body, Engine::GoogleLocal, query.q)?;
        Ok(decode_items(response.local_results, Engine::GoogleLocal))
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    fn build_url(&self, engine: Engine, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", engine.as_str());
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("api_key", &self.api_key);
        }
        url
    }

    /// Sends a GET request and parses the body as JSON.
    ///
    /// A non-2xx response whose body still carries the provider's `"error"`
    /// field is reported as [`SearchError::Provider`]; any other non-2xx is
    /// [`SearchError::UnexpectedStatus`]. The URL carries the API key, so it
    /// never appears in errors or logs.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SearchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            if let Ok(ErrorResponse { error }) = serde_json::from_str(&body) {
                return Err(SearchError::Provider(error));
            }
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: format!("{} response", url.path()),
            source: e,
        })
    }
}

/// Splits a provider body into its error or success payload.
fn decode<T: DeserializeOwned>(
    body: serde_json::Value,
    engine: Engine,
    q: &str,
) -> Result<T, SearchError> {
    let parsed: ProviderResponse<T> =
        serde_json::from_value(body).map_err(|e| SearchError::Deserialize {
            context: format!("{}(q={q})", engine.as_str()),
            source: e,
        })?;
    match parsed {
        ProviderResponse::Success(payload) => Ok(payload),
        ProviderResponse::Error(e) => Err(SearchError::Provider(e.error)),
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<serde_json::Value>, engine: Engine) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(
                    engine = engine.as_str(),
                    index,
                    error = %e,
                    "skipping undecodable search result"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> SearchClient {
        SearchClient::with_base_url("test-key", 30, "tripfeed-test/0.1", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_puts_engine_first_and_key_last() {
        let client = test_client("https://serpapi.com/search.json");
        let url = client.build_url(Engine::GoogleLocal, &[("q", "cafes"), ("hl", "en")]);
        assert_eq!(
            url.as_str(),
            "https://serpapi.com/search.json?engine=google_local&q=cafes&hl=en&api_key=test-key"
        );
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://serpapi.com/search.json");
        let url = client.build_url(Engine::GoogleLocal, &[("q", "restaurants North Goa & more")]);
        assert!(
            url.as_str().contains("restaurants+North+Goa+%26+more"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let err = SearchClient::with_base_url("k", 30, "ua", "not a url").unwrap_err();
        assert!(matches!(err, SearchError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = test_client("https://serpapi.com/search.json");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("test-key"));
    }

    #[test]
    fn decode_maps_error_field_to_provider_error() {
        let body = serde_json::json!({"error": "Google hasn't returned any results."});
        let err = decode::<HotelSearchResponse>(body, Engine::GoogleHotels, "Goa").unwrap_err();
        assert!(matches!(err, SearchError::Provider(ref m) if m.contains("any results")));
    }

    #[test]
    fn decode_items_skips_bad_entries() {
        let items = vec![
            serde_json::json!({"title": "Good"}),
            serde_json::json!({"title": 42}),
            serde_json::json!({"title": "Also good"}),
        ];
        let decoded: Vec<RawLocalResult> = decode_items(items, Engine::GoogleLocal);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].title.as_deref(), Some("Also good"));
    }
}
