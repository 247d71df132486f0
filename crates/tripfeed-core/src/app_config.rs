use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub cache_dir: PathBuf,
    pub search_api_key: Option<String>,
    pub search_base_url: String,
    pub forecast_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub search: SearchDefaults,
    pub timezone: String,
}

/// Locale and currency parameters sent with every search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDefaults {
    /// ISO 4217 code the hotel engine quotes prices in (e.g. `"INR"`).
    pub currency: String,
    /// Two-letter country code passed as `gl`.
    pub country: String,
    /// Two-letter language code passed as `hl`.
    pub language: String,
    /// Map viewport passed as `ll` to the local-results engine,
    /// e.g. `"@15.2993,74.1240,14z"`.
    pub map_center: String,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            country: "in".to_string(),
            language: "en".to_string(),
            map_center: "@15.2993,74.1240,14z".to_string(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("cache_dir", &self.cache_dir)
            .field(
                "search_api_key",
                &self.search_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_base_url", &self.search_base_url)
            .field("forecast_base_url", &self.forecast_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("search", &self.search)
            .field("timezone", &self.timezone)
            .finish()
    }
}
