use std::path::PathBuf;

use crate::app_config::{AppConfig, SearchDefaults};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. A missing search API key is a supported state:
/// the search service then serves fallback listings instead of calling out.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let search_api_key = lookup("SERPAPI_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let log_level = or_default("TRIPFEED_LOG_LEVEL", "info");
    let cache_dir = PathBuf::from(or_default("TRIPFEED_CACHE_DIR", "./.tripfeed-cache"));
    let search_base_url = or_default(
        "TRIPFEED_SEARCH_BASE_URL",
        "https://serpapi.com/search.json",
    );
    let forecast_base_url = or_default(
        "TRIPFEED_FORECAST_BASE_URL",
        "https://api.open-meteo.com/v1/forecast",
    );
    let request_timeout_secs = parse_u64("TRIPFEED_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRIPFEED_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("TRIPFEED_USER_AGENT", "tripfeed/0.1 (travel-companion)");

    let defaults = SearchDefaults::default();
    let search = SearchDefaults {
        currency: or_default("TRIPFEED_CURRENCY", &defaults.currency),
        country: or_default("TRIPFEED_COUNTRY", &defaults.country),
        language: or_default("TRIPFEED_LANGUAGE", &defaults.language),
        map_center: or_default("TRIPFEED_MAP_CENTER", &defaults.map_center),
    };
    let timezone = or_default("TRIPFEED_TIMEZONE", "Asia/Kolkata");

    Ok(AppConfig {
        log_level,
        cache_dir,
        search_api_key,
        search_base_url,
        forecast_base_url,
        request_timeout_secs,
        user_agent,
        search,
        timezone,
    })
}
