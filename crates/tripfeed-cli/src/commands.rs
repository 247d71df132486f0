//! Subcommand handlers. Each prints its `Fetched` envelope as pretty JSON on
//! stdout; logs go to stderr.

use serde::Serialize;
use tripfeed_cache::ExpiringCache;
use tripfeed_core::{AppConfig, Fetched, HotelRecord, RestaurantRecord, WeatherSnapshot};
use tripfeed_search::SearchService;
use tripfeed_weather::WeatherService;

use crate::Commands;

/// Everything the destination screen loads at once.
#[derive(Debug, Serialize)]
pub(crate) struct ExploreReport {
    pub place: String,
    pub hotels: Fetched<Vec<HotelRecord>>,
    pub restaurants: Fetched<Vec<RestaurantRecord>>,
    pub weather: Fetched<WeatherSnapshot>,
}

pub(crate) async fn run(
    command: Commands,
    config: &AppConfig,
    cache: ExpiringCache,
) -> anyhow::Result<()> {
    match command {
        Commands::Hotels { location, refresh } => {
            let search = SearchService::from_config(config, cache)?;
            let fetched = search.fetch_hotels(&location, refresh).await;
            report_source("hotels", &fetched);
            print_json(&fetched)
        }
        Commands::Restaurants { location, refresh } => {
            let search = SearchService::from_config(config, cache)?;
            let fetched = search.fetch_restaurants(&location, refresh).await;
            report_source("restaurants", &fetched);
            print_json(&fetched)
        }
        Commands::Weather { place, lat, lon } => {
            let weather = WeatherService::from_config(config, cache)?;
            let fetched = weather.fetch_weather(lat, lon, &place).await;
            report_source("weather", &fetched);
            print_json(&fetched)
        }
        Commands::Explore {
            place,
            lat,
            lon,
            refresh,
        } => {
            let search = SearchService::from_config(config, cache.clone())?;
            let weather = WeatherService::from_config(config, cache)?;

            let (hotels, restaurants, forecast) = tokio::join!(
                search.fetch_hotels(&place, refresh),
                search.fetch_restaurants(&place, refresh),
                weather.fetch_weather(lat, lon, &place),
            );
            report_source("hotels", &hotels);
            report_source("restaurants", &restaurants);
            report_source("weather", &forecast);

            print_json(&ExploreReport {
                place,
                hotels,
                restaurants,
                weather: forecast,
            })
        }
        Commands::ClearWeatherCache => {
            let weather = WeatherService::from_config(config, cache)?;
            let removed = weather.clear_weather_cache().await;
            tracing::info!(removed, "weather cache cleared");
            print_json(&serde_json::json!({ "removed": removed }))
        }
    }
}

fn report_source<T>(what: &str, fetched: &Fetched<T>) {
    if fetched.is_degraded() {
        tracing::warn!(what, source = ?fetched.source, "showing fallback data");
    } else {
        tracing::info!(what, source = ?fetched.source, "fetched");
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
