mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tripfeed_cache::{ExpiringCache, Store};

#[derive(Debug, Parser)]
#[command(name = "tripfeed")]
#[command(about = "Hotels, restaurants and weather for a travel destination")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hotel listings for a location
    Hotels {
        location: String,

        /// Skip the cache and query the search provider
        #[arg(long)]
        refresh: bool,
    },
    /// Restaurant listings for a location
    Restaurants {
        location: String,

        /// Skip the cache and query the search provider
        #[arg(long)]
        refresh: bool,
    },
    /// Current conditions and five-day forecast
    Weather {
        /// Place name; keys the cached snapshot
        place: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Hotels, restaurants and weather for a place, fetched concurrently
    Explore {
        place: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Skip the cache for hotels and restaurants
        #[arg(long)]
        refresh: bool,
    },
    /// Remove every cached weather snapshot
    ClearWeatherCache,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = tripfeed_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");
    let cache = ExpiringCache::new(Store::directory(&config.cache_dir));

    commands::run(cli.command, &config, cache).await
}

#[cfg(test)]
mod tests;
