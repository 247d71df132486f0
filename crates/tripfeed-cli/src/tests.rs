use chrono::NaiveDate;
use clap::Parser;
use tripfeed_core::{FallbackReason, Fetched};

use super::*;
use crate::commands::ExploreReport;

#[test]
fn parses_hotels_command() {
    let cli =
        Cli::try_parse_from(["tripfeed", "hotels", "North Goa"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Hotels { ref location, refresh: false } if location == "North Goa"
    ));
}

#[test]
fn parses_restaurants_refresh_flag() {
    let cli = Cli::try_parse_from(["tripfeed", "restaurants", "Goa", "--refresh"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Restaurants { refresh: true, .. }
    ));
}

#[test]
fn weather_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "tripfeed", "weather", "Lima", "--lat", "-12.05", "--lon", "-77.04",
    ])
    .unwrap();
    match cli.command {
        Commands::Weather { place, lat, lon } => {
            assert_eq!(place, "Lima");
            assert!((lat + 12.05).abs() < f64::EPSILON);
            assert!((lon + 77.04).abs() < f64::EPSILON);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn weather_requires_coordinates() {
    assert!(Cli::try_parse_from(["tripfeed", "weather", "Goa"]).is_err());
}

#[test]
fn parses_explore_command() {
    let cli = Cli::try_parse_from([
        "tripfeed", "explore", "Goa", "--lat", "15.5", "--lon", "73.8", "--refresh",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::Explore { refresh: true, .. }));
}

#[test]
fn parses_clear_weather_cache() {
    let cli = Cli::try_parse_from(["tripfeed", "clear-weather-cache"]).unwrap();
    assert!(matches!(cli.command, Commands::ClearWeatherCache));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["tripfeed"]).is_err());
}

#[test]
fn explore_report_serializes_each_source() {
    let report = ExploreReport {
        place: "Goa".to_string(),
        hotels: Fetched::fallback(
            tripfeed_search::fallback::fallback_hotels(),
            FallbackReason::MissingCredential,
        ),
        restaurants: Fetched::cached(Vec::new()),
        weather: Fetched::network(tripfeed_weather::fallback::fallback_snapshot(
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        )),
    };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["hotels"]["source"]["reason"], "missing_credential");
    assert_eq!(value["restaurants"]["source"]["kind"], "cache");
    assert_eq!(value["weather"]["data"]["forecast"][0]["day"], "Today");
}
