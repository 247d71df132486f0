//! Static snapshot served when the forecast API is unavailable.

use chrono::{Days, NaiveDate};
use tripfeed_core::{CurrentConditions, DailyForecast, UvIndex, WeatherSnapshot};

use crate::transform::day_label;

/// `(condition, icon, high, low)` per day, starting today.
const FALLBACK_DAYS: [(&str, &str, i32, i32); 5] = [
    ("Partly Cloudy", "⛅", 32, 24),
    ("Mainly Clear", "🌤️", 33, 25),
    ("Slight Rain Showers", "🌦️", 30, 24),
    ("Partly Cloudy", "⛅", 31, 24),
    ("Clear Sky", "☀️", 33, 25),
];

/// Warm coastal conditions with a five-day forecast labelled from `today`.
#[must_use]
pub fn fallback_snapshot(today: NaiveDate) -> WeatherSnapshot {
    let forecast = FALLBACK_DAYS
        .iter()
        .zip(0u64..)
        .enumerate()
        .map(|(index, (&(condition, icon, high, low), offset))| DailyForecast {
            day: day_label(index, today + Days::new(offset)),
            condition: condition.to_string(),
            icon: icon.to_string(),
            high,
            low,
        })
        .collect();

    WeatherSnapshot {
        current: CurrentConditions {
            temperature: 30,
            condition: "Partly Cloudy".to_string(),
            icon: "⛅".to_string(),
            feels_like: 34,
            humidity: 70,
            wind_speed: 12,
            uv_index: UvIndex::Moderate,
        },
        forecast,
    }
}
