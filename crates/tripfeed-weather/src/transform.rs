//! Forecast payload → [`WeatherSnapshot`].

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tripfeed_core::{CurrentConditions, DailyForecast, UvIndex, WeatherSnapshot};

use crate::codes::describe;
use crate::error::WeatherError;
use crate::types::{DailyBlock, ForecastResponse};

/// Days shown in the forecast strip.
pub const FORECAST_DAYS: usize = 5;

/// Fewest daily entries a usable forecast has: "Today" and "Tomorrow".
pub const MIN_FORECAST_DAYS: usize = 2;

/// Estimates UV exposure from the local hour (0–23). Strongest 10:00–14:00,
/// moderate in the two hours either side.
#[must_use]
pub fn uv_bucket(hour: u32) -> UvIndex {
    match hour {
        10..=14 => UvIndex::High,
        8..=9 | 15..=16 => UvIndex::Moderate,
        _ => UvIndex::Low,
    }
}

/// `"Today"`, `"Tomorrow"`, then the full weekday name of `date`.
#[must_use]
pub fn day_label(index: usize, date: NaiveDate) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A").to_string(),
    }
}

/// Hour of the provider's local observation time, if it parses.
#[must_use]
pub fn observation_hour(time: Option<&str>) -> Option<u32> {
    let time = time?;
    NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|t| t.hour())
}

/// Builds a snapshot from a forecast payload. `local_hour` drives the UV
/// estimate; callers pass [`observation_hour`] or the local clock.
///
/// # Errors
///
/// - [`WeatherError::MismatchedDaily`] if the daily arrays differ in length.
/// - [`WeatherError::ShortForecast`] if fewer than [`MIN_FORECAST_DAYS`]
///   days are present.
pub fn build_snapshot(
    response: &ForecastResponse,
    local_hour: u32,
) -> Result<WeatherSnapshot, WeatherError> {
    let current = &response.current;
    let now = describe(current.weather_code);

    let daily = &response.daily;
    check_daily(daily)?;
    let forecast = daily
        .time
        .iter()
        .zip(&daily.weather_code)
        .zip(daily.temperature_2m_max.iter().zip(&daily.temperature_2m_min))
        .take(FORECAST_DAYS)
        .enumerate()
        .map(|(index, ((date, code), (high, low)))| {
            let described = describe(*code);
            DailyForecast {
                day: day_label(index, *date),
                condition: described.condition.to_string(),
                icon: described.icon.to_string(),
                high: whole(*high),
                low: whole(*low),
            }
        })
        .collect();

    Ok(WeatherSnapshot {
        current: CurrentConditions {
            temperature: whole(current.temperature_2m),
            condition: now.condition.to_string(),
            icon: now.icon.to_string(),
            feels_like: whole(current.apparent_temperature),
            humidity: whole(current.relative_humidity_2m),
            wind_speed: whole(current.wind_speed_10m),
            uv_index: uv_bucket(local_hour),
        },
        forecast,
    })
}

fn check_daily(daily: &DailyBlock) -> Result<(), WeatherError> {
    let lengths = [
        daily.time.len(),
        daily.weather_code.len(),
        daily.temperature_2m_max.len(),
        daily.temperature_2m_min.len(),
    ];
    if lengths.iter().any(|&len| len != lengths[0]) {
        return Err(WeatherError::MismatchedDaily { lengths });
    }
    if lengths[0] < MIN_FORECAST_DAYS {
        return Err(WeatherError::ShortForecast { days: lengths[0] });
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn whole(value: f64) -> i32 {
    value.round() as i32
}
