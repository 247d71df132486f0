//! Canonical records handed to UI collaborators.
//!
//! Field names serialize in camelCase because cached envelopes are read back
//! by the app's screens as-is.

use serde::{Deserialize, Serialize};

/// Closed vocabulary of amenity icons the detail screens know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmenityIcon {
    Wifi,
    Pool,
    Spa,
    Dumbbell,
    Dining,
    Bar,
    Coffee,
    Parking,
    Snowflake,
    Paw,
    Beach,
    Shuttle,
}

impl AmenityIcon {
    /// The identifier used in serialized records, e.g. `"dumbbell"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Pool => "pool",
            Self::Spa => "spa",
            Self::Dumbbell => "dumbbell",
            Self::Dining => "dining",
            Self::Bar => "bar",
            Self::Coffee => "coffee",
            Self::Parking => "parking",
            Self::Snowflake => "snowflake",
            Self::Paw => "paw",
            Self::Beach => "beach",
            Self::Shuttle => "shuttle",
        }
    }
}

impl std::fmt::Display for AmenityIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingKind {
    Hotel,
    Restaurant,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A hotel listing normalized from the search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub review_count: u64,
    /// Estimated nightly price in the configured currency, no minor units.
    pub price: i64,
    pub image_url: String,
    /// Never empty; falls back to `["Hotel"]`.
    pub tags: Vec<String>,
    /// At most four icons.
    pub amenities: Vec<AmenityIcon>,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub link: Option<String>,
    pub star_class: Option<u8>,
    pub coordinates: Option<Coordinates>,
}

/// A restaurant listing normalized from the local-results engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub review_count: u64,
    pub price: i64,
    pub image_url: String,
    pub tags: Vec<String>,
    pub amenities: Vec<AmenityIcon>,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub cuisine: Vec<String>,
    pub link: Option<String>,
    /// Raw dollar-sign price level, e.g. `"$$"`.
    pub price_level: Option<String>,
}

/// Coarse UV estimate derived from the hour of day, not a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UvIndex {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Degrees Celsius.
    pub temperature: i32,
    pub condition: String,
    pub icon: String,
    pub feels_like: i32,
    /// Relative humidity percent.
    pub humidity: i32,
    /// km/h.
    pub wind_speed: i32,
    pub uv_index: UvIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// `"Today"`, `"Tomorrow"`, then weekday names.
    pub day: String,
    pub condition: String,
    pub icon: String,
    pub high: i32,
    pub low: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    /// Up to five days, starting today.
    pub forecast: Vec<DailyForecast>,
}
