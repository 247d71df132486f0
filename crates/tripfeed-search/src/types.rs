//! Search provider response types.
//!
//! Both engines answer `200 OK` even when the query fails, carrying an
//! `"error"` string instead of results. [`ProviderResponse`] makes that a sum
//! type so callers never check for optional fields.
//!
//! Result arrays are kept as raw JSON values and decoded one item at a time:
//! the provider's item shapes drift, and one odd listing should not sink the
//! whole page.

use serde::Deserialize;

/// Either a provider-reported error or a successful payload.
///
/// `Error` is tried first, so a body carrying both `error` and results is
/// treated as an error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProviderResponse<T> {
    Error(ErrorResponse),
    Success(T),
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// google_hotels
// ---------------------------------------------------------------------------

/// Successful `google_hotels` payload.
#[derive(Debug, Deserialize)]
pub struct HotelSearchResponse {
    #[serde(default)]
    pub properties: Vec<serde_json::Value>,
}

/// A single property from `google_hotels`.
#[derive(Debug, Default, Deserialize)]
pub struct RawProperty {
    /// `"hotel"` or `"vacation rental"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub property_token: Option<String>,
    #[serde(default)]
    pub gps_coordinates: Option<GpsCoordinates>,
    /// Human label such as `"4-star hotel"`.
    #[serde(default)]
    pub hotel_class: Option<String>,
    #[serde(default)]
    pub extracted_hotel_class: Option<u8>,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u64>,
    /// Free-text amenity names, e.g. `"Free Wi-Fi"`.
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub eco_certified: Option<bool>,
    #[serde(default)]
    pub rate_per_night: Option<Rate>,
    /// Price for the whole stay window.
    #[serde(default)]
    pub total_rate: Option<Rate>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct PropertyImage {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub original_image: Option<String>,
}

/// A price quote. `lowest` is currency-formatted (`"₹1,234"`), while
/// `extracted_lowest` is the provider's own numeric parse of it.
#[derive(Debug, Default, Deserialize)]
pub struct Rate {
    #[serde(default)]
    pub lowest: Option<String>,
    #[serde(default)]
    pub extracted_lowest: Option<f64>,
}

// ---------------------------------------------------------------------------
// google_local
// ---------------------------------------------------------------------------

/// Successful `google_local` payload.
#[derive(Debug, Deserialize)]
pub struct LocalSearchResponse {
    #[serde(default)]
    pub local_results: Vec<serde_json::Value>,
}

/// A single business from `google_local`.
#[derive(Debug, Default, Deserialize)]
pub struct RawLocalResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u64>,
    /// Dollar-sign price level, e.g. `"$$"`.
    #[serde(default)]
    pub price: Option<String>,
    /// Business type, e.g. `"Seafood restaurant"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub links: Option<LocalLinks>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocalLinks {
    #[serde(default)]
    pub website: Option<String>,
}
