//! Normalization of search provider results into canonical records.
//!
//! Every field has a named fallback, so normalization never fails: a sparse
//! provider item still yields a displayable record.

mod amenities;
mod hotel;
mod price;
mod restaurant;

pub use amenities::{amenity_icons, DEFAULT_HOTEL_AMENITIES, MAX_AMENITY_ICONS};
pub use hotel::{normalize_hotel, normalize_hotels};
pub use price::{parse_price, price_from_level};
pub use restaurant::{normalize_restaurant, normalize_restaurants, RESTAURANT_AMENITIES};

/// Only the first this-many provider items are normalized.
pub const MAX_RESULTS: usize = 10;

/// Shown when a hotel has no photos.
pub const PLACEHOLDER_HOTEL_IMAGE: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800";

/// Shown when a restaurant has no thumbnail.
pub const PLACEHOLDER_RESTAURANT_IMAGE: &str =
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800";

/// Rating assumed when the provider reports none.
pub const DEFAULT_RATING: f64 = 4.5;
