use tripfeed_core::{AmenityIcon, ListingKind, RestaurantRecord};

use super::price::price_from_level;
use super::{DEFAULT_RATING, MAX_RESULTS, PLACEHOLDER_RESTAURANT_IMAGE};
use crate::types::RawLocalResult;

/// The local-results engine exposes no structured amenities, so every
/// restaurant shows the same three.
pub const RESTAURANT_AMENITIES: [AmenityIcon; 3] =
    [AmenityIcon::Dining, AmenityIcon::Bar, AmenityIcon::Wifi];

/// Normalizes the first [`MAX_RESULTS`] local results of a restaurant search.
#[must_use]
pub fn normalize_restaurants(
    results: Vec<RawLocalResult>,
    location: &str,
) -> Vec<RestaurantRecord> {
    results
        .into_iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, result)| normalize_restaurant(result, index, location))
        .collect()
}

/// Converts a raw `google_local` result into a [`RestaurantRecord`].
///
/// `location` is used when the provider gives no address.
#[must_use]
pub fn normalize_restaurant(
    result: RawLocalResult,
    index: usize,
    location: &str,
) -> RestaurantRecord {
    let business_type = result
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    let price_level = result
        .price
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    let mut tags = Vec::new();
    if let Some(t) = &business_type {
        tags.push(t.clone());
    }
    if let Some(p) = &price_level {
        tags.push(p.clone());
    }
    if result.rating.is_some_and(|r| r >= 4.5) {
        tags.push("Popular".to_string());
    }
    if tags.is_empty() {
        tags.push("Restaurant".to_string());
    }

    let link = result
        .links
        .and_then(|l| l.website)
        .or(result.website)
        .filter(|w| !w.is_empty());

    RestaurantRecord {
        id: result
            .place_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("restaurant_{index}")),
        name: result
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Unnamed Restaurant".to_string()),
        location: result
            .address
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| location.to_owned()),
        rating: result.rating.unwrap_or(DEFAULT_RATING),
        review_count: result.reviews.unwrap_or(0),
        price: price_from_level(price_level.as_deref()),
        image_url: result
            .thumbnail
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_RESTAURANT_IMAGE.to_string()),
        tags,
        amenities: RESTAURANT_AMENITIES.to_vec(),
        kind: ListingKind::Restaurant,
        cuisine: vec![business_type.unwrap_or_else(|| "Restaurant".to_string())],
        link,
        price_level,
    }
}
