use tripfeed_core::{Coordinates, HotelRecord, ListingKind};

use super::amenities::amenity_icons;
use super::price::{parse_price, whole_amount, DEFAULT_HOTEL_PRICE};
use super::{DEFAULT_RATING, MAX_RESULTS, PLACEHOLDER_HOTEL_IMAGE};
use crate::types::{Rate, RawProperty};

/// Nights in the requested stay window; total-stay rates are divided by this.
const STAY_NIGHTS: f64 = 2.0;

/// Normalizes the first [`MAX_RESULTS`] properties of a hotel search.
#[must_use]
pub fn normalize_hotels(properties: Vec<RawProperty>, location: &str) -> Vec<HotelRecord> {
    properties
        .into_iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, property)| normalize_hotel(property, index, location))
        .collect()
}

/// Converts a raw `google_hotels` property into a [`HotelRecord`].
///
/// `location` is the place that was searched; the provider does not return
/// a street address for hotels.
#[must_use]
pub fn normalize_hotel(property: RawProperty, index: usize, location: &str) -> HotelRecord {
    let price = hotel_price(&property);
    let tags = hotel_tags(&property);
    let amenities = amenity_icons(&property.amenities);
    let image_url = property
        .images
        .into_iter()
        .next()
        .and_then(|img| img.original_image.or(img.thumbnail))
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_HOTEL_IMAGE.to_string());

    HotelRecord {
        id: property
            .property_token
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("hotel_{index}")),
        name: property
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Unnamed Hotel".to_string()),
        location: location.to_owned(),
        rating: property.overall_rating.unwrap_or(DEFAULT_RATING),
        review_count: property.reviews.unwrap_or(0),
        price,
        image_url,
        tags,
        amenities,
        kind: ListingKind::Hotel,
        link: property.link,
        star_class: property.extracted_hotel_class,
        coordinates: property.gps_coordinates.map(|g| Coordinates {
            latitude: g.latitude,
            longitude: g.longitude,
        }),
    }
}

/// Nightly rate, in order of preference: the provider's extracted nightly
/// rate, the formatted nightly rate, half the total-stay rate, the default.
fn hotel_price(property: &RawProperty) -> i64 {
    if let Some(nightly) = property.rate_per_night.as_ref().and_then(rate_value) {
        if let Some(amount) = whole_amount(nightly) {
            return amount;
        }
    }
    property
        .total_rate
        .as_ref()
        .and_then(rate_value)
        .and_then(|total| whole_amount(total / STAY_NIGHTS))
        .unwrap_or(DEFAULT_HOTEL_PRICE)
}

fn rate_value(rate: &Rate) -> Option<f64> {
    rate.extracted_lowest
        .or_else(|| rate.lowest.as_deref().and_then(parse_price))
}

fn hotel_tags(property: &RawProperty) -> Vec<String> {
    let mut tags = Vec::new();

    if let Some(stars) = property.extracted_hotel_class {
        tags.push(format!("{stars} Star"));
    } else if let Some(class) = property
        .hotel_class
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        tags.push(class.to_string());
    }

    if property.eco_certified == Some(true) {
        tags.push("Eco-certified".to_string());
    }

    if property
        .kind
        .as_deref()
        .is_some_and(|k| k.trim().eq_ignore_ascii_case("vacation rental"))
    {
        tags.push("Vacation Rental".to_string());
    }

    // Only a reported rating earns the tag; the 4.5 default does not.
    if property.overall_rating.is_some_and(|r| r >= 4.5) {
        tags.push("Top Rated".to_string());
    }

    if tags.is_empty() {
        tags.push("Hotel".to_string());
    }
    tags
}

#[cfg(test)]
mod tests {
    use tripfeed_core::AmenityIcon;

    use super::*;
    use crate::types::{GpsCoordinates, PropertyImage};

    fn rate(lowest: Option<&str>, extracted: Option<f64>) -> Rate {
        Rate {
            lowest: lowest.map(str::to_string),
            extracted_lowest: extracted,
        }
    }

    fn full_property() -> RawProperty {
        RawProperty {
            kind: Some("hotel".to_string()),
            name: Some("Taj Fort Aguada".to_string()),
            link: Some("https://example.com/taj".to_string()),
            property_token: Some("tok_123".to_string()),
            gps_coordinates: Some(GpsCoordinates {
                latitude: 15.49,
                longitude: 73.77,
            }),
            hotel_class: Some("5-star hotel".to_string()),
            extracted_hotel_class: Some(5),
            images: vec![PropertyImage {
                thumbnail: Some("https://img/thumb.jpg".to_string()),
                original_image: Some("https://img/full.jpg".to_string()),
            }],
            overall_rating: Some(4.7),
            reviews: Some(2310),
            amenities: vec!["Free Wi-Fi".to_string(), "Outdoor pool".to_string()],
            eco_certified: Some(true),
            rate_per_night: Some(rate(Some("₹18,400"), Some(18_400.0))),
            total_rate: Some(rate(Some("₹36,800"), Some(36_800.0))),
        }
    }

    #[test]
    fn normalize_hotel_copies_provider_fields() {
        let hotel = normalize_hotel(full_property(), 0, "North Goa");
        assert_eq!(hotel.id, "tok_123");
        assert_eq!(hotel.name, "Taj Fort Aguada");
        assert_eq!(hotel.location, "North Goa");
        assert!((hotel.rating - 4.7).abs() < f64::EPSILON);
        assert_eq!(hotel.review_count, 2310);
        assert_eq!(hotel.price, 18_400);
        assert_eq!(hotel.image_url, "https://img/full.jpg");
        assert_eq!(hotel.amenities, [AmenityIcon::Wifi, AmenityIcon::Pool]);
        assert_eq!(hotel.kind, ListingKind::Hotel);
        assert_eq!(hotel.star_class, Some(5));
        assert_eq!(hotel.link.as_deref(), Some("https://example.com/taj"));
        assert_eq!(
            hotel.coordinates,
            Some(Coordinates {
                latitude: 15.49,
                longitude: 73.77
            })
        );
    }

    #[test]
    fn sparse_property_gets_named_fallbacks() {
        let hotel = normalize_hotel(RawProperty::default(), 3, "Goa");
        assert_eq!(hotel.id, "hotel_3");
        assert_eq!(hotel.name, "Unnamed Hotel");
        assert!((hotel.rating - DEFAULT_RATING).abs() < f64::EPSILON);
        assert_eq!(hotel.review_count, 0);
        assert_eq!(hotel.price, DEFAULT_HOTEL_PRICE);
        assert_eq!(hotel.image_url, PLACEHOLDER_HOTEL_IMAGE);
        assert_eq!(hotel.tags, ["Hotel"]);
        assert_eq!(hotel.amenities.len(), 4);
        assert!(hotel.coordinates.is_none());
    }

    #[test]
    fn price_parses_formatted_nightly_rate() {
        let property = RawProperty {
            rate_per_night: Some(rate(Some("$1,234"), None)),
            ..RawProperty::default()
        };
        assert_eq!(hotel_price(&property), 1234);
    }

    #[test]
    fn price_halves_total_rate_when_no_nightly_rate() {
        let property = RawProperty {
            total_rate: Some(rate(None, Some(9_001.0))),
            ..RawProperty::default()
        };
        assert_eq!(hotel_price(&property), 4501);

        let property = RawProperty {
            rate_per_night: Some(rate(Some("sold out"), None)),
            total_rate: Some(rate(Some("₹10,000"), None)),
            ..RawProperty::default()
        };
        assert_eq!(hotel_price(&property), 5000);
    }

    #[test]
    fn image_prefers_original_then_thumbnail() {
        let property = RawProperty {
            images: vec![PropertyImage {
                thumbnail: Some("https://img/thumb.jpg".to_string()),
                original_image: None,
            }],
            ..RawProperty::default()
        };
        let hotel = normalize_hotel(property, 0, "Goa");
        assert_eq!(hotel.image_url, "https://img/thumb.jpg");
    }

    #[test]
    fn tags_cover_class_eco_rental_and_rating() {
        let hotel = normalize_hotel(full_property(), 0, "Goa");
        assert_eq!(hotel.tags, ["5 Star", "Eco-certified", "Top Rated"]);

        let property = RawProperty {
            kind: Some("Vacation rental".to_string()),
            hotel_class: Some("Boutique".to_string()),
            overall_rating: Some(4.1),
            ..RawProperty::default()
        };
        assert_eq!(hotel_tags(&property), ["Boutique", "Vacation Rental"]);
    }

    #[test]
    fn default_rating_does_not_earn_top_rated() {
        let hotel = normalize_hotel(RawProperty::default(), 0, "Goa");
        assert!(!hotel.tags.iter().any(|t| t == "Top Rated"));
    }

    #[test]
    fn normalize_hotels_caps_at_ten() {
        let properties = (0..15).map(|_| RawProperty::default()).collect();
        let hotels = normalize_hotels(properties, "Goa");
        assert_eq!(hotels.len(), MAX_RESULTS);
        assert_eq!(hotels[9].id, "hotel_9");
    }
}
