//! Static listings served when live search data is unavailable.

use tripfeed_core::{AmenityIcon, Coordinates, HotelRecord, ListingKind, RestaurantRecord};

use crate::normalize::RESTAURANT_AMENITIES;

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_string()).collect()
}

/// Three well-known Goa hotels.
#[must_use]
pub fn fallback_hotels() -> Vec<HotelRecord> {
    vec![
        HotelRecord {
            id: "fallback_hotel_1".to_string(),
            name: "Taj Fort Aguada Resort & Spa".to_string(),
            location: "Candolim, Goa".to_string(),
            rating: 4.6,
            review_count: 5_820,
            price: 28_500,
            image_url: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800"
                .to_string(),
            tags: tags(&["5 Star", "Top Rated"]),
            amenities: vec![
                AmenityIcon::Wifi,
                AmenityIcon::Pool,
                AmenityIcon::Spa,
                AmenityIcon::Beach,
            ],
            kind: ListingKind::Hotel,
            link: None,
            star_class: Some(5),
            coordinates: Some(Coordinates {
                latitude: 15.4960,
                longitude: 73.7733,
            }),
        },
        HotelRecord {
            id: "fallback_hotel_2".to_string(),
            name: "The Leela Goa".to_string(),
            location: "Cavelossim, Goa".to_string(),
            rating: 4.7,
            review_count: 4_310,
            price: 32_000,
            image_url: "https://images.unsplash.com/photo-1582719508461-905c673771fd?w=800"
                .to_string(),
            tags: tags(&["5 Star", "Top Rated"]),
            amenities: vec![
                AmenityIcon::Wifi,
                AmenityIcon::Pool,
                AmenityIcon::Spa,
                AmenityIcon::Dumbbell,
            ],
            kind: ListingKind::Hotel,
            link: None,
            star_class: Some(5),
            coordinates: Some(Coordinates {
                latitude: 15.1568,
                longitude: 73.9447,
            }),
        },
        HotelRecord {
            id: "fallback_hotel_3".to_string(),
            name: "Casa Anjuna".to_string(),
            location: "Anjuna, Goa".to_string(),
            rating: 4.3,
            review_count: 1_150,
            price: 9_800,
            image_url: "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=800"
                .to_string(),
            tags: tags(&["Boutique"]),
            amenities: vec![
                AmenityIcon::Wifi,
                AmenityIcon::Pool,
                AmenityIcon::Dining,
                AmenityIcon::Coffee,
            ],
            kind: ListingKind::Hotel,
            link: None,
            star_class: Some(3),
            coordinates: Some(Coordinates {
                latitude: 15.5837,
                longitude: 73.7441,
            }),
        },
    ]
}

/// Three well-known Goa restaurants.
#[must_use]
pub fn fallback_restaurants() -> Vec<RestaurantRecord> {
    let restaurant = |id: &str, name: &str, location: &str, rating: f64, reviews: u64| {
        RestaurantRecord {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            rating,
            review_count: reviews,
            price: 0,
            image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800"
                .to_string(),
            tags: Vec::new(),
            amenities: RESTAURANT_AMENITIES.to_vec(),
            kind: ListingKind::Restaurant,
            cuisine: Vec::new(),
            link: None,
            price_level: None,
        }
    };

    vec![
        RestaurantRecord {
            price: 7_500,
            tags: tags(&["Seafood", "$$$", "Popular"]),
            cuisine: tags(&["Seafood"]),
            price_level: Some("$$$".to_string()),
            ..restaurant(
                "fallback_restaurant_1",
                "Fisherman's Wharf",
                "Cavelossim, Goa",
                4.6,
                15_400,
            )
        },
        RestaurantRecord {
            price: 5_500,
            tags: tags(&["Goan", "$$", "Popular"]),
            cuisine: tags(&["Goan"]),
            price_level: Some("$$".to_string()),
            ..restaurant(
                "fallback_restaurant_2",
                "Gunpowder",
                "Assagao, Goa",
                4.5,
                6_200,
            )
        },
        RestaurantRecord {
            price: 3_500,
            tags: tags(&["Cafe", "$"]),
            cuisine: tags(&["Cafe"]),
            price_level: Some("$".to_string()),
            ..restaurant(
                "fallback_restaurant_3",
                "Artjuna Cafe",
                "Anjuna, Goa",
                4.4,
                3_900,
            )
        },
    ]
}
