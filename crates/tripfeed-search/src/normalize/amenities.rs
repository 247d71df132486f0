use tripfeed_core::AmenityIcon;

pub const MAX_AMENITY_ICONS: usize = 4;

/// Used when none of a hotel's amenities match the synonym table.
pub const DEFAULT_HOTEL_AMENITIES: [AmenityIcon; 4] = [
    AmenityIcon::Wifi,
    AmenityIcon::Pool,
    AmenityIcon::Dining,
    AmenityIcon::Spa,
];

/// Lower-case substrings that map a free-text amenity to an icon.
///
/// Order is priority: icons are emitted in table order, so when a hotel
/// lists more than four matching amenities the earlier rows win.
const AMENITY_SYNONYMS: &[(AmenityIcon, &[&str])] = &[
    (AmenityIcon::Wifi, &["wi-fi", "wifi", "internet"]),
    (AmenityIcon::Pool, &["swimming pool", "pool"]),
    (AmenityIcon::Spa, &["spa", "sauna", "massage"]),
    (AmenityIcon::Dumbbell, &["fitness", "gym"]),
    (AmenityIcon::Dining, &["restaurant", "dining", "room service"]),
    (AmenityIcon::Bar, &["bar", "lounge"]),
    (AmenityIcon::Coffee, &["breakfast", "coffee"]),
    (AmenityIcon::Parking, &["parking"]),
    (
        AmenityIcon::Snowflake,
        &["air conditioning", "air-conditioned", "air conditioned"],
    ),
    (AmenityIcon::Paw, &["pet-friendly", "pet friendly", "pets allowed"]),
    (AmenityIcon::Beach, &["beach"]),
    (AmenityIcon::Shuttle, &["shuttle", "airport transfer"]),
];

/// Maps free-text amenity names to at most [`MAX_AMENITY_ICONS`] distinct
/// icons, case-insensitively. Falls back to [`DEFAULT_HOTEL_AMENITIES`]
/// when nothing matches.
#[must_use]
pub fn amenity_icons(names: &[String]) -> Vec<AmenityIcon> {
    let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

    let mut icons = Vec::with_capacity(MAX_AMENITY_ICONS);
    for (icon, synonyms) in AMENITY_SYNONYMS {
        let matched = lowered
            .iter()
            .any(|name| synonyms.iter().any(|s| name.contains(s)));
        if matched {
            icons.push(*icon);
            if icons.len() == MAX_AMENITY_ICONS {
                break;
            }
        }
    }

    if icons.is_empty() {
        DEFAULT_HOTEL_AMENITIES.to_vec()
    } else {
        icons
    }
}
