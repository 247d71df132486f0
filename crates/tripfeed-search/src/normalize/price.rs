use std::sync::LazyLock;

use regex::Regex;

/// Nightly price used when a hotel carries no usable rate.
pub const DEFAULT_HOTEL_PRICE: i64 = 25_000;

/// Price used when a restaurant carries no dollar-sign price level.
pub const DEFAULT_RESTAURANT_PRICE: i64 = 3_500;

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("numeric token pattern is valid"));

/// Extracts the first numeric token from a currency-formatted string after
/// removing thousands separators: `"$1,234"` → `1234.0`.
#[must_use]
pub fn parse_price(formatted: &str) -> Option<f64> {
    let stripped = formatted.replace(',', "");
    NUMERIC_TOKEN
        .find(&stripped)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Estimates a meal price from a dollar-sign level: `count * 2000 + 1500`.
///
/// Levels with no `$` at all (missing, or another currency's notation)
/// get [`DEFAULT_RESTAURANT_PRICE`].
#[must_use]
pub fn price_from_level(level: Option<&str>) -> i64 {
    let count = level.map_or(0, |l| l.chars().filter(|c| *c == '$').count());
    if count == 0 {
        return DEFAULT_RESTAURANT_PRICE;
    }
    i64::try_from(count).map_or(DEFAULT_RESTAURANT_PRICE, |n| n * 2000 + 1500)
}

/// Rounds a provider price to a whole amount, rejecting NaN, infinities and
/// negatives.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn whole_amount(value: f64) -> Option<i64> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as i64)
}
