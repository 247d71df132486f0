//! WMO weather interpretation codes.

/// Display text and glyph for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCode {
    pub condition: &'static str,
    pub icon: &'static str,
}

pub const UNKNOWN: WeatherCode = WeatherCode {
    condition: "Unknown",
    icon: "🌡️",
};

/// The standard forecast codes plus the present-weather codes some stations
/// report (smoke, haze, mist, "recent" precipitation).
const WMO_CODES: &[(u16, &str, &str)] = &[
    (0, "Clear Sky", "☀️"),
    (1, "Mainly Clear", "🌤️"),
    (2, "Partly Cloudy", "⛅"),
    (3, "Overcast", "☁️"),
    (4, "Smoke", "🌫️"),
    (5, "Haze", "🌫️"),
    (10, "Mist", "🌫️"),
    (17, "Dry Thunderstorm", "🌩️"),
    (20, "Recent Drizzle", "🌦️"),
    (21, "Recent Rain", "🌧️"),
    (22, "Recent Snow", "🌨️"),
    (25, "Recent Rain Showers", "🌦️"),
    (26, "Recent Snow Showers", "🌨️"),
    (29, "Recent Thunderstorm", "⛈️"),
    (45, "Fog", "🌫️"),
    (48, "Depositing Rime Fog", "🌫️"),
    (51, "Light Drizzle", "🌦️"),
    (53, "Moderate Drizzle", "🌦️"),
    (55, "Dense Drizzle", "🌧️"),
    (56, "Light Freezing Drizzle", "🌧️"),
    (57, "Dense Freezing Drizzle", "🌧️"),
    (61, "Slight Rain", "🌦️"),
    (63, "Moderate Rain", "🌧️"),
    (65, "Heavy Rain", "🌧️"),
    (66, "Light Freezing Rain", "🌧️"),
    (67, "Heavy Freezing Rain", "🌧️"),
    (71, "Slight Snowfall", "🌨️"),
    (73, "Moderate Snowfall", "❄️"),
    (75, "Heavy Snowfall", "❄️"),
    (77, "Snow Grains", "🌨️"),
    (80, "Slight Rain Showers", "🌦️"),
    (81, "Moderate Rain Showers", "🌧️"),
    (82, "Violent Rain Showers", "🌧️"),
    (85, "Slight Snow Showers", "🌨️"),
    (86, "Heavy Snow Showers", "❄️"),
    (95, "Thunderstorm", "⛈️"),
    (96, "Thunderstorm with Slight Hail", "⛈️"),
    (99, "Thunderstorm with Heavy Hail", "⛈️"),
];

/// Looks up `code`, returning [`UNKNOWN`] for codes outside the table.
#[must_use]
pub fn describe(code: u16) -> WeatherCode {
    WMO_CODES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map_or(UNKNOWN, |&(_, condition, icon)| WeatherCode { condition, icon })
}
