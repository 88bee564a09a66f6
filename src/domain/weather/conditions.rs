use serde::Serialize;

use super::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Thunder,
    Unknown,
}

/// Display glyph and description for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCodeInfo {
    pub code: u8,
    pub glyph: &'static str,
    pub description: &'static str,
}

impl WeatherCodeInfo {
    pub const UNKNOWN_GLYPH: &'static str = "?";
    pub const UNKNOWN_DESCRIPTION: &'static str = "Unknown";

    const fn unknown(code: u8) -> Self {
        Self {
            code,
            glyph: Self::UNKNOWN_GLYPH,
            description: Self::UNKNOWN_DESCRIPTION,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        self.description != Self::UNKNOWN_DESCRIPTION
    }
}

// Ordered by increasing severity. The "worst condition" of a window is the
// highest code, which matches table order for every code listed here.
const WEATHER_CODES: &[(u8, &str, &str)] = &[
    (0, "☀", "Clear sky"),
    (1, "🌤", "Mainly clear"),
    (2, "⛅", "Partly cloudy"),
    (3, "☁", "Overcast"),
    (45, "🌫", "Fog"),
    (48, "🌫", "Depositing rime fog"),
    (51, "🌦", "Light drizzle"),
    (53, "🌦", "Moderate drizzle"),
    (55, "🌧", "Dense drizzle"),
    (56, "🌧", "Light freezing drizzle"),
    (57, "🌧", "Dense freezing drizzle"),
    (61, "🌦", "Slight rain"),
    (63, "🌧", "Moderate rain"),
    (65, "🌧", "Heavy rain"),
    (66, "🌧", "Light freezing rain"),
    (67, "🌧", "Heavy freezing rain"),
    (71, "🌨", "Slight snowfall"),
    (73, "🌨", "Moderate snowfall"),
    (75, "❄", "Heavy snowfall"),
    (77, "🌨", "Snow grains"),
    (80, "🌦", "Slight rain showers"),
    (81, "🌧", "Moderate rain showers"),
    (82, "🌧", "Violent rain showers"),
    (85, "🌨", "Slight snow showers"),
    (86, "❄", "Heavy snow showers"),
    (95, "⛈", "Thunderstorm"),
    (96, "⛈", "Thunderstorm with slight hail"),
    (99, "⛈", "Thunderstorm with heavy hail"),
];

/// Looks up a code, falling back to `("?", "Unknown")` for codes outside the table.
#[must_use]
pub fn weather_info(code: u8) -> WeatherCodeInfo {
    WEATHER_CODES
        .iter()
        .find(|(candidate, _, _)| *candidate == code)
        .map_or(WeatherCodeInfo::unknown(code), |&(code, glyph, description)| {
            WeatherCodeInfo {
                code,
                glyph,
                description,
            }
        })
}

#[must_use]
pub fn weather_code_to_category(code: u8) -> WeatherCategory {
    match code {
        0 | 1 => WeatherCategory::Clear,
        2 | 3 => WeatherCategory::Cloudy,
        45 | 48 => WeatherCategory::Fog,
        51..=57 | 61..=67 | 80..=82 => WeatherCategory::Rain,
        71..=77 | 85..=86 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Thunder,
        _ => WeatherCategory::Unknown,
    }
}

/// Glyph for a code under the requested icon mode. Unicode mode uses the
/// per-code table glyph; the other modes collapse to one token per category.
#[must_use]
pub fn weather_icon(code: u8, mode: IconMode) -> &'static str {
    let category = weather_code_to_category(code);
    match mode {
        IconMode::Unicode => weather_info(code).glyph,
        IconMode::Ascii => ascii_token(category),
        IconMode::Emoji => emoji_token(category),
    }
}

fn ascii_token(category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Clear => "SUN",
        WeatherCategory::Cloudy => "CLD",
        WeatherCategory::Rain => "RAN",
        WeatherCategory::Snow => "SNW",
        WeatherCategory::Fog => "FOG",
        WeatherCategory::Thunder => "THN",
        WeatherCategory::Unknown => WeatherCodeInfo::UNKNOWN_GLYPH,
    }
}

fn emoji_token(category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Clear => "☀️",
        WeatherCategory::Cloudy => "☁️",
        WeatherCategory::Rain => "🌧️",
        WeatherCategory::Snow => "🌨️",
        WeatherCategory::Fog => "🌫️",
        WeatherCategory::Thunder => "⛈️",
        WeatherCategory::Unknown => WeatherCodeInfo::UNKNOWN_GLYPH,
    }
}
