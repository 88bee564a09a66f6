use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

mod conditions;

pub use conditions::{
    WeatherCategory, WeatherCodeInfo, weather_code_to_category, weather_icon, weather_info,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Units::Celsius => "°C",
            Units::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

/// One forecasted hour, already localized by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlySample {
    pub hour: u32,
    pub temperature: f32,
    pub precipitation_probability: f32,
    pub precipitation_amount: f32,
    pub weather_code: u8,
}

impl HourlySample {
    /// Builds a sample from a provider timestamp, keeping only its hour.
    #[must_use]
    pub fn at(
        time: NaiveDateTime,
        temperature: f32,
        precipitation_probability: f32,
        precipitation_amount: f32,
        weather_code: u8,
    ) -> Self {
        Self {
            hour: time.hour(),
            temperature,
            precipitation_probability,
            precipitation_amount,
            weather_code,
        }
    }

    #[must_use]
    pub fn in_units(self, units: Units) -> Self {
        Self {
            temperature: convert_temp(self.temperature, units),
            ..self
        }
    }
}

pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}
