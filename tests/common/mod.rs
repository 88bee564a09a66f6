#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use hourly_spark::domain::weather::HourlySample;

pub fn sample(hour: u32, temperature: f32, precipitation_probability: f32, code: u8) -> HourlySample {
    HourlySample {
        hour,
        temperature,
        precipitation_probability,
        precipitation_amount: precipitation_probability / 40.0,
        weather_code: code,
    }
}

/// A February day in Stockholm: cold night, mild afternoon, showers after 15:00.
pub fn stockholm_day() -> Vec<HourlySample> {
    (0..24)
        .map(|hour| {
            let temperature = -3.0 + 8.0 * (1.0 - ((hour as f32 - 14.0) / 10.0).powi(2)).max(0.0);
            let (chance, code) = match hour {
                0..=14 => (0.0, 3),
                15 => (55.0, 95),
                16..=18 => (40.0, 80),
                _ => (10.0, 61),
            };
            sample(hour, temperature, chance, code)
        })
        .collect()
}

pub fn forecast_payload() -> serde_json::Value {
    let times: Vec<String> = (0..24).map(|h| format!("2026-02-12T{h:02}:00")).collect();
    serde_json::json!({
        "latitude": 59.33,
        "longitude": 18.07,
        "hourly": {
            "time": times,
            "temperature_2m": (0..24).map(|h| h as f32 * 0.5).collect::<Vec<_>>(),
            "precipitation_probability": (0..24).map(|h| if h > 20 { 35 } else { 0 }).collect::<Vec<_>>(),
            "precipitation": vec![0.0; 24],
            "weather_code": (0..24).map(|h| if h > 20 { 61 } else { 2 }).collect::<Vec<_>>(),
        }
    })
}
