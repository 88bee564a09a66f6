use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{HourlySample, parse_datetime};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,precipitation,weather_code";

#[derive(thiserror::Error, Debug)]
pub enum ForecastError {
    #[error("coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("building http client failed: {0}")]
    Client(reqwest::Error),
    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("forecast request returned status {0}")]
    Status(u16),
    #[error("failed to parse forecast payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("forecast payload is missing `{0}`")]
    MissingField(&'static str),
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Result<Self, ForecastError> {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ForecastError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches today's hourly samples for a location, in provider-local hours.
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<HourlySample>, ForecastError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ForecastError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        log::debug!("requesting forecast for {latitude:.4}, {longitude:.4}");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "1".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: ForecastResponse = serde_json::from_str(&body)?;
        let samples = parse_hourly(payload.hourly.ok_or(ForecastError::MissingField("hourly"))?)?;
        log::debug!("forecast returned {} hourly samples", samples.len());
        Ok(samples)
    }
}

fn parse_hourly(hourly: HourlyBlock) -> Result<Vec<HourlySample>, ForecastError> {
    let time = hourly.time.ok_or(ForecastError::MissingField("time"))?;
    let temperature = hourly
        .temperature_2m
        .ok_or(ForecastError::MissingField("temperature_2m"))?;
    let chance = hourly
        .precipitation_probability
        .ok_or(ForecastError::MissingField("precipitation_probability"))?;
    let amount = hourly
        .precipitation
        .ok_or(ForecastError::MissingField("precipitation"))?;
    let code = hourly
        .weather_code
        .ok_or(ForecastError::MissingField("weather_code"))?;

    let samples = time
        .iter()
        .zip(temperature)
        .zip(chance)
        .zip(amount)
        .zip(code)
        .filter_map(|((((time, temperature), chance), amount), code)| {
            let sample = parse_datetime(time).and_then(|time| {
                Some(HourlySample::at(time, temperature?, chance?, amount?, code?))
            });
            if sample.is_none() {
                log::debug!("skipping incomplete forecast hour {time}");
            }
            sample
        })
        .collect();
    Ok(samples)
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct HourlyBlock {
    time: Option<Vec<String>>,
    temperature_2m: Option<Vec<Option<f32>>>,
    precipitation_probability: Option<Vec<Option<f32>>>,
    precipitation: Option<Vec<Option<f32>>>,
    weather_code: Option<Vec<Option<u8>>>,
}
