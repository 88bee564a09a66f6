pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::{Context, Result};
use app::settings::{Settings, load_settings, save_settings, settings_path};
use chrono::{Local, Timelike};
use cli::{Cli, validate_coordinates};
use data::forecast::ForecastClient;
use domain::{
    rows::{ForecastRows, RowOptions, build_rows},
    weather::{HourlySample, IconMode},
};

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let settings = load_settings(&cli)?;
    if cli.save_config {
        let path = cli
            .config
            .clone()
            .or_else(settings_path)
            .context("no config location available; pass --config")?;
        save_settings(&path, &settings)?;
        log::info!("saved settings to {}", path.display());
    }

    let (lat, lon) = settings
        .location()
        .context("no location configured; pass --lat and --lon or set them in the config file")?;
    validate_coordinates(lat, lon)?;

    let client = cli
        .forecast_url
        .as_deref()
        .map_or_else(ForecastClient::new, |url| ForecastClient::with_base_url(url))
        .context("creating forecast client failed")?;
    let samples = client
        .fetch(lat, lon)
        .await
        .context("fetching forecast failed")?;

    let current_hour = cli.hour.unwrap_or_else(|| Local::now().hour());
    let rows = forecast_rows(&samples, current_hour, &settings, cli.icon_mode());
    ui::print(&rows, cli.format, cli.effective_color_mode())
}

/// Builds display rows for already-fetched samples under the resolved settings.
#[must_use]
pub fn forecast_rows(
    samples: &[HourlySample],
    current_hour: u32,
    settings: &Settings,
    icons: IconMode,
) -> ForecastRows {
    let options = RowOptions {
        units: settings.units,
        icons,
    };
    build_rows(samples, current_hour, &settings.windows, options)
}
