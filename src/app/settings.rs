use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, UnitsArg},
    domain::{weather::Units, windows::TimeWindow},
};

const CONFIG_DIR_ENV: &str = "HOURLY_SPARK_CONFIG_DIR";
const CONFIG_FILE: &str = "config.json";

/// Resolved configuration handed to the row builder for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub units: Units,
    pub windows: Vec<TimeWindow>,
}

impl Settings {
    #[must_use]
    pub fn location(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Layers explicit CLI values over whatever the file provided.
    #[must_use]
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
            self.latitude = Some(lat);
            self.longitude = Some(lon);
        }
        if let Some(units) = cli.units {
            self.units = match units {
                UnitsArg::Celsius => Units::Celsius,
                UnitsArg::Fahrenheit => Units::Fahrenheit,
            };
        }
        if !cli.windows.is_empty() {
            self.windows.clone_from(&cli.windows);
        }
        self
    }
}

pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let from_file = match &cli.config {
        Some(path) => read_settings(path)?,
        None => match settings_path() {
            Some(path) if path.exists() => read_settings(&path)?,
            _ => Settings::default(),
        },
    };
    Ok(from_file.with_cli_overrides(cli))
}

pub fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {} failed", path.display()))?;
    let settings = serde_json::from_str(&content)
        .with_context(|| format!("parsing config file {} failed", path.display()))?;
    log::debug!("loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating config directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing config file failed")
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base).join(CONFIG_FILE));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("hourly-spark")
            .join(CONFIG_FILE),
    )
}
