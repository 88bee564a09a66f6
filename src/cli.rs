#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::{
    weather::IconMode,
    windows::{HighlightStyle, TimeWindow},
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum FormatArg {
    #[default]
    Table,
    Plain,
    Json,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum WindowParseError {
    #[error("expected NAME=START-END[:STYLE], got `{0}`")]
    Shape(String),
    #[error("window name must not be empty")]
    EmptyName,
    #[error("`{0}` is not an hour")]
    Hour(String),
    #[error("unknown style `{0}` (use success, info, warning, danger or accent)")]
    Style(String),
}

/// Parses `Commute=7-9` or `Commute=7-9:warning`.
pub fn parse_window(value: &str) -> Result<TimeWindow, WindowParseError> {
    let (name, span) = value
        .split_once('=')
        .ok_or_else(|| WindowParseError::Shape(value.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(WindowParseError::EmptyName);
    }
    let (range, style) = match span.split_once(':') {
        Some((range, tag)) => (
            range,
            HighlightStyle::from_tag(tag).ok_or_else(|| WindowParseError::Style(tag.to_string()))?,
        ),
        None => (span, HighlightStyle::default()),
    };
    // a leading '-' belongs to a negative start hour
    let (split, _) = range
        .trim_start()
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .ok_or_else(|| WindowParseError::Shape(value.to_string()))?;
    let range = range.trim_start();
    let (start, end) = (&range[..split], &range[split + 1..]);
    let hour = |raw: &str| {
        raw.trim()
            .parse::<i32>()
            .map_err(|_| WindowParseError::Hour(raw.to_string()))
    };
    Ok(TimeWindow::new(name, hour(start)?, hour(end)?).with_style(style))
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hourly-spark",
    version,
    about = "Hourly forecast sparklines with highlighted time windows"
)]
pub struct Cli {
    /// Latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Temperature units (overrides the config file)
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Time window as NAME=START-END[:STYLE]; repeat to add more
    #[arg(long = "window", value_name = "WINDOW", value_parser = parse_window)]
    pub windows: Vec<TimeWindow>,

    /// Config file path (default: $HOURLY_SPARK_CONFIG_DIR or ~/.config/hourly-spark)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the resolved settings back to the config file
    #[arg(long)]
    pub save_config: bool,

    /// Treat this hour (0..23) as "now" instead of the local clock
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Forecast API base URL
    #[arg(long, hide = true)]
    pub forecast_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon)) => validate_coordinates(lat, lon),
            (None, None) => Ok(()),
        }
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}

pub fn validate_coordinates(lat: f64, lon: f64) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        anyhow::bail!("latitude {lat} is outside -90..90");
    }
    if !(-180.0..=180.0).contains(&lon) {
        anyhow::bail!("longitude {lon} is outside -180..180");
    }
    Ok(())
}
