use serde::Serialize;

use super::{
    sparkline::{self, CURRENT_MARKER, SparkGlyph},
    weather::{HourlySample, IconMode, Units, weather_icon, weather_info},
    windows::{HighlightMap, HighlightStyle, TimeWindow, WindowDiagnostics, project, validate},
};

const WINDOW_MARKER: &str = "●";
const WINDOW_MARKER_ASCII: &str = "*";

/// A run of text sharing one highlight style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub style: Option<HighlightStyle>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: HighlightStyle) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "window", rename_all = "lowercase")]
pub enum RowKind {
    Temperature,
    Precipitation,
    Window(String),
}

/// One line of the two-column forecast table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub kind: RowKind,
    pub label: Vec<Segment>,
    pub value: Vec<Segment>,
}

impl DisplayRow {
    #[must_use]
    pub fn label_text(&self) -> String {
        self.label.iter().map(|s| s.text.as_str()).collect()
    }

    #[must_use]
    pub fn value_text(&self) -> String {
        self.value.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForecastRows {
    pub rows: Vec<DisplayRow>,
    pub diagnostics: WindowDiagnostics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOptions {
    pub units: Units,
    pub icons: IconMode,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            units: Units::Celsius,
            icons: IconMode::Unicode,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SeriesSummary {
    temp_min: f32,
    temp_max: f32,
    precip_max: f32,
    rain_code: Option<u8>,
}

/// Builds the temperature row, the precipitation row when any hour has a
/// chance of rain, and one row per window that matched at least one hour.
///
/// Window problems are logged and returned alongside the rows; they never
/// change what is rendered.
#[must_use]
pub fn build_rows(
    samples: &[HourlySample],
    current_hour: u32,
    windows: &[TimeWindow],
    options: RowOptions,
) -> ForecastRows {
    let diagnostics = validate(windows);
    for message in diagnostics.messages() {
        log::warn!("{message}");
    }

    let samples: Vec<HourlySample> = samples.iter().map(|s| s.in_units(options.units)).collect();
    let Some(summary) = summarize(&samples) else {
        return ForecastRows {
            rows: Vec::new(),
            diagnostics,
        };
    };

    let mut highlights = HighlightMap::default();
    let mut window_rows = Vec::new();
    for window in windows {
        let projection = project(&samples, window);
        for (idx, style) in projection.highlight_entries() {
            highlights.claim(idx, style);
        }
        if let Some(worst) = projection.worst {
            window_rows.push(window_row(window, worst.code, options.icons));
        }
    }

    let current = samples.iter().position(|s| s.hour == current_hour);
    let mut rows = vec![temperature_row(&samples, &summary, &highlights, current, options.units)];
    if let Some(code) = summary.rain_code {
        rows.push(precipitation_row(
            &samples,
            &summary,
            code,
            &highlights,
            current,
        ));
    }
    rows.extend(window_rows);

    ForecastRows { rows, diagnostics }
}

fn summarize(samples: &[HourlySample]) -> Option<SeriesSummary> {
    let first = samples.first()?;
    let seed = SeriesSummary {
        temp_min: first.temperature,
        temp_max: first.temperature,
        precip_max: first.precipitation_probability,
        rain_code: None,
    };
    Some(samples.iter().fold(seed, |acc, sample| SeriesSummary {
        temp_min: acc.temp_min.min(sample.temperature),
        temp_max: acc.temp_max.max(sample.temperature),
        precip_max: acc.precip_max.max(sample.precipitation_probability),
        rain_code: if sample.precipitation_probability > 0.0 {
            acc.rain_code.max(Some(sample.weather_code))
        } else {
            acc.rain_code
        },
    }))
}

#[allow(clippy::cast_possible_truncation)]
fn temperature_row(
    samples: &[HourlySample],
    summary: &SeriesSummary,
    highlights: &HighlightMap,
    current: Option<usize>,
    units: Units,
) -> DisplayRow {
    let label = format!(
        "{}–{}{}",
        summary.temp_min.floor() as i32,
        summary.temp_max.floor() as i32,
        units.symbol()
    );
    let temps: Vec<f32> = samples.iter().map(|s| s.temperature).collect();
    DisplayRow {
        kind: RowKind::Temperature,
        label: vec![Segment::plain(label)],
        value: sparkline_segments(&sparkline::render(&temps, highlights, current)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn precipitation_row(
    samples: &[HourlySample],
    summary: &SeriesSummary,
    rain_code: u8,
    highlights: &HighlightMap,
    current: Option<usize>,
) -> DisplayRow {
    let label = format!(
        "{}% {}",
        summary.precip_max.round() as i32,
        weather_info(rain_code).description
    );
    let chances: Vec<f32> = samples.iter().map(|s| s.precipitation_probability).collect();
    DisplayRow {
        kind: RowKind::Precipitation,
        label: vec![Segment::plain(label)],
        value: sparkline_segments(&sparkline::render(&chances, highlights, current)),
    }
}

fn window_row(window: &TimeWindow, worst_code: u8, icons: IconMode) -> DisplayRow {
    let marker = match icons {
        IconMode::Ascii => WINDOW_MARKER_ASCII,
        IconMode::Unicode | IconMode::Emoji => WINDOW_MARKER,
    };
    let description = weather_info(worst_code).description.to_lowercase();
    DisplayRow {
        kind: RowKind::Window(window.name.clone()),
        label: vec![
            Segment::styled(marker, window.style),
            Segment::plain(format!(" {}", window.name)),
        ],
        value: vec![Segment::plain(format!(
            "{} {description}",
            weather_icon(worst_code, icons)
        ))],
    }
}

/// Collapses glyphs into runs of equal style, with the current-hour marker
/// as its own unstyled run.
fn sparkline_segments(glyphs: &[SparkGlyph]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for glyph in glyphs {
        if glyph.current {
            segments.push(Segment::plain(CURRENT_MARKER));
        }
        match segments.last_mut() {
            Some(last) if last.style == glyph.style && !last.text.ends_with(CURRENT_MARKER) => {
                last.text.push(glyph.symbol);
            }
            _ => segments.push(Segment {
                text: glyph.symbol.to_string(),
                style: glyph.style,
            }),
        }
    }
    segments
}
