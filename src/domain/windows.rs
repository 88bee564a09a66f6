use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use super::weather::{HourlySample, WeatherCodeInfo, weather_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    #[default]
    Success,
    Info,
    Warning,
    Danger,
    Accent,
}

impl HighlightStyle {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" | "ok" => Some(Self::Success),
            "info" => Some(Self::Info),
            "warning" | "warn" => Some(Self::Warning),
            "danger" | "error" => Some(Self::Danger),
            "accent" => Some(Self::Accent),
            _ => None,
        }
    }
}

/// A named, half-open `[start_hour, end_hour)` slice of the day.
///
/// Bounds are kept exactly as configured, even when they fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub name: String,
    #[serde(alias = "start")]
    pub start_hour: i32,
    #[serde(alias = "end")]
    pub end_hour: i32,
    #[serde(default)]
    pub style: HighlightStyle,
}

impl TimeWindow {
    pub fn new(name: impl Into<String>, start_hour: i32, end_hour: i32) -> Self {
        Self {
            name: name.into(),
            start_hour,
            end_hour,
            style: HighlightStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn covers(&self, hour: u32) -> bool {
        let hour = i64::from(hour);
        i64::from(self.start_hour) <= hour && hour < i64::from(self.end_hour)
    }
}

/// Sample index to style, where the first claim on an index sticks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightMap(BTreeMap<usize, HighlightStyle>);

impl HighlightMap {
    /// Returns `false` when the index was already claimed; the earlier style is kept.
    pub fn claim(&mut self, index: usize, style: HighlightStyle) -> bool {
        if self.0.contains_key(&index) {
            return false;
        }
        self.0.insert(index, style);
        true
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<HighlightStyle> {
        self.0.get(&index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowIssue {
    OutOfRange,
    InvalidRange,
}

impl fmt::Display for WindowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindowIssue::OutOfRange => "out-of-range",
            WindowIssue::InvalidRange => "invalid-range",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidWindow {
    pub name: String,
    pub issue: WindowIssue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowOverlap {
    pub first: String,
    pub second: String,
    pub start_hour: i32,
    pub end_hour: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WindowDiagnostics {
    pub invalid: Vec<InvalidWindow>,
    pub overlaps: Vec<WindowOverlap>,
}

impl WindowDiagnostics {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty() && self.overlaps.is_empty()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let invalid = self.invalid.iter().map(|w| {
            format!("window \"{}\" has an {} hour span", w.name, w.issue)
        });
        let overlaps = self.overlaps.iter().map(|o| {
            format!(
                "windows \"{}\" and \"{}\" overlap at {:02}:00-{:02}:00",
                o.first, o.second, o.start_hour, o.end_hour
            )
        });
        invalid.chain(overlaps).collect()
    }
}

/// Checks every window's bounds and every pair for overlap. Advisory only.
#[must_use]
pub fn validate(windows: &[TimeWindow]) -> WindowDiagnostics {
    let invalid = windows
        .iter()
        .filter_map(|window| {
            window_issue(window).map(|issue| InvalidWindow {
                name: window.name.clone(),
                issue,
            })
        })
        .collect();

    let overlaps = windows
        .iter()
        .enumerate()
        .flat_map(|(idx, first)| {
            windows[idx + 1..]
                .iter()
                .filter_map(move |second| overlap(first, second))
        })
        .collect();

    WindowDiagnostics { invalid, overlaps }
}

fn window_issue(window: &TimeWindow) -> Option<WindowIssue> {
    let in_day = |hour: i32| (0..=23).contains(&hour);
    if !in_day(window.start_hour) || !in_day(window.end_hour) {
        Some(WindowIssue::OutOfRange)
    } else if window.end_hour <= window.start_hour {
        Some(WindowIssue::InvalidRange)
    } else {
        None
    }
}

#[must_use]
pub fn overlap(first: &TimeWindow, second: &TimeWindow) -> Option<WindowOverlap> {
    let start_hour = first.start_hour.max(second.start_hour);
    let end_hour = first.end_hour.min(second.end_hour);
    (start_hour < end_hour).then(|| WindowOverlap {
        first: first.name.clone(),
        second: second.name.clone(),
        start_hour,
        end_hour,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowProjection {
    pub matched: Vec<usize>,
    pub style: HighlightStyle,
    pub worst: Option<WeatherCodeInfo>,
}

impl WindowProjection {
    pub fn highlight_entries(&self) -> impl Iterator<Item = (usize, HighlightStyle)> + '_ {
        self.matched.iter().map(|&idx| (idx, self.style))
    }
}

/// Selects the samples inside `window` and resolves their most severe code.
#[must_use]
pub fn project(samples: &[HourlySample], window: &TimeWindow) -> WindowProjection {
    let matched: Vec<usize> = samples
        .iter()
        .enumerate()
        .filter_map(|(idx, sample)| window.covers(sample.hour).then_some(idx))
        .collect();
    let worst = matched
        .iter()
        .map(|&idx| samples[idx].weather_code)
        .max()
        .map(weather_info);

    WindowProjection {
        matched,
        style: window.style,
        worst,
    }
}
