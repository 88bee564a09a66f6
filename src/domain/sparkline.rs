use serde::Serialize;

use super::windows::{HighlightMap, HighlightStyle};

pub const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Narrow no-break space placed in front of the glyph for the current hour.
pub const CURRENT_MARKER: char = '\u{202F}';

const LEVELS: f32 = 8.0;
const TOP_LEVEL: usize = BARS.len() - 1;
const FLAT_LEVEL: usize = 4;

/// Maps `value` within `[min, max]` onto one of the eight bar levels.
///
/// A series that is zero everywhere sits on the floor; any other constant
/// series is drawn at mid height.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
#[must_use]
pub fn normalize(value: f32, min: f32, max: f32) -> usize {
    let range = max - min;
    if range == 0.0 {
        return if max == 0.0 { 0 } else { FLAT_LEVEL };
    }
    let level = (LEVELS * (value - min) / range).floor();
    (level.max(0.0) as usize).min(TOP_LEVEL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SparkGlyph {
    pub symbol: char,
    pub style: Option<HighlightStyle>,
    pub current: bool,
}

/// Renders one glyph per value. Empty input renders nothing.
#[must_use]
pub fn render(values: &[f32], highlights: &HighlightMap, current: Option<usize>) -> Vec<SparkGlyph> {
    let Some((min, max)) = bounds(values) else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| SparkGlyph {
            symbol: BARS[normalize(value, min, max)],
            style: highlights.get(idx),
            current: current == Some(idx),
        })
        .collect()
}

pub(crate) fn bounds(values: &[f32]) -> Option<(f32, f32)> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(min, max), &value| (min.min(value), max.max(value)),
    ))
}
