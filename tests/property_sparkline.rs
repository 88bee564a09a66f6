use hourly_spark::domain::{
    sparkline::{BARS, normalize, render},
    windows::{HighlightMap, TimeWindow, overlap},
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_stays_within_levels(
        a in -500.0f32..500.0,
        b in -500.0f32..500.0,
        t in 0.0f32..=1.0,
    ) {
        let min = a.min(b);
        let max = a.max(b);
        let value = (min + (max - min) * t).clamp(min, max);
        prop_assert!(normalize(value, min, max) <= 7);
    }

    #[test]
    fn series_extremes_hit_first_and_last_level(
        values in prop::collection::vec(-100.0f32..100.0, 2..48),
    ) {
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        prop_assume!(min < max);
        prop_assert_eq!(normalize(min, min, max), 0);
        prop_assert_eq!(normalize(max, min, max), 7);
    }

    #[test]
    fn constant_series_is_floor_or_mid(value in -100.0f32..100.0, len in 1usize..24) {
        let glyphs = render(&vec![value; len], &HighlightMap::default(), None);
        let expected = if value == 0.0 { BARS[0] } else { BARS[4] };
        prop_assert_eq!(glyphs.len(), len);
        prop_assert!(glyphs.iter().all(|g| g.symbol == expected));
    }

    #[test]
    fn render_preserves_length(
        values in prop::collection::vec(-50.0f32..50.0, 0..48),
        current in prop::option::of(0usize..48),
    ) {
        let glyphs = render(&values, &HighlightMap::default(), current);
        prop_assert_eq!(glyphs.len(), values.len());
        prop_assert!(glyphs.iter().filter(|g| g.current).count() <= 1);
    }

    #[test]
    fn overlap_span_is_symmetric(
        a_start in -2i32..26, a_end in -2i32..26,
        b_start in -2i32..26, b_end in -2i32..26,
    ) {
        let a = TimeWindow::new("A", a_start, a_end);
        let b = TimeWindow::new("B", b_start, b_end);
        let ab = overlap(&a, &b).map(|o| (o.start_hour, o.end_hour));
        let ba = overlap(&b, &a).map(|o| (o.start_hour, o.end_hour));
        prop_assert_eq!(ab, ba);
    }
}

#[test]
fn all_zero_series_renders_floor() {
    let glyphs = render(&[0.0; 24], &HighlightMap::default(), None);
    assert!(glyphs.iter().all(|g| g.symbol == '▁'));
}
