mod common;

use common::{sample, stockholm_day};
use hourly_spark::{
    app::settings::Settings,
    domain::{
        rows::RowKind,
        sparkline::CURRENT_MARKER,
        weather::IconMode,
        windows::{HighlightStyle, TimeWindow, WindowIssue},
    },
    forecast_rows,
    ui::{
        table::{forecast_table, plain_lines},
        theme::Theme,
    },
};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

fn settings(windows: Vec<TimeWindow>) -> Settings {
    Settings {
        latitude: Some(59.3293),
        longitude: Some(18.0686),
        windows,
        ..Settings::default()
    }
}

fn draw(rows: &[hourly_spark::domain::rows::DisplayRow], width: u16) -> Buffer {
    let height = u16::try_from(rows.len()).expect("row count");
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| frame.render_widget(forecast_table(rows, Theme::basic16()), frame.area()))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn line_at(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[test]
fn plain_output_aligns_two_columns() {
    let samples: Vec<_> = (0..8).map(|h| sample(h, h as f32, 0.0, 3)).collect();
    let rows = forecast_rows(
        &samples,
        99,
        &settings(vec![TimeWindow::new("Early", 2, 4)]),
        IconMode::Ascii,
    );

    insta::assert_snapshot!(plain_lines(&rows.rows).join("\n"), @r"
    0–7°C    ▁▂▃▄▅▆▇█
    * Early  CLD overcast
    ");
}

#[test]
fn stockholm_day_produces_expected_rows() {
    let windows = vec![
        TimeWindow::new("Commute", 7, 9).with_style(HighlightStyle::Info),
        TimeWindow::new("Afternoon", 14, 17).with_style(HighlightStyle::Warning),
        TimeWindow::new("Never", 14, 12),
    ];
    let rows = forecast_rows(&stockholm_day(), 10, &settings(windows), IconMode::Unicode);

    let kinds: Vec<_> = rows.rows.iter().map(|r| r.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            RowKind::Temperature,
            RowKind::Precipitation,
            RowKind::Window("Commute".to_string()),
            RowKind::Window("Afternoon".to_string()),
        ]
    );
    assert_eq!(rows.rows[0].label_text(), "-3–5°C");
    assert_eq!(rows.rows[1].label_text(), "55% Thunderstorm");
    assert_eq!(rows.rows[2].value_text(), "☁ overcast");
    assert_eq!(rows.rows[3].value_text(), "⛈ thunderstorm");
    assert_eq!(rows.diagnostics.invalid[0].issue, WindowIssue::InvalidRange);
    assert!(rows.diagnostics.overlaps.is_empty());

    let temps = rows.rows[0].value_text();
    assert_eq!(temps.chars().filter(|c| *c != CURRENT_MARKER).count(), 24);
    assert_eq!(temps.chars().position(|c| c == CURRENT_MARKER), Some(10));
}

#[test]
fn table_colors_highlighted_hours() {
    let samples: Vec<_> = (0..6).map(|h| sample(h, 1.0 + h as f32, 0.0, 0)).collect();
    let windows = vec![TimeWindow::new("Mid", 2, 4).with_style(HighlightStyle::Danger)];
    let rows = forecast_rows(&samples, 99, &settings(windows), IconMode::Ascii);
    let buffer = draw(&rows.rows, 40);

    assert_eq!(line_at(&buffer, 0), "1–6°C  ▁▂▄▅▇█");
    assert_eq!(line_at(&buffer, 1), "* Mid  SUN clear sky");

    let spark_start = 7;
    assert_eq!(buffer[(spark_start + 2, 0)].fg, Color::Red);
    assert_eq!(buffer[(spark_start + 3, 0)].fg, Color::Red);
    assert_eq!(buffer[(spark_start + 1, 0)].fg, Color::Gray);
    assert_eq!(buffer[(0, 1)].fg, Color::Red);
}

#[test]
fn json_rows_serialize_kind_and_segments() {
    let samples: Vec<_> = (0..3).map(|h| sample(h, 0.0, 0.0, 0)).collect();
    let rows = forecast_rows(
        &samples,
        1,
        &settings(vec![TimeWindow::new("All", 0, 3)]),
        IconMode::Ascii,
    );
    let json = serde_json::to_value(&rows).expect("serialize rows");

    assert_eq!(json["rows"][0]["kind"]["kind"], "temperature");
    assert_eq!(json["rows"][1]["kind"]["window"], "All");
    assert_eq!(json["rows"][1]["label"][0]["style"], "success");
    assert!(json["diagnostics"]["overlaps"].as_array().expect("array").is_empty());
}
