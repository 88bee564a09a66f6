use ratatui::{
    layout::Constraint,
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Row, Table},
};

use super::theme::Theme;
use crate::domain::rows::{DisplayRow, Segment};

const COLUMN_SPACING: u16 = 2;

fn segments_line(segments: &[Segment], theme: Theme, base: Style) -> Line<'static> {
    Line::from(
        segments
            .iter()
            .map(|segment| {
                let style = match segment.style {
                    Some(_) => theme.segment_style(segment.style),
                    None => base,
                };
                Span::styled(segment.text.clone(), style)
            })
            .collect::<Vec<_>>(),
    )
}

fn plain_line(segments: &[Segment]) -> Line<'static> {
    Line::from(
        segments
            .iter()
            .map(|segment| Span::raw(segment.text.clone()))
            .collect::<Vec<_>>(),
    )
}

fn label_width(rows: &[DisplayRow]) -> usize {
    rows.iter()
        .map(|row| plain_line(&row.label).width())
        .max()
        .unwrap_or(0)
}

/// Two-column table: labels on the left, sparklines and descriptions on the right.
pub fn forecast_table(rows: &[DisplayRow], theme: Theme) -> Table<'static> {
    let label_style = Style::default().fg(theme.text);
    let value_style = Style::default().fg(theme.muted_text);
    let table_rows = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(segments_line(&row.label, theme, label_style)),
                Cell::from(segments_line(&row.value, theme, value_style)),
            ])
        })
        .collect::<Vec<_>>();
    let width = u16::try_from(label_width(rows)).unwrap_or(u16::MAX);

    Table::new(table_rows, [Constraint::Length(width), Constraint::Min(0)])
        .column_spacing(COLUMN_SPACING)
}

/// Unstyled rendering with the label column padded to a common display width.
pub fn plain_lines(rows: &[DisplayRow]) -> Vec<String> {
    let width = label_width(rows) + usize::from(COLUMN_SPACING);
    rows.iter()
        .map(|row| {
            let label = row.label_text();
            let pad = width.saturating_sub(plain_line(&row.label).width());
            format!("{label}{}{}", " ".repeat(pad), row.value_text())
                .trim_end()
                .to_string()
        })
        .collect()
}
