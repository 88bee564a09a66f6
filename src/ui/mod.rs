pub mod table;
pub mod theme;

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};

use crate::{
    cli::{ColorArg, FormatArg},
    domain::rows::{DisplayRow, ForecastRows},
};
use theme::{Theme, detect_color_capability, theme_for};

/// Writes the rows to stdout in the requested format.
pub fn print(rows: &ForecastRows, format: FormatArg, color: ColorArg) -> Result<()> {
    match format {
        FormatArg::Json => print_json(rows),
        FormatArg::Plain => print_plain(&rows.rows),
        FormatArg::Table => {
            let interactive = io::stdout().is_tty();
            if color == ColorArg::Never || (color == ColorArg::Auto && !interactive) {
                print_plain(&rows.rows)
            } else {
                draw_inline(&rows.rows, theme_for(color, detect_color_capability()))
            }
        }
    }
}

fn print_json(rows: &ForecastRows) -> Result<()> {
    let payload = serde_json::to_string_pretty(rows).context("serializing rows failed")?;
    writeln!(io::stdout(), "{payload}").context("writing rows failed")
}

fn print_plain(rows: &[DisplayRow]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in table::plain_lines(rows) {
        writeln!(stdout, "{line}").context("writing rows failed")?;
    }
    Ok(())
}

fn draw_inline(rows: &[DisplayRow], theme: Theme) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;
    terminal.draw(|frame| frame.render_widget(table::forecast_table(rows, theme), frame.area()))?;
    drop(terminal);
    writeln!(io::stdout()).context("writing rows failed")
}
