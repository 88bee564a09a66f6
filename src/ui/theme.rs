use ratatui::style::{Color, Modifier, Style};

use crate::{cli::ColorArg, domain::windows::HighlightStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted_text: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub accent: Color,
    pub highlight_modifier: Modifier,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Mono;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

#[must_use]
pub fn theme_for(color: ColorArg, capability: ColorCapability) -> Theme {
    match (color, capability) {
        (ColorArg::Never, _) | (ColorArg::Auto, ColorCapability::Mono) => Theme::mono(),
        (_, ColorCapability::TrueColor) => Theme::truecolor(),
        (_, ColorCapability::Xterm256) => Theme::xterm256(),
        (_, ColorCapability::Basic16 | ColorCapability::Mono) => Theme::default(),
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::basic16()
    }
}

impl Theme {
    #[must_use]
    pub fn truecolor() -> Self {
        Self {
            text: Color::Rgb(226, 232, 240),
            muted_text: Color::Rgb(148, 163, 184),
            success: Color::Rgb(74, 222, 128),
            info: Color::Rgb(56, 189, 248),
            warning: Color::Rgb(251, 191, 36),
            danger: Color::Rgb(248, 113, 113),
            accent: Color::Rgb(192, 132, 252),
            highlight_modifier: Modifier::empty(),
        }
    }

    #[must_use]
    pub fn xterm256() -> Self {
        Self {
            text: Color::Indexed(254),
            muted_text: Color::Indexed(246),
            success: Color::Indexed(114),
            info: Color::Indexed(81),
            warning: Color::Indexed(221),
            danger: Color::Indexed(210),
            accent: Color::Indexed(183),
            highlight_modifier: Modifier::empty(),
        }
    }

    #[must_use]
    pub fn basic16() -> Self {
        Self {
            text: Color::White,
            muted_text: Color::Gray,
            success: Color::Green,
            info: Color::Cyan,
            warning: Color::Yellow,
            danger: Color::Red,
            accent: Color::Magenta,
            highlight_modifier: Modifier::empty(),
        }
    }

    /// No colors at all; highlighted positions are bold instead.
    #[must_use]
    pub fn mono() -> Self {
        Self {
            text: Color::Reset,
            muted_text: Color::Reset,
            success: Color::Reset,
            info: Color::Reset,
            warning: Color::Reset,
            danger: Color::Reset,
            accent: Color::Reset,
            highlight_modifier: Modifier::BOLD,
        }
    }

    #[must_use]
    pub fn color_for(self, style: HighlightStyle) -> Color {
        match style {
            HighlightStyle::Success => self.success,
            HighlightStyle::Info => self.info,
            HighlightStyle::Warning => self.warning,
            HighlightStyle::Danger => self.danger,
            HighlightStyle::Accent => self.accent,
        }
    }

    #[must_use]
    pub fn segment_style(self, style: Option<HighlightStyle>) -> Style {
        match style {
            Some(tag) => Style::default()
                .fg(self.color_for(tag))
                .add_modifier(self.highlight_modifier),
            None => Style::default().fg(self.muted_text),
        }
    }
}
