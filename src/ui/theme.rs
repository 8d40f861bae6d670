use ratatui::style::Color;

use crate::cli::{Cli, ColorArg};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header_bg: Color,
    pub header_fg: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub today: Color,
    pub border: Color,
}

impl Theme {
    // Header blue matches the product's brand color.
    pub const fn default_palette() -> Self {
        Self {
            header_bg: Color::Rgb(21, 101, 192),
            header_fg: Color::White,
            text: Color::Rgb(220, 223, 228),
            muted_text: Color::DarkGray,
            accent: Color::Rgb(100, 181, 246),
            today: Color::Yellow,
            border: Color::Rgb(70, 74, 84),
        }
    }

    pub const fn mono() -> Self {
        Self {
            header_bg: Color::Reset,
            header_fg: Color::Reset,
            text: Color::Reset,
            muted_text: Color::Reset,
            accent: Color::Reset,
            today: Color::Reset,
            border: Color::Reset,
        }
    }
}

pub fn theme_for(cli: &Cli) -> Theme {
    match cli.effective_color_mode() {
        ColorArg::Never => Theme::mono(),
        ColorArg::Auto | ColorArg::Always => Theme::default_palette(),
    }
}
