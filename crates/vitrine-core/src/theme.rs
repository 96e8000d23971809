//! Color themes for the site chrome and background effects.

use ratatui::style::Color;

/// Accent color theme, cycled with the `c` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Violet,
    Cyan,
    Green,
    Amber,
    Magenta,
}

impl ColorTheme {
    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Violet => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Violet,
        }
    }

    /// Accent color used for headings, particles and the cursor.
    pub fn accent(self) -> Color {
        match self {
            ColorTheme::Violet => Color::Rgb(189, 147, 249),
            ColorTheme::Cyan => Color::Rgb(139, 233, 253),
            ColorTheme::Green => Color::Rgb(80, 250, 123),
            ColorTheme::Amber => Color::Rgb(255, 184, 108),
            ColorTheme::Magenta => Color::Rgb(255, 121, 198),
        }
    }

    /// Dimmed accent used for the background grid lines.
    pub fn grid(self) -> Color {
        match self {
            ColorTheme::Violet => Color::Rgb(66, 51, 87),
            ColorTheme::Cyan => Color::Rgb(48, 81, 88),
            ColorTheme::Green => Color::Rgb(28, 87, 43),
            ColorTheme::Amber => Color::Rgb(89, 64, 38),
            ColorTheme::Magenta => Color::Rgb(89, 42, 69),
        }
    }

    /// Parse a lowercase name. Unrecognized names fall back to violet.
    pub fn parse(s: &str) -> Self {
        match s {
            "violet" => ColorTheme::Violet,
            "cyan" => ColorTheme::Cyan,
            "green" => ColorTheme::Green,
            "amber" => ColorTheme::Amber,
            "magenta" => ColorTheme::Magenta,
            _ => ColorTheme::Violet,
        }
    }
}
