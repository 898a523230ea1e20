//! Theme and color palette definitions for the terminal UI.

use ratatui::style::{Color, palette::tailwind};
use strum::{Display, EnumIter, EnumString};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub row_header_bg: Color,
    pub selected_row_fg: Color,
    pub error: Color,
    pub success: Color,
    pub header_text: Color,
    pub text: Color,
    pub border_color: Color,
    pub placeholder: Color,
    pub gray: Color,
    pub input_editing: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Self::new(Theme::default().to_palette(false), false)
    }
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        if true_color_enabled {
            Self {
                buffer_bg: tailwind::SLATE.c950,
                row_header_bg: color.c900,
                selected_row_fg: color.c400,
                error: tailwind::RED.c600,
                success: tailwind::GREEN.c500,
                header_text: color.c400,
                text: tailwind::SLATE.c200,
                border_color: color.c400,
                placeholder: tailwind::SLATE.c500,
                gray: tailwind::SLATE.c800,
                input_editing: tailwind::AMBER.c600,
            }
        } else {
            Self {
                buffer_bg: Color::Black,
                row_header_bg: color.c900,
                selected_row_fg: color.c400,
                error: Color::Red,
                success: Color::Green,
                header_text: color.c400,
                text: Color::White,
                border_color: color.c400,
                placeholder: Color::Gray,
                gray: Color::DarkGray,
                input_editing: Color::LightYellow,
            }
        }
    }
}

/// Available color themes for the application.
#[derive(
    Debug, Default, Eq, PartialEq, Copy, Clone, Display, EnumString, EnumIter,
)]
pub enum Theme {
    #[default]
    Blue,
    Emerald,
    Indigo,
    Red,
}

/// Palette for terminals without true color support: the light shade up to
/// c400, the base color from c500 on.
const fn basic_palette(light: Color, base: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: base,
        c600: base,
        c700: base,
        c800: base,
        c900: base,
        c950: base,
    }
}

const BASIC_CYAN: tailwind::Palette = basic_palette(Color::LightCyan, Color::Cyan);
const BASIC_GREEN: tailwind::Palette =
    basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA: tailwind::Palette =
    basic_palette(Color::LightMagenta, Color::Magenta);
const BASIC_RED: tailwind::Palette = basic_palette(Color::LightRed, Color::Red);

impl Theme {
    /// Parses a theme from its string name, defaulting to Blue.
    pub fn from_string(value: &str) -> Theme {
        value.parse().unwrap_or_default()
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(
        self,
        true_color_enabled: bool,
    ) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_CYAN,
                Theme::Emerald => &BASIC_GREEN,
                Theme::Indigo => &BASIC_MAGENTA,
                Theme::Red => &BASIC_RED,
            }
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
