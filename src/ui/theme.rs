//! Color palettes for the two themes
//!
//! No dependencies on app state or business logic.

use ratatui::style::Color;

use crate::Theme;

/// Resolved color set for one theme
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub heading: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

/// Palette for the active theme
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg: Color::Black,
            fg: Color::Gray,
            heading: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
            border: Color::DarkGray,
        },
        Theme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            heading: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        },
    }
}

/// Icon on the theme toggle: the action shows what you switch to
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}
