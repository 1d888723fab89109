//! Theme resolution logic
//!
//! Pure functions for the effective-theme precedence and the terminal
//! background sniff that stands in for the host's dark-mode signal.

use crate::Theme;

/// Resolve the effective theme on startup.
///
/// Precedence: explicit stored preference > system dark signal > light.
///
/// # Examples
/// ```
/// use foliotui::Theme;
/// use foliotui::logic::theme::effective_theme;
///
/// assert_eq!(effective_theme(Some(Theme::Light), true), Theme::Light);
/// assert_eq!(effective_theme(None, true), Theme::Dark);
/// assert_eq!(effective_theme(None, false), Theme::Light);
/// ```
pub fn effective_theme(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// The inverted theme (the toggle action)
pub fn toggled(theme: Theme) -> Theme {
    match theme {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    }
}

/// Parse a COLORFGBG value ("fg;bg" or "fg;default;bg") into a dark-background
/// flag. Returns None when the value carries no usable signal.
///
/// Background colors 7 and 15 are the conventional light backgrounds; every
/// other palette index counts as dark.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg = value.split(';').next_back()?.trim();
    let n: u8 = bg.parse().ok()?;
    Some(!matches!(n, 7 | 15))
}

/// One-time startup check of the terminal's background convention.
/// No signal means "not dark", mirroring a host without the media query.
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
        .unwrap_or(false)
}
