//! Footer
//!
//! Hotkey legend plus the copyright line with the current-year stamp.

use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::Model;
use crate::ui::theme::Palette;

/// Render the two footer lines
pub fn render_footer(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) {
    let mut legend =
        String::from(" Tab focus · ↑↓ select/scroll · Enter/Space open · t theme · m menu · q quit");
    if model.ui.vim_mode {
        legend.push_str(" · j/k gg G scroll");
    }

    let stamp = format!(" © {} {}", Local::now().year(), model.page.title);

    let lines = vec![
        Line::styled(legend, Style::default().fg(palette.muted)),
        Line::styled(stamp, Style::default().fg(palette.muted)),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(palette.bg));
    f.render_widget(paragraph, area);
}
