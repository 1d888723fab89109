//! Collapsed-nav overlay panel
//!
//! Shown when the nav is open at a narrow viewport. Links render one per
//! row with the current selection highlighted; the returned rects feed the
//! mouse hit map.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::Model;
use crate::ui::theme::Palette;

/// Render the nav panel in the top-right corner of the body area
pub fn render_nav_panel(
    f: &mut Frame,
    body_area: Rect,
    model: &Model,
    palette: &Palette,
) -> Vec<(Rect, usize)> {
    let links = &model.page.nav;
    if links.is_empty() {
        return Vec::new();
    }

    let widest = links
        .iter()
        .map(|link| UnicodeWidthStr::width(link.label.as_str()))
        .max()
        .unwrap_or(0) as u16;
    let panel_width = (widest + 6).min(body_area.width);
    let panel_height = (links.len() as u16 + 2).min(body_area.height);
    let panel_area = Rect {
        x: body_area.right().saturating_sub(panel_width),
        y: body_area.y,
        width: panel_width,
        height: panel_height,
    };

    let lines: Vec<Line> = links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let selected = model.ui.nav_selection == Some(index);
            let style = if selected {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.fg)
            };
            let marker = if selected { "► " } else { "  " };
            Line::styled(format!("{}{}", marker, link.label), style)
        })
        .collect();

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Menu ")
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().bg(palette.bg));

    f.render_widget(Clear, panel_area);
    f.render_widget(panel, panel_area);

    // One hit rect per visible link row
    let inner = Rect {
        x: panel_area.x + 1,
        y: panel_area.y + 1,
        width: panel_area.width.saturating_sub(2),
        height: panel_area.height.saturating_sub(2),
    };
    links
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(index, _)| {
            (
                Rect::new(inner.x, inner.y + index as u16, inner.width, 1),
                index,
            )
        })
        .collect()
}
