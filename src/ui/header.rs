//! Header bar
//!
//! Site title on the left, then the inline nav links (wide viewports only),
//! the nav toggle with its Open/Close label, and the theme toggle. Returns
//! the hit rectangles for the clickable controls.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::nav::is_narrow;
use crate::model::Model;
use crate::ui::theme::{theme_icon, Palette};

/// Hit rectangles of the header controls
pub struct HeaderHits {
    pub nav_toggle: Rect,
    pub theme_toggle: Rect,
    pub links: Vec<(Rect, usize)>,
}

fn push_span(spans: &mut Vec<Span<'static>>, x: &mut u16, y: u16, text: String, style: Style) -> Rect {
    let width = UnicodeWidthStr::width(text.as_str()) as u16;
    let rect = Rect::new(*x, y, width, 1);
    spans.push(Span::styled(text, style));
    *x = x.saturating_add(width);
    rect
}

/// Render the header bar and report where its controls landed
pub fn render_header(f: &mut Frame, area: Rect, model: &Model, palette: &Palette) -> HeaderHits {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let ui = &model.ui;
    let narrow = is_narrow(ui.viewport_width);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut x = inner.x;
    let y = inner.y;
    let mut hits = HeaderHits {
        nav_toggle: Rect::default(),
        theme_toggle: Rect::default(),
        links: Vec::new(),
    };

    push_span(
        &mut spans,
        &mut x,
        y,
        model.page.title.clone(),
        Style::default()
            .fg(palette.heading)
            .add_modifier(Modifier::BOLD),
    );
    push_span(&mut spans, &mut x, y, "   ".to_string(), Style::default());

    // Inline links collapse behind the toggle at narrow viewports
    if !narrow {
        for (index, link) in model.page.nav.iter().enumerate() {
            let rect = push_span(
                &mut spans,
                &mut x,
                y,
                link.label.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::UNDERLINED),
            );
            hits.links.push((rect, index));
            push_span(&mut spans, &mut x, y, "  ".to_string(), Style::default());
        }
    }

    hits.nav_toggle = push_span(
        &mut spans,
        &mut x,
        y,
        format!("[☰ {}]", ui.nav_toggle_label()),
        Style::default().fg(palette.fg),
    );
    push_span(&mut spans, &mut x, y, " ".to_string(), Style::default());

    let theme_style = if ui.theme_pressed() {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(palette.fg)
    };
    hits.theme_toggle = push_span(
        &mut spans,
        &mut x,
        y,
        format!("[{}]", theme_icon(ui.theme)),
        theme_style,
    );

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg));
    f.render_widget(paragraph, inner);

    hits
}
