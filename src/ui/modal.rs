//! Gallery detail modal
//!
//! A centered content box over the page. The whole screen acts as the
//! backdrop while the modal is open; the returned hits let the mouse
//! handler tell backdrop clicks from content clicks.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::rows::wrap_text;
use crate::model::ModalState;
use crate::ui::layout::ModalHits;
use crate::ui::theme::Palette;

const CLOSE_LABEL: &str = "[ Close (Esc) ]";

/// Render the modal and report its hit rectangles
pub fn render_modal(
    f: &mut Frame,
    screen: Rect,
    modal: &ModalState,
    palette: &Palette,
) -> ModalHits {
    let content_width = screen.width.saturating_sub(4).min(62).max(20);
    let text_width = content_width.saturating_sub(4) as usize;
    let desc_lines = wrap_text(&modal.desc, text_width);

    // Borders + desc + blank + close row
    let content_height = (desc_lines.len() as u16 + 4).min(screen.height.saturating_sub(2));
    let content_area = Rect {
        x: (screen.width.saturating_sub(content_width)) / 2,
        y: (screen.height.saturating_sub(content_height)) / 2,
        width: content_width,
        height: content_height,
    };

    let mut lines: Vec<Line> = desc_lines
        .into_iter()
        .map(|text| Line::styled(format!(" {}", text), Style::default().fg(palette.fg)))
        .collect();
    lines.push(Line::default());

    let close_width = UnicodeWidthStr::width(CLOSE_LABEL) as u16;
    let inner_width = content_area.width.saturating_sub(2);
    let close_indent = inner_width.saturating_sub(close_width) / 2;
    lines.push(Line::styled(
        format!("{}{}", " ".repeat(close_indent as usize), CLOSE_LABEL),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", modal.title))
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().bg(palette.bg).fg(palette.fg));

    f.render_widget(Clear, content_area);
    f.render_widget(paragraph, content_area);

    let close = Rect::new(
        content_area.x + 1 + close_indent,
        content_area.bottom().saturating_sub(2),
        close_width,
        1,
    );

    ModalHits {
        container: screen,
        content: content_area,
        close,
    }
}
