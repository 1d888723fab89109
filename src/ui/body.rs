//! Page body
//!
//! Renders the row stream from `logic::rows` with the current scroll
//! offset, styles interactive rows according to focus and selection, and
//! reports the screen rectangles of everything clickable.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::logic::rows::{build_rows, Row};
use crate::model::{FieldId, Focus};
use crate::storage::KvStore;
use crate::ui::theme::Palette;

/// Hit rectangles of the body's interactive rows
#[derive(Default)]
pub struct BodyHits {
    pub gallery_items: Vec<(Rect, usize)>,
    pub fields: Vec<(Rect, FieldId)>,
    pub submit: Rect,
}

/// Render the scrollable body and report interactive row positions
pub fn render_body<S: KvStore>(
    f: &mut Frame,
    area: Rect,
    app: &mut App<S>,
    palette: &Palette,
) -> BodyHits {
    // One cell of side padding
    let content = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    app.model.ui.body_width = content.width;

    let built = build_rows(&app.model.page, &app.model.form, content.width);
    app.model.scroll.max_offset = built.rows.len().saturating_sub(content.height as usize);
    if app.model.scroll.target.is_none() && app.model.scroll.offset > app.model.scroll.max_offset {
        app.model.scroll.offset = app.model.scroll.max_offset;
    }
    let offset = app.model.scroll.offset.min(app.model.scroll.max_offset);

    let mut hits = BodyHits::default();
    let visible = offset..offset.saturating_add(content.height as usize);

    let lines: Vec<Line> = built
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let rect = if visible.contains(&index) {
                Rect::new(
                    content.x,
                    content.y + (index - offset) as u16,
                    content.width,
                    1,
                )
            } else {
                Rect::default()
            };
            style_row(row, rect, app, palette, &mut hits)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(palette.fg).bg(palette.bg))
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, content);

    hits
}

fn style_row<S: KvStore>(
    row: &Row,
    rect: Rect,
    app: &App<S>,
    palette: &Palette,
    hits: &mut BodyHits,
) -> Line<'static> {
    let ui = &app.model.ui;
    let form = &app.model.form;

    match row {
        Row::Blank => Line::default(),
        Row::SectionTitle { section } => Line::styled(
            app.model.page.sections[*section].title.clone(),
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Row::Body { text } => Line::styled(text.clone(), Style::default().fg(palette.fg)),
        Row::GalleryItem { index } => {
            if rect.width > 0 {
                hits.gallery_items.push((rect, *index));
            }
            let selected = ui.gallery_selection == Some(*index);
            let style = if selected && ui.focus == Focus::Gallery {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if selected {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.fg)
            };
            let marker = if selected { "▸ " } else { "  " };
            Line::styled(
                format!("{}{}", marker, app.model.page.gallery[*index].title),
                style,
            )
        }
        Row::FieldLabel { field } => {
            Line::styled(field.label().to_string(), Style::default().fg(palette.muted))
        }
        Row::FieldInput { field } => {
            if rect.width > 0 {
                hits.fields.push((rect, *field));
            }
            let focused = ui.focus == Focus::Field(*field);
            let mut spans = vec![
                Span::styled("> ", Style::default().fg(palette.muted)),
                Span::styled(
                    form.value(*field).to_string(),
                    Style::default().fg(palette.fg),
                ),
            ];
            if focused {
                spans.push(Span::styled(
                    "█",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        }
        Row::FieldError { field } => Line::styled(
            form.errors.get(*field).unwrap_or_default().to_string(),
            Style::default().fg(palette.error),
        ),
        Row::Submit => {
            if rect.width > 0 {
                hits.submit = rect;
            }
            let style = if ui.focus == Focus::Submit {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.accent)
            };
            Line::styled("[ Send message ]", style)
        }
        Row::Success => Line::styled(
            form.success.clone().unwrap_or_default(),
            Style::default().fg(palette.success),
        ),
    }
}
