//! Mouse Input Handler
//!
//! Resolves pointer events against the hit map the renderer refreshed on
//! the last frame. Clicks activate whatever they land on; the wheel scrolls
//! the page unless the modal holds the scroll lock.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::App;
use crate::logic;
use crate::model::Focus;
use crate::storage::KvStore;

/// Handle a mouse event
pub fn handle_mouse<S: KvStore>(app: &mut App<S>, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, event.column, event.row),
        MouseEventKind::ScrollDown if !app.model.ui.scroll_locked => {
            app.model.scroll.scroll_by(3)
        }
        MouseEventKind::ScrollUp if !app.model.ui.scroll_locked => {
            app.model.scroll.scroll_by(-3)
        }
        _ => {}
    }
}

fn handle_click<S: KvStore>(app: &mut App<S>, column: u16, row: u16) {
    let pos = Position::new(column, row);
    let hit = app.hit.clone();

    // While the modal is open only its close control and backdrop react
    if app.model.has_modal() {
        if let Some(modal) = &hit.modal {
            if modal.close.contains(pos)
                || logic::modal::is_backdrop_click(modal.container, modal.content, column, row)
            {
                app.model.ui.close_modal();
            }
        }
        return;
    }

    if hit.nav_toggle.contains(pos) {
        app.toggle_nav();
        return;
    }
    if hit.theme_toggle.contains(pos) {
        app.toggle_theme();
        return;
    }
    for (rect, index) in &hit.nav_links {
        if rect.contains(pos) {
            app.activate_nav_link(*index);
            return;
        }
    }
    for (rect, index) in &hit.gallery_items {
        if rect.contains(pos) {
            app.model.ui.gallery_selection = Some(*index);
            app.model.ui.focus = Focus::Gallery;
            app.open_selected_gallery_item();
            return;
        }
    }
    for (rect, field) in &hit.fields {
        if rect.contains(pos) {
            app.model.ui.focus = Focus::Field(*field);
            return;
        }
    }
    if hit.submit.contains(pos) {
        app.model.ui.focus = Focus::Submit;
        app.submit_contact();
    }
}
