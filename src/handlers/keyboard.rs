//! Keyboard Input Handler
//!
//! Handles all keyboard input: modal shortcuts first, then field editing,
//! then page-level keys. While a form field holds focus, printable keys
//! edit the field instead of triggering page shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::logic::select::move_selection;
use crate::model::{FieldId, Focus, VimCommandState};
use crate::storage::KvStore;

/// Rows moved by Ctrl-D/U and PageUp/PageDown
const HALF_PAGE: isize = 10;

/// Handle a key event
pub fn handle_key<S: KvStore>(app: &mut App<S>, key: KeyEvent) {
    // Modal swallows everything while open; scrolling stays suppressed
    if app.model.has_modal() {
        match key.code {
            KeyCode::Esc => app.model.ui.close_modal(),
            // Focus sits on the close control, so Enter/Space activate it
            KeyCode::Enter | KeyCode::Char(' ') => app.model.ui.close_modal(),
            _ => {}
        }
        return;
    }

    // Field editing consumes printable keys
    if let Focus::Field(field) = app.model.ui.focus {
        handle_field_key(app, field, key);
        return;
    }

    // Second half of a pending 'gg'
    if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
        app.model.ui.vim_command_state = VimCommandState::None;
        if key.code == KeyCode::Char('g') {
            app.model.scroll.to_top();
            return;
        }
    }

    let vim = app.model.ui.vim_mode;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => app.model.ui.should_quit = true,
        KeyCode::Char('d') if vim && ctrl => app.model.scroll.scroll_by(HALF_PAGE),
        KeyCode::Char('u') if vim && ctrl => app.model.scroll.scroll_by(-HALF_PAGE),
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('m') => app.toggle_nav(),
        KeyCode::Tab => app.model.ui.focus = next_focus(app.model.ui.focus, app.model.ui.nav_open),
        KeyCode::BackTab => {
            app.model.ui.focus = prev_focus(app.model.ui.focus, app.model.ui.nav_open)
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_focused(app),
        KeyCode::Up => move_selection_or_scroll(app, -1),
        KeyCode::Down => move_selection_or_scroll(app, 1),
        KeyCode::PageUp => app.model.scroll.scroll_by(-HALF_PAGE),
        KeyCode::PageDown => app.model.scroll.scroll_by(HALF_PAGE),
        KeyCode::Home => app.model.scroll.to_top(),
        KeyCode::End => app.model.scroll.to_bottom(),
        KeyCode::Char('j') if vim => app.model.scroll.scroll_by(1),
        KeyCode::Char('k') if vim => app.model.scroll.scroll_by(-1),
        KeyCode::Char('g') if vim => {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG
        }
        KeyCode::Char('G') if vim => app.model.scroll.to_bottom(),
        // Digits jump straight to a nav link (useful at wide viewports,
        // where the panel never opens)
        KeyCode::Char(c @ '1'..='9') => {
            app.activate_nav_link(c as usize - '1' as usize);
        }
        _ => {}
    }
}

/// Keystrokes while a form field holds focus
fn handle_field_key<S: KvStore>(app: &mut App<S>, field: FieldId, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.model.ui.focus = Focus::Gallery,
        KeyCode::Tab => app.model.ui.focus = next_focus(app.model.ui.focus, app.model.ui.nav_open),
        KeyCode::BackTab => {
            app.model.ui.focus = prev_focus(app.model.ui.focus, app.model.ui.nav_open)
        }
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Backspace => {
            app.model.form.value_mut(field).pop();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.form.value_mut(field).push(c);
        }
        _ => {}
    }
}

/// Enter/Space on whatever holds focus
fn activate_focused<S: KvStore>(app: &mut App<S>) {
    match app.model.ui.focus {
        Focus::Gallery => app.open_selected_gallery_item(),
        Focus::Submit => app.submit_contact(),
        Focus::NavPanel => {
            if let Some(index) = app.model.ui.nav_selection {
                app.activate_nav_link(index);
            }
        }
        // Fields and the modal close control are handled before we get here
        Focus::Field(_) | Focus::ModalClose => {}
    }
}

/// Arrows move the focused list's selection, or scroll the page otherwise
fn move_selection_or_scroll<S: KvStore>(app: &mut App<S>, direction: isize) {
    match app.model.ui.focus {
        Focus::Gallery => {
            let len = app.model.page.gallery.len();
            app.model.ui.gallery_selection =
                move_selection(app.model.ui.gallery_selection, len, direction > 0);
        }
        Focus::NavPanel => {
            let len = app.model.page.nav.len();
            app.model.ui.nav_selection =
                move_selection(app.model.ui.nav_selection, len, direction > 0);
        }
        _ => app.model.scroll.scroll_by(direction),
    }
}

/// Focus cycle: gallery, the three fields, submit, then the nav panel when
/// it is open
fn next_focus(current: Focus, nav_open: bool) -> Focus {
    match current {
        Focus::Gallery => Focus::Field(FieldId::Name),
        Focus::Field(FieldId::Name) => Focus::Field(FieldId::Email),
        Focus::Field(FieldId::Email) => Focus::Field(FieldId::Message),
        Focus::Field(FieldId::Message) => Focus::Submit,
        Focus::Submit if nav_open => Focus::NavPanel,
        Focus::Submit => Focus::Gallery,
        Focus::NavPanel => Focus::Gallery,
        Focus::ModalClose => Focus::ModalClose,
    }
}

fn prev_focus(current: Focus, nav_open: bool) -> Focus {
    match current {
        Focus::Gallery if nav_open => Focus::NavPanel,
        Focus::Gallery => Focus::Submit,
        Focus::Field(FieldId::Name) => Focus::Gallery,
        Focus::Field(FieldId::Email) => Focus::Field(FieldId::Name),
        Focus::Field(FieldId::Message) => Focus::Field(FieldId::Email),
        Focus::Submit => Focus::Field(FieldId::Message),
        Focus::NavPanel => Focus::Submit,
        Focus::ModalClose => Focus::ModalClose,
    }
}
