//! Tests for the nav toggle breakpoint behavior
//!
//! The expanded flag always flips; the panel's open flag only follows at
//! viewports at or below the breakpoint. Link activation closes an open
//! narrow panel and resets the expanded flag.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use foliotui::app::App;
use foliotui::config::Config;
use foliotui::handlers::handle_key;
use foliotui::model::Focus;
use foliotui::storage::MemStore;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn new_app(viewport_width: u16) -> App<MemStore> {
    let mut app = App::new(Config::default(), MemStore::new(), false);
    app.model.ui.viewport_width = viewport_width;
    app
}

/// Test: at width 500 the toggle opens the panel and expands the flag
#[test]
fn test_narrow_toggle_opens_panel() {
    let mut app = new_app(500);
    assert_eq!(app.model.ui.nav_toggle_label(), "Open menu");

    handle_key(&mut app, key(KeyCode::Char('m')));

    assert!(app.model.ui.nav_expanded);
    assert!(app.model.ui.nav_open);
    assert_eq!(app.model.ui.nav_toggle_label(), "Close menu");
    assert_eq!(app.model.ui.focus, Focus::NavPanel);
    assert_eq!(app.model.ui.nav_selection, Some(0));
}

/// Test: a second toggle closes the panel again
#[test]
fn test_narrow_toggle_round_trip() {
    let mut app = new_app(500);
    handle_key(&mut app, key(KeyCode::Char('m')));
    handle_key(&mut app, key(KeyCode::Char('m')));

    assert!(!app.model.ui.nav_expanded);
    assert!(!app.model.ui.nav_open);
    assert_eq!(app.model.ui.nav_toggle_label(), "Open menu");
    assert_eq!(app.model.ui.focus, Focus::Gallery);
}

/// Test: at width 1200 the expanded flag flips but the panel is untouched
#[test]
fn test_wide_toggle_leaves_panel_untouched() {
    let mut app = new_app(1200);

    handle_key(&mut app, key(KeyCode::Char('m')));
    assert!(app.model.ui.nav_expanded);
    assert!(!app.model.ui.nav_open);

    handle_key(&mut app, key(KeyCode::Char('m')));
    assert!(!app.model.ui.nav_expanded);
    assert!(!app.model.ui.nav_open);
}

/// Test: activating a link while the narrow panel is open closes it and
/// resets the expanded flag
#[test]
fn test_link_activation_closes_narrow_panel() {
    let mut app = new_app(500);
    handle_key(&mut app, key(KeyCode::Char('m')));
    assert!(app.model.ui.nav_open);

    // Enter activates the selected link in the panel
    handle_key(&mut app, key(KeyCode::Enter));

    assert!(!app.model.ui.nav_open);
    assert!(!app.model.ui.nav_expanded);
    assert_eq!(app.model.ui.nav_selection, None);
    assert_eq!(app.model.ui.focus, Focus::Gallery);
}

/// Test: arrow keys move the panel selection with wrapping
#[test]
fn test_panel_selection_wraps() {
    let mut app = new_app(500);
    handle_key(&mut app, key(KeyCode::Char('m')));

    let link_count = app.model.page.nav.len();
    assert!(link_count >= 2);

    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.model.ui.nav_selection, Some(link_count - 1));

    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.model.ui.nav_selection, Some(0));
}

/// Test: at wide viewports a digit key activates a link directly without
/// touching the nav state
#[test]
fn test_wide_digit_activation_keeps_nav_state() {
    let mut app = new_app(1200);
    handle_key(&mut app, key(KeyCode::Char('2')));

    assert!(!app.model.ui.nav_expanded);
    assert!(!app.model.ui.nav_open);
}
