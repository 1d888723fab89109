//! Tests for theme resolution and toggling
//!
//! Startup precedence: stored preference > system dark signal > light.
//! Toggling persists the new explicit preference and is idempotent over
//! two presses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use foliotui::app::App;
use foliotui::config::Config;
use foliotui::handlers::handle_key;
use foliotui::storage::{KvStore, MemStore, THEME_KEY};
use foliotui::Theme;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_stored_preference_beats_system_signal() {
    let store = MemStore::new().with(THEME_KEY, "light");
    let app = App::new(Config::default(), store, true);
    assert_eq!(app.model.ui.theme, Theme::Light);
}

#[test]
fn test_system_signal_without_stored_preference() {
    let app = App::new(Config::default(), MemStore::new(), true);
    assert_eq!(app.model.ui.theme, Theme::Dark);
}

#[test]
fn test_defaults_to_light() {
    let app = App::new(Config::default(), MemStore::new(), false);
    assert_eq!(app.model.ui.theme, Theme::Light);
}

#[test]
fn test_unknown_stored_value_counts_as_absent() {
    let store = MemStore::new().with(THEME_KEY, "sepia");
    let app = App::new(Config::default(), store, true);
    assert_eq!(app.model.ui.theme, Theme::Dark);
}

/// Test: toggling persists the explicit preference
#[test]
fn test_toggle_persists() {
    let mut app = App::new(Config::default(), MemStore::new(), false);

    handle_key(&mut app, key(KeyCode::Char('t')));
    assert_eq!(app.model.ui.theme, Theme::Dark);
    assert_eq!(app.store.get(THEME_KEY), Some("dark".to_string()));
    assert!(app.model.ui.theme_pressed());

    handle_key(&mut app, key(KeyCode::Char('t')));
    assert_eq!(app.model.ui.theme, Theme::Light);
    assert_eq!(app.store.get(THEME_KEY), Some("light".to_string()));
    assert!(!app.model.ui.theme_pressed());
}

/// Test: two toggles return flag and stored preference to their originals
#[test]
fn test_double_toggle_round_trips() {
    let store = MemStore::new().with(THEME_KEY, "dark");
    let mut app = App::new(Config::default(), store, false);
    assert_eq!(app.model.ui.theme, Theme::Dark);

    handle_key(&mut app, key(KeyCode::Char('t')));
    handle_key(&mut app, key(KeyCode::Char('t')));

    assert_eq!(app.model.ui.theme, Theme::Dark);
    assert_eq!(app.store.get(THEME_KEY), Some("dark".to_string()));
}

/// Test: the persisted preference survives into a fresh session
#[test]
fn test_preference_survives_restart() {
    let mut app = App::new(Config::default(), MemStore::new(), false);
    handle_key(&mut app, key(KeyCode::Char('t')));
    assert_eq!(app.model.ui.theme, Theme::Dark);

    // Next session: same store, opposite system signal
    let store = app.store;
    let app = App::new(Config::default(), store, false);
    assert_eq!(app.model.ui.theme, Theme::Dark);
}
