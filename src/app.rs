//! Application shell
//!
//! Holds the pure model beside the injected store and performs every
//! store-touching operation: startup theme resolution, theme toggling, and
//! contact submission. Handlers call into these methods; rendering only
//! reads the model.

use tracing::{debug, warn};

use crate::config::Config;
use crate::logic;
use crate::model::{form::SUCCESS_MESSAGE, Focus, Model};
use crate::storage::{KvStore, HISTORY_KEY, THEME_KEY};
use crate::ui::layout::HitMap;
use crate::Theme;

pub struct App<S: KvStore> {
    pub model: Model,
    pub store: S,

    /// Screen rectangles of the interactive elements, refreshed on every
    /// render for mouse hit-testing. Runtime state, not part of the model.
    pub hit: HitMap,
}

impl<S: KvStore> App<S> {
    /// Build the app and resolve the startup theme:
    /// stored preference > system dark signal > light.
    pub fn new(config: Config, store: S, system_prefers_dark: bool) -> Self {
        let stored = store
            .get(THEME_KEY)
            .and_then(|value| Theme::from_str(&value));
        let mut model = Model::new(config.page, config.vim_mode, config.reduce_motion);
        model.ui.theme = logic::theme::effective_theme(stored, system_prefers_dark);

        App {
            model,
            store,
            hit: HitMap::default(),
        }
    }

    /// Invert the theme, persist the new explicit preference, and update
    /// the toggle state. Persistence is best effort.
    pub fn toggle_theme(&mut self) {
        let next = logic::theme::toggled(self.model.ui.theme);
        self.model.ui.theme = next;
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            warn!(error = %e, "failed to persist theme preference");
        }
        debug!(theme = next.as_str(), "theme toggled");
    }

    /// Apply a click on the nav toggle
    pub fn toggle_nav(&mut self) {
        let ui = &mut self.model.ui;
        let state = logic::nav::toggle(ui.nav_expanded, ui.nav_open, ui.viewport_width);
        ui.nav_expanded = state.expanded;
        ui.nav_open = state.open;

        if ui.nav_open {
            ui.nav_selection = Some(0);
            ui.focus = Focus::NavPanel;
        } else {
            ui.nav_selection = None;
            if ui.focus == Focus::NavPanel {
                ui.focus = Focus::Gallery;
            }
        }
    }

    /// Activate a nav link: close the open narrow panel, then scroll to the
    /// link's anchor if it resolves to a section. Unresolved anchors only
    /// close the panel.
    pub fn activate_nav_link(&mut self, index: usize) {
        let href = match self.model.page.nav.get(index) {
            Some(link) => link.href.clone(),
            None => return,
        };

        let ui = &mut self.model.ui;
        let state =
            logic::nav::after_link_activation(ui.nav_expanded, ui.nav_open, ui.viewport_width);
        let panel_closed = ui.nav_open && !state.open;
        ui.nav_expanded = state.expanded;
        ui.nav_open = state.open;
        if panel_closed {
            ui.nav_selection = None;
            if ui.focus == Focus::NavPanel {
                ui.focus = Focus::Gallery;
            }
        }

        let built = logic::rows::build_rows(
            &self.model.page,
            &self.model.form,
            self.model.ui.body_width,
        );
        if let Some(row) = logic::scroll::resolve_anchor(&href, &built.anchors) {
            self.model.scroll.request(row);
        } else {
            debug!(href = %href, "anchor did not resolve, ignoring");
        }
    }

    /// Open the modal for the currently selected gallery item
    pub fn open_selected_gallery_item(&mut self) {
        if let Some(item) = self.model.selected_gallery_item().cloned() {
            self.model.ui.open_modal(&item);
        }
    }

    /// Handle a form submit: clear prior messages, validate all fields,
    /// and on success append the record to the persisted history, show the
    /// success message and reset the fields.
    pub fn submit_contact(&mut self) {
        self.model.form.clear_messages();

        let errors = logic::form::validate(
            &self.model.form.name,
            &self.model.form.email,
            &self.model.form.message,
        );
        if !errors.is_clear() {
            self.model.form.errors = errors;
            return;
        }

        let record = logic::form::build_record(
            &self.model.form.name,
            &self.model.form.email,
            &self.model.form.message,
            logic::form::timestamp_now(),
        );

        // Read-parse-append-write; the whole list is rewritten each time
        let mut history = logic::form::parse_history(self.store.get(HISTORY_KEY).as_deref());
        history.push(record);
        if let Ok(raw) = serde_json::to_string(&history) {
            if let Err(e) = self.store.set(HISTORY_KEY, &raw) {
                warn!(error = %e, "failed to persist contact history");
            }
        }
        debug!(entries = history.len(), "contact submission recorded");

        self.model.form.success = Some(SUCCESS_MESSAGE.to_string());
        self.model.form.reset_fields();
    }
}
