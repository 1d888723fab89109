//! UI Model
//!
//! This sub-model contains all state related to the user interface: theme,
//! navigation toggle, gallery modal, and input focus.

use crate::page::GalleryItem;
use crate::Theme;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Which interactive element receives keyboard input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// The gallery list (arrows move the selection)
    Gallery,
    /// A contact form field (keystrokes edit the value)
    Field(crate::model::FieldId),
    /// The form's submit control
    Submit,
    /// The open nav panel (arrows move the link selection)
    NavPanel,
    /// The modal's close control (focus moves here while the modal is open)
    ModalClose,
}

/// Gallery modal content, populated from the activated item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    pub title: String,
    pub desc: String,
}

/// Theme, navigation, modal and focus state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // THEME
    // ============================================
    /// Effective visual theme
    pub theme: Theme,

    // ============================================
    // NAVIGATION
    // ============================================
    /// Expanded flag on the nav toggle (always flips on toggle)
    pub nav_expanded: bool,

    /// Panel visibility (flips only at narrow viewports)
    pub nav_open: bool,

    /// Selected link inside the open nav panel
    pub nav_selection: Option<usize>,

    // ============================================
    // MODAL
    // ============================================
    /// Gallery detail modal (None = hidden)
    pub modal: Option<ModalState>,

    /// Page scrolling suppressed while the modal is open
    pub scroll_locked: bool,

    // ============================================
    // FOCUS & INPUT
    // ============================================
    /// Which element receives keyboard input
    pub focus: Focus,

    /// Selected gallery item
    pub gallery_selection: Option<usize>,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // VIEWPORT
    // ============================================
    /// Viewport width in layout units (terminal cells x units per cell)
    pub viewport_width: u16,

    /// Body text width in cells, refreshed on every render
    pub body_width: u16,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model
    pub fn new(vim_mode: bool) -> Self {
        Self {
            theme: Theme::Light,
            nav_expanded: false,
            nav_open: false,
            nav_selection: None,
            modal: None,
            scroll_locked: false,
            focus: Focus::Gallery,
            gallery_selection: None,
            vim_mode,
            vim_command_state: VimCommandState::None,
            viewport_width: 640,
            body_width: 78,
            should_quit: false,
        }
    }

    /// Open the modal for an item, replacing any current content.
    /// Focus moves to the close control and page scrolling is suppressed.
    pub fn open_modal(&mut self, item: &GalleryItem) {
        self.modal = Some(ModalState {
            title: item.title.clone(),
            desc: item.desc.clone(),
        });
        self.scroll_locked = true;
        self.focus = Focus::ModalClose;
    }

    /// Close the modal and lift the scroll suppression
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.scroll_locked = false;
        if self.focus == Focus::ModalClose {
            self.focus = Focus::Gallery;
        }
    }

    /// Label shown on the nav toggle ("Open menu" when collapsed)
    pub fn nav_toggle_label(&self) -> &'static str {
        crate::logic::nav::toggle_label(self.nav_expanded)
    }

    /// Pressed flag on the theme toggle (pressed = dark active)
    pub fn theme_pressed(&self) -> bool {
        self.theme == Theme::Dark
    }
}
