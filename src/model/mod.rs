//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application,
//! organized into focused sub-models:
//!
//! - **UiModel**: theme, navigation, modal, focus
//! - **FormModel**: contact form fields, errors, success message
//! - **ScrollModel**: page scroll offset and animation target
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state for debugging
//! - No services: All I/O lives in the App around the model
//! - Pure accessors: Helper methods are side-effect free

pub mod form;
pub mod scroll;
pub mod ui;

pub use form::{FieldErrors, FieldId, FormModel, SubmissionRecord};
pub use scroll::ScrollModel;
pub use ui::{Focus, ModalState, UiModel, VimCommandState};

use crate::page::{GalleryItem, Page};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Static page content (title, nav links, sections, gallery)
    pub page: Page,

    /// Theme, navigation, modal and focus state
    pub ui: UiModel,

    /// Contact form state
    pub form: FormModel,

    /// Page scroll state
    pub scroll: ScrollModel,
}

impl Model {
    /// Create initial model for a page
    pub fn new(page: Page, vim_mode: bool, reduce_motion: bool) -> Self {
        let mut ui = UiModel::new(vim_mode);
        if !page.gallery.is_empty() {
            ui.gallery_selection = Some(0);
        }
        Self {
            page,
            ui,
            form: FormModel::new(),
            scroll: ScrollModel::new(reduce_motion),
        }
    }

    /// Check if the gallery modal is showing
    pub fn has_modal(&self) -> bool {
        self.ui.modal.is_some()
    }

    /// Get currently selected gallery item (if any)
    pub fn selected_gallery_item(&self) -> Option<&GalleryItem> {
        self.ui
            .gallery_selection
            .and_then(|idx| self.page.gallery.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(Page::default(), false, false);
        assert!(!model.has_modal());
        assert!(!model.ui.vim_mode);
        assert!(!model.ui.should_quit);
        assert_eq!(model.scroll.offset, 0);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(Page::default(), false, false);
        let _cloned = model.clone();
    }

    #[test]
    fn test_selected_gallery_item() {
        let mut model = Model::new(Page::default(), false, false);
        assert_eq!(model.ui.gallery_selection, Some(0));
        assert!(model.selected_gallery_item().is_some());

        model.ui.gallery_selection = None;
        assert!(model.selected_gallery_item().is_none());

        model.ui.gallery_selection = Some(999);
        assert!(model.selected_gallery_item().is_none());
    }

    #[test]
    fn test_has_modal() {
        let mut model = Model::new(Page::default(), false, false);
        assert!(!model.has_modal());

        let item = model.page.gallery[0].clone();
        model.ui.open_modal(&item);
        assert!(model.has_modal());

        model.ui.close_modal();
        assert!(!model.has_modal());
    }
}
