//! Page content model
//!
//! The static content the shell renders: site title, nav links, sections and
//! gallery items. Content is data, never mutated at runtime. It can be
//! overridden from the config file; without one the built-in sample page is
//! used.

use serde::Deserialize;

/// A same-page navigation link. `href` uses anchor syntax ("#about").
#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// One selectable gallery entry. `title` and `desc` populate the detail
/// modal when the item is activated.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: String,
    pub desc: String,
}

/// Extra block rendered after a section's body text
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    #[default]
    Text,
    Gallery,
    Contact,
}

/// One page section, addressable by anchor id
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub kind: SectionKind,
}

/// Whole-page content
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,
    #[serde(default = "default_gallery")]
    pub gallery: Vec<GalleryItem>,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            title: default_title(),
            nav: default_nav(),
            sections: default_sections(),
            gallery: default_gallery(),
        }
    }
}

impl Page {
    /// Look up a section by anchor id
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

fn default_title() -> String {
    "Mara Lindqvist".to_string()
}

fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink {
            label: "Home".to_string(),
            href: "#home".to_string(),
        },
        NavLink {
            label: "Work".to_string(),
            href: "#work".to_string(),
        },
        NavLink {
            label: "Contact".to_string(),
            href: "#contact".to_string(),
        },
    ]
}

fn default_sections() -> Vec<Section> {
    vec![
        Section {
            id: "home".to_string(),
            title: "Freelance product designer".to_string(),
            body: "I design and build small, fast interfaces for teams that \
                   care about the details. Currently taking on new projects \
                   for the autumn."
                .to_string(),
            kind: SectionKind::Text,
        },
        Section {
            id: "work".to_string(),
            title: "Selected work".to_string(),
            body: "A few recent projects. Select one for the full story."
                .to_string(),
            kind: SectionKind::Gallery,
        },
        Section {
            id: "contact".to_string(),
            title: "Get in touch".to_string(),
            body: "Tell me about your project and I will get back to you \
                   within two working days."
                .to_string(),
            kind: SectionKind::Contact,
        },
    ]
}

fn default_gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            title: "Ledger dashboard".to_string(),
            desc: "A reporting dashboard for a bookkeeping platform: dense \
                   tables, keyboard-first navigation, and a print stylesheet \
                   the accountants actually use."
                .to_string(),
        },
        GalleryItem {
            title: "Field notes app".to_string(),
            desc: "Offline-first note taking for ecologists. Synchronises \
                   opportunistically and never loses an entry, even on a \
                   dying battery."
                .to_string(),
        },
        GalleryItem {
            title: "Recipe box".to_string(),
            desc: "A weekend project that got out of hand: structured recipe \
                   storage with unit-aware scaling and a shopping list that \
                   merges duplicates."
                .to_string(),
        },
    ]
}
