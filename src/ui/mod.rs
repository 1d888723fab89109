// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Dark and light palettes
// - layout: Calculates screen layout and carries the mouse hit map
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the top bar (site title, inline nav, toggles)
// - nav: Renders the collapsed-nav overlay panel
// - body: Renders the scrollable page body (sections, gallery, form)
// - modal: Renders the gallery detail modal
// - footer: Renders the hotkey legend and the year stamp

pub mod body;
pub mod footer;
pub mod header;
pub mod layout;
pub mod modal;
pub mod nav;
pub mod render;
pub mod theme;

// Re-export main render function for convenience
pub use render::render;
