use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::FieldId;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top header bar area
    pub header_area: Rect,
    /// Scrollable page body area
    pub body_area: Rect,
    /// Bottom footer area (legend + year stamp)
    pub footer_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar (top border, text, bottom border)
            Constraint::Min(3),    // Page body
            Constraint::Length(2), // Footer (legend + year line)
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: main_chunks[0],
        body_area: main_chunks[1],
        footer_area: main_chunks[2],
    }
}

/// Screen rectangles of the modal's hit targets
#[derive(Clone, Copy, Debug)]
pub struct ModalHits {
    /// The backdrop: the whole screen while the modal is open
    pub container: Rect,
    /// The content box; clicks here are swallowed
    pub content: Rect,
    /// The close control row
    pub close: Rect,
}

/// Screen rectangles of every interactive element, refreshed each frame.
/// Zero-sized rectangles never match, so absent elements can stay at the
/// default.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    pub nav_toggle: Rect,
    pub theme_toggle: Rect,
    /// Nav links, inline in the header or rows of the open panel
    pub nav_links: Vec<(Rect, usize)>,
    pub gallery_items: Vec<(Rect, usize)>,
    pub fields: Vec<(Rect, FieldId)>,
    pub submit: Rect,
    pub modal: Option<ModalHits>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_height() {
        let size = Rect::new(0, 0, 100, 30);
        let info = calculate_layout(size);

        assert_eq!(info.header_area.height, 3);
        assert_eq!(info.footer_area.height, 2);
        assert_eq!(info.body_area.height, 25);
        assert_eq!(
            info.header_area.height + info.body_area.height + info.footer_area.height,
            30
        );
    }

    #[test]
    fn test_default_hit_map_matches_nothing() {
        use ratatui::layout::Position;
        let hit = HitMap::default();
        assert!(!hit.nav_toggle.contains(Position::new(0, 0)));
        assert!(!hit.submit.contains(Position::new(0, 0)));
        assert!(hit.nav_links.is_empty());
    }
}
