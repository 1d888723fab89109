//! Modal hit logic
//!
//! The modal container covers the whole screen while open; its content box
//! sits centered inside it. A click that lands on the container but not on
//! the content counts as a backdrop click and closes the modal.

use ratatui::layout::{Position, Rect};

/// Whether a click at (column, row) is a backdrop click: inside the
/// container, outside the content box.
pub fn is_backdrop_click(container: Rect, content: Rect, column: u16, row: u16) -> bool {
    let pos = Position::new(column, row);
    container.contains(pos) && !content.contains(pos)
}
