//! Event Handlers
//!
//! This module contains handlers for the two input sources:
//! - keyboard: key events (navigation, editing, activation)
//! - mouse: pointer clicks against the rendered hit map, and wheel scroll
//!
//! Handlers take &mut App, apply the pure logic functions to the model, and
//! perform the store writes through the App methods. They never render.

pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
