//! Business Logic
//!
//! This module contains pure decision functions that can be unit tested
//! without a terminal:
//! - theme: Effective theme precedence and the system dark-mode sniff
//! - nav: Nav toggle breakpoint behavior and labels
//! - modal: Backdrop hit rule for the gallery modal
//! - form: Contact form validation and history (de)serialization
//! - scroll: Anchor resolution and eased scroll stepping
//! - rows: Body row stream construction (text wrap, anchors, hit tags)
//! - select: Wrapping list selection movement

pub mod form;
pub mod modal;
pub mod nav;
pub mod rows;
pub mod scroll;
pub mod select;
pub mod theme;
