//! Wrapping list selection
//!
//! The gallery list and the open nav panel move their selection the same
//! way: one step at a time, wrapping at both ends.

/// Move a selection one step through a list of `len` items, wrapping at
/// both ends. With nothing selected yet, the first forward step lands on
/// the first item and the first backward step on the last.
///
/// # Examples
/// ```
/// use foliotui::logic::select::move_selection;
///
/// assert_eq!(move_selection(None, 0, true), None);
/// assert_eq!(move_selection(None, 3, true), Some(0));
/// assert_eq!(move_selection(Some(2), 3, true), Some(0));
/// assert_eq!(move_selection(Some(0), 3, false), Some(2));
/// ```
pub fn move_selection(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => i.checked_sub(1).unwrap_or(len - 1),
    })
}
