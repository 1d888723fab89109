//! Nav toggle logic
//!
//! Pure functions for the mobile navigation behavior. The toggle always
//! flips the expanded flag; the panel's open flag only follows along when
//! the viewport is at or below the breakpoint.

/// Viewport width at or below which the nav collapses behind the toggle
pub const NAV_BREAKPOINT: u16 = 980;

/// Layout units per terminal cell, used to map columns onto viewport width
pub const UNITS_PER_CELL: u16 = 8;

/// Convert a terminal column count into viewport units
pub fn viewport_units(cols: u16) -> u16 {
    cols.saturating_mul(UNITS_PER_CELL)
}

/// Whether a viewport width is in the collapsed-nav range
pub fn is_narrow(viewport_width: u16) -> bool {
    viewport_width <= NAV_BREAKPOINT
}

/// Result of a toggle or link activation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub expanded: bool,
    pub open: bool,
}

/// Apply a click on the nav toggle.
///
/// The expanded flag always inverts; the open flag inverts only at narrow
/// viewports and is left untouched otherwise.
///
/// # Examples
/// ```
/// use foliotui::logic::nav::toggle;
///
/// // Narrow viewport: both flags flip
/// assert_eq!(toggle(false, false, 500).open, true);
///
/// // Wide viewport: expanded flips, panel untouched
/// let state = toggle(false, false, 1200);
/// assert!(state.expanded);
/// assert!(!state.open);
/// ```
pub fn toggle(expanded: bool, open: bool, viewport_width: u16) -> NavState {
    NavState {
        expanded: !expanded,
        open: if is_narrow(viewport_width) { !open } else { open },
    }
}

/// Apply a click on a nav link. While the panel is open at a narrow
/// viewport the panel closes and the expanded flag resets; otherwise the
/// state is unchanged.
pub fn after_link_activation(expanded: bool, open: bool, viewport_width: u16) -> NavState {
    if is_narrow(viewport_width) && open {
        NavState {
            expanded: false,
            open: false,
        }
    } else {
        NavState { expanded, open }
    }
}

/// Label shown on the toggle for the current expanded state
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "Close menu"
    } else {
        "Open menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert!(is_narrow(980));
        assert!(!is_narrow(981));
        assert!(is_narrow(500));
        assert!(!is_narrow(1200));
    }

    #[test]
    fn test_viewport_units() {
        assert_eq!(viewport_units(80), 640);
        assert_eq!(viewport_units(130), 1040);
    }

    #[test]
    fn test_toggle_narrow_opens_and_closes_panel() {
        let opened = toggle(false, false, 500);
        assert_eq!(
            opened,
            NavState {
                expanded: true,
                open: true
            }
        );

        let closed = toggle(opened.expanded, opened.open, 500);
        assert_eq!(
            closed,
            NavState {
                expanded: false,
                open: false
            }
        );
    }

    #[test]
    fn test_toggle_wide_leaves_panel_alone() {
        let state = toggle(false, false, 1200);
        assert!(state.expanded);
        assert!(!state.open);

        // Panel stays in whatever state it was left in
        let state = toggle(true, true, 1200);
        assert!(!state.expanded);
        assert!(state.open);
    }

    #[test]
    fn test_link_click_closes_open_narrow_panel() {
        let state = after_link_activation(true, true, 500);
        assert_eq!(
            state,
            NavState {
                expanded: false,
                open: false
            }
        );
    }

    #[test]
    fn test_link_click_noop_when_closed_or_wide() {
        let state = after_link_activation(true, false, 500);
        assert_eq!(
            state,
            NavState {
                expanded: true,
                open: false
            }
        );

        let state = after_link_activation(true, true, 1200);
        assert_eq!(
            state,
            NavState {
                expanded: true,
                open: true
            }
        );
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(toggle_label(false), "Open menu");
        assert_eq!(toggle_label(true), "Close menu");
    }
}
