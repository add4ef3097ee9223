//! # Overlay State Module
//!
//! This module holds the purchase confirmation overlay flag.
//!
//! ## Responsibilities:
//! - Track whether the confirmation overlay is open
//! - Provide the open/close/toggle transitions
//!
//! ## Purpose:
//! The overlay has no state machine beyond the boolean; fade and scale are
//! handled at render time from this flag, so repeated renders with the same
//! flag are idempotent.

/// Purchase confirmation overlay state
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayState {
    /// Whether the overlay is currently shown
    pub open: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_close_round_trip() {
        let mut overlay = OverlayState::new();
        assert!(!overlay.open);

        overlay.open();
        assert!(overlay.open);

        overlay.close();
        assert!(!overlay.open);
    }

    #[test]
    fn test_toggle_flips_each_press() {
        let mut overlay = OverlayState::new();
        overlay.toggle();
        assert!(overlay.open);
        overlay.toggle();
        assert!(!overlay.open);
    }

    #[test]
    fn test_repeated_opens_are_idempotent() {
        let mut overlay = OverlayState::new();
        overlay.open();
        overlay.open();
        assert!(overlay.open);
    }
}
