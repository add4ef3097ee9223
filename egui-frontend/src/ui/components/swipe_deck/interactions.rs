//! # Swipe Deck Interactions
//!
//! This module handles drag input on the active product card and resolves
//! releases into deck transitions.
//!
//! ## Responsibilities:
//! - Feed egui drag events into the gesture state
//! - Resolve releases: commit advances the cursor and starts the card swap
//!   choreography, cancel leaves the cursor alone and springs back
//!
//! ## Purpose:
//! Gesture interpretation itself is the pure `shared::resolve_drag_release`;
//! this file is only the bridge from egui's input to that rule.

use eframe::egui;
use log::info;
use shared::DragOutcome;

use crate::ui::app_state::BoutiqueApp;

/// Card footprint in layout points
pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_HEIGHT: f32 = 288.0;

impl BoutiqueApp {
    /// Feed the card's drag response into the gesture state and resolve a
    /// release if one happened this frame.
    pub(crate) fn handle_card_drag(&mut self, response: &egui::Response) {
        if response.drag_started() {
            self.gesture.begin_drag();
        }

        if response.dragged() {
            self.gesture.apply_drag_delta(response.drag_delta().x);
        }

        if response.drag_stopped() {
            let displacement = self.gesture.displacement;
            match self.gesture.release() {
                DragOutcome::Commit => {
                    let outgoing = self.deck.current().clone();
                    let from = self.deck.cursor();
                    self.deck.advance();
                    info!(
                        "🛍️ Swipe committed ({:+.0} pt): card {} -> {}",
                        displacement,
                        from,
                        self.deck.cursor()
                    );
                    self.cards.begin_swap(outgoing);
                }
                DragOutcome::Cancel => {
                    // Cursor unchanged; the settle animation brings the card
                    // back to center.
                }
            }
        }
    }
}
