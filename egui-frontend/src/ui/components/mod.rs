//! # UI Components Module
//!
//! This module organizes all UI components for the boutique rewards demo.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `styling` - Global egui style setup and backdrop/card drawing helpers
//! - `theme` - Centralized boutique palette
//! - `progress_ring` - Circular loyalty progress indicator
//! - `swipe_deck` - Swipeable product card deck
//! - `confirm_overlay` - Confirm-order button and purchase overlay
//! - `rewards_panel` - Progress ring with tier caption and point controls
//!
//! ## Architecture:
//! Components render through methods on `BoutiqueApp`; pure calculations
//! live next to their renderer so they can be tested without a UI.

pub mod confirm_overlay;
pub mod progress_ring;
pub mod rewards_panel;
pub mod styling;
pub mod swipe_deck;
pub mod theme;

pub use styling::{draw_backdrop, draw_card_shadow, setup_boutique_style};
pub use theme::*;
