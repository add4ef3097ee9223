//! # Swipe Deck Module
//!
//! This module renders the swipeable product card deck and interprets
//! horizontal drag gestures on the active card.
//!
//! ## Key Components:
//! - `interactions.rs` - Drag sensing and release resolution (commit
//!   advances the deck cursor, cancel springs the card back)
//! - `renderer.rs` - Card painting: shadowed rounded card, drag offset and
//!   tilt, entry/exit poses during replacement

pub mod interactions;
pub mod renderer;

pub use interactions::{CARD_HEIGHT, CARD_WIDTH};
