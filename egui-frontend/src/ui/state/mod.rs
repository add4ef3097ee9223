//! # UI State Modules
//!
//! Per-concern state for the storefront interface. Each file owns one piece
//! of interaction state and its transitions, kept separate from rendering so
//! the transitions can be unit tested without a UI.
//!
//! ## Module Organization:
//! - `gesture_state` - Horizontal drag tracking and release resolution
//! - `card_state` - Entry/exit choreography when the deck cursor changes
//! - `overlay_state` - Purchase confirmation overlay flag

pub mod card_state;
pub mod gesture_state;
pub mod overlay_state;

pub use card_state::*;
pub use gesture_state::*;
pub use overlay_state::*;
