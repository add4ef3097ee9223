//! # Progress Ring Module
//!
//! This module provides the circular loyalty progress ring: a full
//! background track with a foreground arc whose visible length is
//! proportional to the ring value.
//!
//! ## Key Components:
//! - `calculations.rs` - Pure arc geometry (clamping, circumference, dash
//!   offset) and the easing curve, unit tested without a UI
//! - `renderer.rs` - Arc painting using egui primitives plus the eased
//!   sweep animation whenever the value changes

pub mod calculations;
pub mod renderer;

// Re-export main components
pub use calculations::{clamp_value, dash_offset, ease_in_out, visible_length};
pub use renderer::{ProgressRing, RingConfig};
