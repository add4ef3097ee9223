//! # Gesture State Module
//!
//! This module tracks the horizontal drag gesture on the active product card
//! and resolves releases into commit or cancel outcomes.
//!
//! ## Responsibilities:
//! - Accumulate drag displacement while the pointer is held
//! - Resolve releases through the shared threshold rule
//! - Animate the spring-back settle after a cancelled drag
//!
//! ## Purpose:
//! Gesture interpretation is a pure function of the final displacement
//! (`shared::resolve_drag_release`); this struct only carries the transient
//! per-interaction state, which is discarded on release either way.

use shared::{resolve_drag_release, DragOutcome};

/// Per-frame decay rate for the spring-back settle. Higher snaps faster.
const SETTLE_STIFFNESS: f32 = 14.0;

/// Displacement below which a settling card counts as centered again
const SETTLE_REST_EPSILON: f32 = 0.5;

/// Phase of the swipe gesture on the active card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer interaction; the card rests at center
    Idle,
    /// Pointer held down; displacement follows the pointer, unclamped
    Dragging,
    /// Released short of the threshold; the card springs back to center
    Settling,
}

/// Transient drag state for the active card
#[derive(Debug, Clone, Copy)]
pub struct GestureState {
    pub phase: DragPhase,
    /// Horizontal displacement since drag start, in layout points
    pub displacement: f32,
}

impl GestureState {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            displacement: 0.0,
        }
    }

    /// Pointer went down on the card
    pub fn begin_drag(&mut self) {
        self.phase = DragPhase::Dragging;
        self.displacement = 0.0;
    }

    /// Pointer moved while held. Displacement is not clamped during the
    /// drag; only the rendered tilt is.
    pub fn apply_drag_delta(&mut self, delta_x: f32) {
        if self.phase == DragPhase::Dragging {
            self.displacement += delta_x;
        }
    }

    /// Pointer released. Resolves the gesture and returns the outcome so
    /// the caller can advance the deck on a commit.
    ///
    /// On a commit the displacement resets immediately: the incoming card
    /// renders fresh at center with its own entry animation, there is no
    /// snap-back. On a cancel the card settles back visually.
    pub fn release(&mut self) -> DragOutcome {
        let outcome = resolve_drag_release(self.displacement);
        match outcome {
            DragOutcome::Commit => {
                self.displacement = 0.0;
                self.phase = DragPhase::Idle;
            }
            DragOutcome::Cancel => {
                self.phase = DragPhase::Settling;
            }
        }
        outcome
    }

    /// Advance the spring-back settle by one frame
    pub fn tick_settle(&mut self, dt: f32) {
        if self.phase != DragPhase::Settling {
            return;
        }

        self.displacement *= (-SETTLE_STIFFNESS * dt).exp();

        if self.displacement.abs() < SETTLE_REST_EPSILON {
            self.displacement = 0.0;
            self.phase = DragPhase::Idle;
        }
    }

    /// Whether a settle animation is still running
    pub fn is_animating(&self) -> bool {
        self.phase == DragPhase::Settling
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged_to(displacement: f32) -> GestureState {
        let mut gesture = GestureState::new();
        gesture.begin_drag();
        gesture.apply_drag_delta(displacement);
        gesture
    }

    #[test]
    fn test_commit_resets_displacement_without_settle() {
        let mut gesture = dragged_to(150.0);
        assert_eq!(gesture.release(), DragOutcome::Commit);
        assert_eq!(gesture.displacement, 0.0);
        assert_eq!(gesture.phase, DragPhase::Idle);
    }

    #[test]
    fn test_left_swipe_commits_the_same_way() {
        let mut gesture = dragged_to(-150.0);
        assert_eq!(gesture.release(), DragOutcome::Commit);
        assert_eq!(gesture.displacement, 0.0);
    }

    #[test]
    fn test_cancel_enters_settle_and_reaches_center() {
        let mut gesture = dragged_to(80.0);
        assert_eq!(gesture.release(), DragOutcome::Cancel);
        assert_eq!(gesture.phase, DragPhase::Settling);

        // A few frames at 60 fps is plenty to settle from 80 points
        for _ in 0..60 {
            gesture.tick_settle(1.0 / 60.0);
        }
        assert_eq!(gesture.displacement, 0.0);
        assert_eq!(gesture.phase, DragPhase::Idle);
    }

    #[test]
    fn test_drag_deltas_accumulate_unclamped() {
        let mut gesture = GestureState::new();
        gesture.begin_drag();
        gesture.apply_drag_delta(200.0);
        gesture.apply_drag_delta(150.0);
        assert_eq!(gesture.displacement, 350.0);
    }

    #[test]
    fn test_deltas_ignored_when_not_dragging() {
        let mut gesture = GestureState::new();
        gesture.apply_drag_delta(50.0);
        assert_eq!(gesture.displacement, 0.0);
    }
}
