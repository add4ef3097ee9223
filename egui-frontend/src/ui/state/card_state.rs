//! # Card Transition State Module
//!
//! This module drives the entry/exit choreography when the deck cursor
//! changes: the incoming card scales up from a lowered, transparent pose
//! while the outgoing card fades out symmetrically.
//!
//! ## Responsibilities:
//! - Track the active card's lifecycle (`Entering` -> `Steady`)
//! - Hold a snapshot of the replaced product while it animates out
//! - Interpolate render poses (scale, vertical offset, opacity)
//!
//! ## Purpose:
//! The lifecycle is an explicit finite state per rendered card, driven by
//! cursor changes and per-frame ticks, decoupled from egui's painting.

use shared::Product;

use crate::ui::components::progress_ring::calculations::ease_in_out;

/// Duration of the entry and exit phases, in seconds
pub const TRANSITION_SECONDS: f32 = 0.35;

/// Scale of a card at its entry/exit pose
const POSE_SCALE: f32 = 0.9;

/// Vertical offset of the entry pose, in points. The exit pose is inverted.
const POSE_Y_OFFSET: f32 = 30.0;

/// Lifecycle of the card rendered at the current cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardTransition {
    /// Animating in from the entry pose; progress in [0, 1]
    Entering { progress: f32 },
    /// At rest at the neutral pose
    Steady,
}

/// Render pose of a card, interpolated from its transition progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub scale: f32,
    pub y_offset: f32,
    pub alpha: f32,
}

impl CardPose {
    /// Neutral pose of a card at rest
    pub fn steady() -> Self {
        Self {
            scale: 1.0,
            y_offset: 0.0,
            alpha: 1.0,
        }
    }

    /// Pose while entering: reduced scale, lowered, transparent at t = 0,
    /// neutral at t = 1
    pub fn entering(progress: f32) -> Self {
        let t = ease_in_out(progress);
        Self {
            scale: egui::lerp(POSE_SCALE..=1.0, t),
            y_offset: egui::lerp(POSE_Y_OFFSET..=0.0, t),
            alpha: t,
        }
    }

    /// Pose while exiting: neutral at t = 0, reduced scale, raised,
    /// transparent at t = 1
    pub fn exiting(progress: f32) -> Self {
        let t = ease_in_out(progress);
        Self {
            scale: egui::lerp(1.0..=POSE_SCALE, t),
            y_offset: egui::lerp(0.0..=-POSE_Y_OFFSET, t),
            alpha: 1.0 - t,
        }
    }
}

/// Snapshot of the product replaced on the last commit, still animating out
#[derive(Debug, Clone)]
pub struct ExitingCard {
    pub product: Product,
    pub progress: f32,
}

/// Per-frame animator for card replacement
#[derive(Debug, Clone)]
pub struct CardAnimator {
    /// Transition of the card at the current cursor
    pub transition: CardTransition,
    /// Outgoing card, removed once its exit completes
    pub exiting: Option<ExitingCard>,
}

impl CardAnimator {
    /// Start with the first card already playing its entry animation
    pub fn new() -> Self {
        Self {
            transition: CardTransition::Entering { progress: 0.0 },
            exiting: None,
        }
    }

    /// A commit replaced the card at the cursor: the outgoing product starts
    /// its exit and the incoming card restarts the entry animation.
    pub fn begin_swap(&mut self, outgoing: Product) {
        self.transition = CardTransition::Entering { progress: 0.0 };
        self.exiting = Some(ExitingCard {
            product: outgoing,
            progress: 0.0,
        });
    }

    /// Advance both transitions by one frame
    pub fn tick(&mut self, dt: f32) {
        if let CardTransition::Entering { progress } = self.transition {
            let progress = progress + dt / TRANSITION_SECONDS;
            self.transition = if progress >= 1.0 {
                CardTransition::Steady
            } else {
                CardTransition::Entering { progress }
            };
        }

        if let Some(exiting) = &mut self.exiting {
            exiting.progress += dt / TRANSITION_SECONDS;
            if exiting.progress >= 1.0 {
                self.exiting = None;
            }
        }
    }

    /// Pose of the active (incoming or steady) card
    pub fn active_pose(&self) -> CardPose {
        match self.transition {
            CardTransition::Entering { progress } => CardPose::entering(progress),
            CardTransition::Steady => CardPose::steady(),
        }
    }

    /// Outgoing card and its pose, while one is still fading out
    pub fn exiting_card(&self) -> Option<(&Product, CardPose)> {
        self.exiting
            .as_ref()
            .map(|card| (&card.product, CardPose::exiting(card.progress)))
    }

    /// Whether any card transition is still running
    pub fn is_animating(&self) -> bool {
        self.exiting.is_some() || matches!(self.transition, CardTransition::Entering { .. })
    }
}

impl Default for CardAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_pose_endpoints() {
        let start = CardPose::entering(0.0);
        assert_eq!(start.scale, 0.9);
        assert_eq!(start.y_offset, 30.0);
        assert_eq!(start.alpha, 0.0);

        assert_eq!(CardPose::entering(1.0), CardPose::steady());
    }

    #[test]
    fn test_exit_pose_is_the_inverse_of_entry() {
        assert_eq!(CardPose::exiting(0.0), CardPose::steady());

        let end = CardPose::exiting(1.0);
        assert_eq!(end.scale, 0.9);
        assert_eq!(end.y_offset, -30.0);
        assert_eq!(end.alpha, 0.0);
    }

    #[test]
    fn test_swap_runs_exit_and_entry_to_completion() {
        let mut animator = CardAnimator::new();
        animator.tick(TRANSITION_SECONDS); // finish the initial entry
        assert_eq!(animator.transition, CardTransition::Steady);

        animator.begin_swap(Product::new("Classic Beige Blazer", "$260"));
        assert!(animator.is_animating());
        assert!(animator.exiting_card().is_some());

        animator.tick(TRANSITION_SECONDS);
        assert_eq!(animator.transition, CardTransition::Steady);
        assert!(animator.exiting_card().is_none());
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_mid_transition_poses_are_between_endpoints() {
        let mut animator = CardAnimator::new();
        animator.tick(TRANSITION_SECONDS / 2.0);

        let pose = animator.active_pose();
        assert!(pose.alpha > 0.0 && pose.alpha < 1.0);
        assert!(pose.scale > 0.9 && pose.scale < 1.0);
        assert!(pose.y_offset > 0.0 && pose.y_offset < 30.0);
    }
}
