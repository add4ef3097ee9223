use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Displacement (in layout points) a drag must exceed for release to commit.
pub const SWIPE_COMMIT_THRESHOLD: f32 = 120.0;

/// Displacement at which the card tilt reaches its maximum angle.
pub const TILT_MAX_DISPLACEMENT: f32 = 150.0;

/// Maximum card tilt in degrees, reached at `TILT_MAX_DISPLACEMENT`.
pub const TILT_MAX_DEGREES: f32 = 8.0;

/// Points required to reach the Silver tier.
pub const SILVER_THRESHOLD: u32 = 9_000;

/// Points required to reach the Gold tier. Also the ceiling the progress
/// ring measures against.
pub const GOLD_THRESHOLD: u32 = 15_000;

/// Fixed step by which loyalty points are earned or spent.
pub const POINTS_STEP: u32 = 500;

/// A single storefront item shown on a swipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identity token for this product
    pub id: Uuid,
    /// Display name shown on the card
    pub title: String,
    /// Formatted price string (e.g. "$420")
    pub price: String,
}

impl Product {
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            price: price.into(),
        }
    }
}

/// Errors from deck construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// Index arithmetic on an empty sequence is undefined, so an empty
    /// product list is rejected up front.
    #[error("a deck requires at least one product")]
    Empty,
}

/// Ordered, non-empty collection of products with a single active cursor.
///
/// The cursor is always a valid index: the deck cannot be constructed empty
/// and `advance` wraps modulo the deck length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    products: Vec<Product>,
    cursor: usize,
}

impl Deck {
    /// Create a deck from an ordered product list. Order is significant and
    /// fixed for the lifetime of the deck.
    pub fn new(products: Vec<Product>) -> Result<Self, DeckError> {
        if products.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self {
            products,
            cursor: 0,
        })
    }

    /// The product at the current cursor
    pub fn current(&self) -> &Product {
        &self.products[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        // Non-empty by construction
        false
    }

    /// Move the cursor forward one product, wrapping at the end of the deck
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.products.len();
    }
}

/// Outcome of releasing a horizontal drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Displacement exceeded the threshold; the deck cursor advances
    Commit,
    /// Displacement fell short; the cursor is unchanged and the card
    /// springs back to center
    Cancel,
}

/// Resolve a drag release from its final horizontal displacement.
///
/// The comparison uses the absolute displacement, so a left swipe and a
/// right swipe both commit and both advance the same forward cursor. That
/// symmetry is deliberate: direction never selects a different destination.
pub fn resolve_drag_release(displacement: f32) -> DragOutcome {
    if displacement.abs() > SWIPE_COMMIT_THRESHOLD {
        DragOutcome::Commit
    } else {
        DragOutcome::Cancel
    }
}

/// Map a horizontal displacement to a card tilt in degrees.
///
/// Linear over [-150, 150] points to [-8, 8] degrees, clamped beyond.
pub fn tilt_degrees(displacement: f32) -> f32 {
    let clamped = displacement.clamp(-TILT_MAX_DISPLACEMENT, TILT_MAX_DISPLACEMENT);
    clamped / TILT_MAX_DISPLACEMENT * TILT_MAX_DEGREES
}

/// Loyalty tier derived from a points total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    /// Tier for a given points total
    pub fn for_points(points: u32) -> Self {
        if points >= GOLD_THRESHOLD {
            Tier::Gold
        } else if points >= SILVER_THRESHOLD {
            Tier::Silver
        } else {
            Tier::Bronze
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Loyalty account backing the progress ring and tier caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub points: u32,
}

impl LoyaltyAccount {
    pub fn new(points: u32) -> Self {
        Self { points }
    }

    pub fn tier(&self) -> Tier {
        Tier::for_points(self.points)
    }

    /// Earn one fixed step of points. Exceeding the Gold ceiling is normal;
    /// the ring clamps at render time.
    pub fn earn_step(&mut self) {
        self.points += POINTS_STEP;
    }

    /// Spend one fixed step of points, saturating at zero
    pub fn spend_step(&mut self) {
        self.points = self.points.saturating_sub(POINTS_STEP);
    }

    /// Ring value in [0, 100]-ish units: points measured against the Gold
    /// threshold. May exceed 100 for totals past the ceiling; the ring
    /// treats out-of-range values as the clamped boundary.
    pub fn ring_value(&self) -> f32 {
        self.points as f32 / GOLD_THRESHOLD as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deck() -> Deck {
        Deck::new(vec![
            Product::new("Tailored Suit Set", "$420"),
            Product::new("Classic Beige Blazer", "$260"),
            Product::new("Minimal Wide Pants", "$190"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert_eq!(Deck::new(vec![]), Err(DeckError::Empty));
    }

    #[test]
    fn test_advance_wraps_modulo_length() {
        let mut deck = sample_deck();
        assert_eq!(deck.cursor(), 0);

        deck.advance();
        assert_eq!(deck.cursor(), 1);
        deck.advance();
        assert_eq!(deck.cursor(), 2);
        deck.advance();
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_advancing_len_times_closes_cycle() {
        let mut deck = sample_deck();
        let start = deck.current().id;

        for _ in 0..deck.len() {
            deck.advance();
        }
        assert_eq!(deck.current().id, start);
    }

    #[test]
    fn test_single_product_deck_always_shows_it() {
        let mut deck = Deck::new(vec![Product::new("Tailored Suit Set", "$420")]).unwrap();
        deck.advance();
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.current().title, "Tailored Suit Set");
    }

    #[test]
    fn test_release_past_threshold_commits_in_both_directions() {
        assert_eq!(resolve_drag_release(150.0), DragOutcome::Commit);
        assert_eq!(resolve_drag_release(-150.0), DragOutcome::Commit);
    }

    #[test]
    fn test_release_short_of_threshold_cancels() {
        assert_eq!(resolve_drag_release(80.0), DragOutcome::Cancel);
        assert_eq!(resolve_drag_release(-80.0), DragOutcome::Cancel);
        assert_eq!(resolve_drag_release(0.0), DragOutcome::Cancel);
    }

    #[test]
    fn test_release_outcome_drives_the_cursor() {
        // Right swipe past the threshold: 0 -> 1
        let mut deck = sample_deck();
        if resolve_drag_release(150.0) == DragOutcome::Commit {
            deck.advance();
        }
        assert_eq!(deck.cursor(), 1);

        // Left swipe past the threshold advances the same way: 0 -> 1
        let mut deck = sample_deck();
        if resolve_drag_release(-150.0) == DragOutcome::Commit {
            deck.advance();
        }
        assert_eq!(deck.cursor(), 1);

        // Short release leaves the cursor alone
        let mut deck = sample_deck();
        if resolve_drag_release(80.0) == DragOutcome::Commit {
            deck.advance();
        }
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_threshold_comparison_is_strict() {
        assert_eq!(resolve_drag_release(SWIPE_COMMIT_THRESHOLD), DragOutcome::Cancel);
        assert_eq!(resolve_drag_release(-SWIPE_COMMIT_THRESHOLD), DragOutcome::Cancel);
    }

    #[test]
    fn test_tilt_is_linear_and_clamped() {
        assert_eq!(tilt_degrees(0.0), 0.0);
        assert_eq!(tilt_degrees(150.0), 8.0);
        assert_eq!(tilt_degrees(-150.0), -8.0);
        assert_eq!(tilt_degrees(75.0), 4.0);

        // Displacement has no cap during a drag, but the tilt does
        assert_eq!(tilt_degrees(400.0), 8.0);
        assert_eq!(tilt_degrees(-400.0), -8.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_points(0), Tier::Bronze);
        assert_eq!(Tier::for_points(8_999), Tier::Bronze);
        assert_eq!(Tier::for_points(9_000), Tier::Silver);
        assert_eq!(Tier::for_points(14_999), Tier::Silver);
        assert_eq!(Tier::for_points(15_000), Tier::Gold);
    }

    #[test]
    fn test_ring_value_measures_against_gold_threshold() {
        assert_eq!(LoyaltyAccount::new(7_500).ring_value(), 50.0);
        assert_eq!(LoyaltyAccount::new(0).ring_value(), 0.0);
        assert_eq!(LoyaltyAccount::new(15_000).ring_value(), 100.0);

        // Past the ceiling the raw value exceeds 100; clamping is the
        // renderer's job.
        assert!(LoyaltyAccount::new(18_000).ring_value() > 100.0);
    }

    #[test]
    fn test_point_steps() {
        let mut account = LoyaltyAccount::new(7_500);
        account.earn_step();
        assert_eq!(account.points, 8_000);

        account.spend_step();
        assert_eq!(account.points, 7_500);

        let mut broke = LoyaltyAccount::new(200);
        broke.spend_step();
        assert_eq!(broke.points, 0);
    }
}
