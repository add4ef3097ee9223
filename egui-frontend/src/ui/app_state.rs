//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the boutique rewards demo.
//!
//! ## Key Types:
//! - `BoutiqueApp` - Main application state struct
//!
//! ## Purpose:
//! The BoutiqueApp struct holds all application state in a single location:
//! the loyalty account backing the progress ring, the product deck, the
//! transient gesture state, card transition choreography, and the purchase
//! overlay flag. Rendering components hang their methods off this struct,
//! following the single source of truth principle for state management.

use log::info;
use shared::{Deck, LoyaltyAccount, Product};

use crate::ui::components::progress_ring::ProgressRing;
use crate::ui::state::{CardAnimator, GestureState, OverlayState};

/// Points the demo account starts with (halfway to Gold)
const STARTING_POINTS: u32 = 7_500;

/// Main application struct for the egui boutique storefront
pub struct BoutiqueApp {
    /// Loyalty points backing the progress ring and tier caption
    pub account: LoyaltyAccount,

    /// Product deck driven by swipe gestures
    pub deck: Deck,

    /// Transient drag state for the active card
    pub gesture: GestureState,

    /// Entry/exit choreography for card replacement
    pub cards: CardAnimator,

    /// Purchase confirmation overlay flag
    pub overlay: OverlayState,

    /// Progress ring component (owns its sweep animation)
    pub progress_ring: ProgressRing,
}

impl BoutiqueApp {
    /// Create a new BoutiqueApp with the demo storefront contents
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing BoutiqueApp");

        let deck = Deck::new(vec![
            Product::new("Tailored Suit Set", "$420"),
            Product::new("Classic Beige Blazer", "$260"),
            Product::new("Minimal Wide Pants", "$190"),
        ])?;

        Ok(Self {
            account: LoyaltyAccount::new(STARTING_POINTS),
            deck,
            gesture: GestureState::new(),
            cards: CardAnimator::new(),
            overlay: OverlayState::new(),
            progress_ring: ProgressRing::new(),
        })
    }
}
