//! # Theme Configuration
//!
//! This module provides centralized color configuration for the boutique
//! rewards demo. All visual styling should use these constants to keep the
//! palette consistent and easy to adjust.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let gold = CURRENT_THEME.interactive.accent;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, accents)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Progress ring colors
    pub ring: RingColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Boutique gold accent used for buttons, prices and the ring fill
    pub accent: Color32,
    /// Outline color for secondary (outlined) buttons
    pub outline: Color32,
    /// Fill for secondary buttons
    pub quiet_fill: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Backdrop gradient colors
    pub backdrop_top: Color32,
    pub backdrop_bottom: Color32,
    /// Product card colors
    pub card_background: Color32,
    pub card_shadow: Color32,
    /// Full-screen wash behind the purchase overlay
    pub overlay_wash: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (headings, product titles)
    pub primary: Color32,
    /// Secondary text color (body copy)
    pub secondary: Color32,
    /// Muted caption color (hints, uppercase labels)
    pub caption: Color32,
    /// White text for gold backgrounds
    pub white: Color32,
}

/// Progress ring colors
#[derive(Debug, Clone)]
pub struct RingColors {
    /// Unfilled track
    pub track: Color32,
    /// Filled progress arc
    pub fill: Color32,
}

/// The boutique palette: warm beige neutrals with a gold accent
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(184, 155, 94),
        outline: Color32::from_rgb(156, 156, 156),
        quiet_fill: Color32::from_rgb(245, 241, 235),
    },
    layout: LayoutColors {
        backdrop_top: Color32::from_rgb(233, 228, 219),
        backdrop_bottom: Color32::from_rgb(214, 205, 190),
        card_background: Color32::from_rgb(245, 241, 235),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 40),
        overlay_wash: Color32::from_rgb(233, 228, 219),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(40, 40, 40),
        secondary: Color32::from_rgb(90, 90, 90),
        caption: Color32::from_rgb(130, 130, 130),
        white: Color32::WHITE,
    },
    ring: RingColors {
        track: Color32::from_rgb(209, 199, 184),
        fill: Color32::from_rgb(184, 155, 94),
    },
};
