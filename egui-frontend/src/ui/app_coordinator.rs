//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the
//! primary update loop and overall application lifecycle.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop
//!
//! ## Application Flow:
//! 1. Set up the boutique styling
//! 2. Handle global input (ESC closes the overlay)
//! 3. Tick the per-frame animations (ring sweep, card settle, transitions)
//! 4. Render the backdrop and the three storefront sections
//! 5. Render the purchase overlay above everything
//!
//! All state mutation happens synchronously inside this update pass; the
//! only time-based behavior is per-frame animation interpolation.

use eframe::egui;

use crate::ui::app_state::BoutiqueApp;
use crate::ui::*;

impl eframe::App for BoutiqueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_boutique_style(ctx);

        // ESC closes the purchase overlay
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.overlay.close();
        }

        // Advance per-frame animations. stable_dt is capped so a long pause
        // cannot skip a whole transition.
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.gesture.tick_settle(dt);
        self.cards.tick(dt);
        self.progress_ring.set_target(self.account.ring_value());
        self.progress_ring.tick(dt);

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.available_rect_before_wrap();
            draw_backdrop(ui, full_rect);

            ui.vertical_centered(|ui| {
                ui.add_space(36.0);
                self.render_rewards_section(ui);

                ui.add_space(28.0);
                self.render_swipe_deck(ui);

                ui.add_space(28.0);
                self.render_confirm_button(ui);
            });
        });

        // Overlay renders above the page content
        self.render_purchase_overlay(ctx);

        // Keep repainting while anything is mid-animation
        if self.gesture.is_animating()
            || self.cards.is_animating()
            || self.progress_ring.is_animating()
        {
            ctx.request_repaint();
        } else {
            // The backdrop light sweep is continuous but slow
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
