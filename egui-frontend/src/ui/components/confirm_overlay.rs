//! # Confirm Order Button & Purchase Overlay
//!
//! This module contains the confirm-order affordance and the full-screen
//! purchase confirmation overlay it opens.
//!
//! ## Responsibilities:
//! - Render the gold pill button with press-scale feedback
//! - Render the overlay (backdrop wash, check badge, heading, order line,
//!   close button) with a fade-and-scale enter/exit transition
//! - Toggle the overlay flag on press / close
//!
//! ## Purpose:
//! The overlay has no state machine beyond the boolean flag; the transition
//! is driven by egui's bool animation, so repeated renders with the same
//! flag are idempotent and the overlay is removed once fully faded out.

use eframe::egui;
use log::info;

use crate::ui::app_state::BoutiqueApp;
use crate::ui::components::progress_ring::calculations::ease_in_out;
use crate::ui::components::theme::CURRENT_THEME;

/// Fade/scale duration for the overlay transition
const OVERLAY_FADE_SECONDS: f32 = 0.25;

/// Button scale while the pointer is held down on it
const PRESSED_SCALE: f32 = 0.9;

impl BoutiqueApp {
    /// Render the "Confirm Order" pill button
    pub fn render_confirm_button(&mut self, ui: &mut egui::Ui) {
        let desired = egui::vec2(210.0, 54.0);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

        // Press feedback: shrink toward the center while held
        let scale = if response.is_pointer_button_down_on() {
            PRESSED_SCALE
        } else {
            1.0
        };
        let draw_rect = egui::Rect::from_center_size(rect.center(), rect.size() * scale);

        ui.painter().rect_filled(
            draw_rect,
            egui::Rounding::same(draw_rect.height() / 2.0),
            CURRENT_THEME.interactive.accent,
        );
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Confirm Order  ➡",
            egui::FontId::proportional(17.0 * scale),
            CURRENT_THEME.typography.white,
        );

        if response.clicked() {
            info!("🧾 Confirm Order pressed");
            self.overlay.open();
        }
    }

    /// Render the purchase confirmation overlay above all page content
    pub fn render_purchase_overlay(&mut self, ctx: &egui::Context) {
        let openness = ctx.animate_bool_with_time(
            egui::Id::new("purchase_overlay_openness"),
            self.overlay.open,
            OVERLAY_FADE_SECONDS,
        );
        if openness <= 0.0 {
            // Fully faded out: nothing left to render
            return;
        }
        let t = ease_in_out(openness);

        // Content slides up slightly as it fades in
        let rise = egui::vec2(0.0, (1.0 - t) * 20.0);

        egui::Area::new(egui::Id::new("purchase_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, rise)
            .show(ctx, |ui| {
                // Full-screen beige wash behind the content
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    CURRENT_THEME.layout.overlay_wash.gamma_multiply(t),
                );

                ui.set_opacity(t);
                ui.vertical_centered(|ui| {
                    // Gold check badge
                    let badge = egui::vec2(80.0, 80.0);
                    let (badge_rect, _) = ui.allocate_exact_size(badge, egui::Sense::hover());
                    ui.painter().circle_filled(
                        badge_rect.center(),
                        40.0 * egui::lerp(0.9..=1.0, t),
                        CURRENT_THEME.interactive.accent,
                    );
                    ui.painter().text(
                        badge_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "✔",
                        egui::FontId::proportional(36.0),
                        CURRENT_THEME.typography.white,
                    );

                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new("Purchase Confirmed")
                            .font(egui::FontId::proportional(26.0))
                            .strong()
                            .color(CURRENT_THEME.typography.primary),
                    );

                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new("Order #12345 has been successfully placed")
                            .font(egui::FontId::proportional(14.0))
                            .color(CURRENT_THEME.typography.secondary),
                    );

                    ui.add_space(28.0);
                    let close_button = egui::Button::new(
                        egui::RichText::new("Continue Shopping")
                            .font(egui::FontId::proportional(14.0))
                            .color(CURRENT_THEME.typography.secondary),
                    )
                    .fill(egui::Color32::TRANSPARENT)
                    .stroke(egui::Stroke::new(1.0, CURRENT_THEME.interactive.outline))
                    .rounding(egui::Rounding::same(22.0))
                    .min_size(egui::vec2(170.0, 44.0));

                    if ui.add(close_button).clicked() {
                        self.overlay.close();
                    }
                });
            });
    }
}
