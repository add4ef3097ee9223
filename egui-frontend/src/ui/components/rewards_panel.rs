//! # Rewards Panel
//!
//! This module renders the loyalty section: the progress ring with the tier
//! caption underneath, plus the fixed-step earn/spend controls that mutate
//! the account (the page-level "controller" of the demo).
//!
//! The ring's target is set from the account each frame in the coordinator;
//! this panel only renders and forwards button presses.

use eframe::egui;
use log::info;
use shared::POINTS_STEP;

use crate::ui::app_state::BoutiqueApp;
use crate::ui::components::theme::CURRENT_THEME;

impl BoutiqueApp {
    /// Render the progress ring with its tier caption and point controls
    pub fn render_rewards_section(&mut self, ui: &mut egui::Ui) {
        self.progress_ring.render(ui);

        ui.add_space(10.0);
        ui.label(
            egui::RichText::new("TIER")
                .font(egui::FontId::proportional(11.0))
                .color(CURRENT_THEME.typography.caption),
        );
        ui.label(
            egui::RichText::new(self.account.tier().label())
                .font(egui::FontId::proportional(21.0))
                .strong()
                .color(CURRENT_THEME.typography.primary),
        );
        ui.label(
            egui::RichText::new(format!("{} points", self.account.points))
                .font(egui::FontId::proportional(14.0))
                .color(CURRENT_THEME.typography.secondary),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            // Center the pair of step buttons under the ring
            let controls_width = 212.0;
            ui.add_space((ui.available_width() - controls_width).max(0.0) / 2.0);

            if ui.add(step_button(format!("– {POINTS_STEP}"))).clicked() {
                self.account.spend_step();
                info!("💎 Spent {} points, balance {}", POINTS_STEP, self.account.points);
            }
            if ui.add(step_button(format!("+ {POINTS_STEP}"))).clicked() {
                self.account.earn_step();
                info!("💎 Earned {} points, balance {}", POINTS_STEP, self.account.points);
            }
        });
    }
}

fn step_button(label: String) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label)
            .font(egui::FontId::proportional(13.0))
            .color(CURRENT_THEME.typography.secondary),
    )
    .fill(CURRENT_THEME.interactive.quiet_fill)
    .stroke(egui::Stroke::new(1.0, CURRENT_THEME.interactive.outline))
    .rounding(egui::Rounding::same(15.0))
    .min_size(egui::vec2(100.0, 30.0))
}
