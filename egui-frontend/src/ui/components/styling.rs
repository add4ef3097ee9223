//! # Styling Functions
//!
//! This module contains the global style setup and drawing utility functions
//! shared across the boutique UI.
//!
//! ## Key Functions:
//! - `setup_boutique_style()` - Configure global egui styling
//! - `draw_backdrop()` - Animated beige gradient with a slow light sweep
//! - `draw_card_shadow()` - Soft drop shadow under card containers
//!
//! ## Purpose:
//! These functions keep the storefront's visual language (warm neutrals,
//! generous rounding, soft shadows) in one place.

use eframe::egui;

use super::theme::CURRENT_THEME;

/// Seconds for the decorative light sweep to cross the window once
const SWEEP_PERIOD_SECONDS: f64 = 8.0;

/// Setup the boutique styling for the entire application
pub fn setup_boutique_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Panels stay transparent so the painted backdrop shows through
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.override_text_color = Some(CURRENT_THEME.typography.primary);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Generous rounding and padding
        style.spacing.button_padding = egui::vec2(14.0, 9.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(10.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(10.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(10.0);

        style
    });
}

/// Draw the animated storefront backdrop: a vertical beige gradient with a
/// slow light sweep. Purely decorative; has no effect on program state.
pub fn draw_backdrop(ui: &mut egui::Ui, rect: egui::Rect) {
    let painter = ui.painter();

    // Vertical gradient as a two-triangle mesh with per-vertex colors
    let mut mesh = egui::Mesh::default();
    let top = CURRENT_THEME.layout.backdrop_top;
    let bottom = CURRENT_THEME.layout.backdrop_bottom;
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    // Light sweep: a soft vertical band drifting across the window
    let time = ui.input(|i| i.time);
    let band_width = rect.width() / 3.0;
    let travel = rect.width() + band_width;
    let phase = ((time / SWEEP_PERIOD_SECONDS) % 1.0) as f32;
    let band_center = rect.left() - band_width / 2.0 + phase * travel;

    let highlight = egui::Color32::from_rgba_unmultiplied(255, 255, 255, 18);
    let clear = egui::Color32::TRANSPARENT;
    let mut sweep = egui::Mesh::default();
    let left = egui::pos2(band_center - band_width / 2.0, rect.top());
    let mid = egui::pos2(band_center, rect.top());
    let right = egui::pos2(band_center + band_width / 2.0, rect.top());
    let height = egui::vec2(0.0, rect.height());
    sweep.colored_vertex(left, clear);
    sweep.colored_vertex(mid, highlight);
    sweep.colored_vertex(mid + height, highlight);
    sweep.colored_vertex(left + height, clear);
    sweep.add_triangle(0, 1, 2);
    sweep.add_triangle(0, 2, 3);
    sweep.colored_vertex(right, clear);
    sweep.colored_vertex(right + height, clear);
    sweep.add_triangle(1, 4, 5);
    sweep.add_triangle(1, 5, 2);
    painter.add(egui::Shape::mesh(sweep));
}

/// Draw a soft drop shadow under a card rect
pub fn draw_card_shadow(ui: &egui::Ui, rect: egui::Rect, rounding: f32, alpha: f32) {
    let shadow_rect = rect.translate(egui::vec2(4.0, 6.0));
    ui.painter().rect_filled(
        shadow_rect,
        egui::Rounding::same(rounding),
        CURRENT_THEME.layout.card_shadow.gamma_multiply(alpha),
    );
}
