//! # Swipe Deck Renderer
//!
//! This module paints the product cards: a shadowed rounded card with the
//! swipe hint, product title and price, translated by the drag displacement
//! and tilted in proportion to it. During replacement the outgoing card
//! fades out above center while the incoming card scales up from below.
//!
//! egui has no rotated-rounded-rect primitive, so a tilted card is drawn as
//! a convex polygon rotated about the card center, with its text painted as
//! angled text shapes. At rest the card uses the plain rounded painter.

use eframe::egui;
use egui::emath::Rot2;
use egui::epaint::TextShape;
use shared::{tilt_degrees, Product};

use super::interactions::{CARD_HEIGHT, CARD_WIDTH};
use crate::ui::app_state::BoutiqueApp;
use crate::ui::components::styling::draw_card_shadow;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::CardPose;

const CARD_ROUNDING: f32 = 24.0;
const CARD_PADDING: f32 = 24.0;

/// Tilt below which the card is painted with the plain rounded-rect path
const NEGLIGIBLE_TILT_RADIANS: f32 = 1e-3;

impl BoutiqueApp {
    /// Render the swipe deck: the exiting card (if any) behind, then the
    /// active card offset and tilted by the current drag.
    pub fn render_swipe_deck(&mut self, ui: &mut egui::Ui) {
        let desired = egui::vec2(CARD_WIDTH, CARD_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::drag());
        self.handle_card_drag(&response);

        // Outgoing card first, so the incoming card draws over it
        if let Some((product, pose)) = self.cards.exiting_card() {
            let product = product.clone();
            draw_product_card(ui, rect, &product, pose, 0.0);
        }

        let pose = self.cards.active_pose();
        let tilt = tilt_degrees(self.gesture.displacement);
        let dragged_rect = rect.translate(egui::vec2(self.gesture.displacement, 0.0));
        let current = self.deck.current().clone();
        draw_product_card(ui, dragged_rect, &current, pose, tilt);
    }
}

/// Paint one product card at the given pose and tilt (degrees)
fn draw_product_card(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    product: &Product,
    pose: CardPose,
    tilt: f32,
) {
    if pose.alpha <= 0.0 {
        return;
    }

    // Apply the pose: scale about the center, then the vertical offset
    let card_rect = egui::Rect::from_center_size(
        rect.center() + egui::vec2(0.0, pose.y_offset),
        rect.size() * pose.scale,
    );
    let angle = tilt.to_radians();
    let fill = CURRENT_THEME.layout.card_background.gamma_multiply(pose.alpha);

    if angle.abs() < NEGLIGIBLE_TILT_RADIANS {
        draw_card_shadow(ui, card_rect, CARD_ROUNDING, pose.alpha);
        ui.painter()
            .rect_filled(card_rect, egui::Rounding::same(CARD_ROUNDING), fill);
    } else {
        let shadow = CURRENT_THEME.layout.card_shadow.gamma_multiply(pose.alpha);
        let shadow_corners = rotated_corners(card_rect.translate(egui::vec2(4.0, 6.0)), angle);
        ui.painter()
            .add(egui::Shape::convex_polygon(shadow_corners, shadow, egui::Stroke::NONE));

        let corners = rotated_corners(card_rect, angle);
        ui.painter()
            .add(egui::Shape::convex_polygon(corners, fill, egui::Stroke::NONE));
    }

    draw_card_text(ui, card_rect, product, pose.alpha, angle);
}

/// Card copy, bottom-aligned like the storefront layout, rotated with the
/// card when it is tilted
fn draw_card_text(ui: &egui::Ui, card_rect: egui::Rect, product: &Product, alpha: f32, angle: f32) {
    let caption_font = egui::FontId::proportional(13.0);
    let title_font = egui::FontId::proportional(20.0);
    let price_font = egui::FontId::proportional(17.0);

    let left = card_rect.left() + CARD_PADDING;
    let lines = [
        (
            "Swipe to view".to_string(),
            caption_font,
            CURRENT_THEME.typography.caption,
            card_rect.bottom() - CARD_PADDING - 78.0,
        ),
        (
            product.title.clone(),
            title_font,
            CURRENT_THEME.typography.primary,
            card_rect.bottom() - CARD_PADDING - 54.0,
        ),
        (
            product.price.clone(),
            price_font,
            CURRENT_THEME.interactive.accent,
            card_rect.bottom() - CARD_PADDING - 24.0,
        ),
    ];

    let rotation = Rot2::from_angle(angle);
    let center = card_rect.center();

    for (text, font, color, y) in lines {
        let color = color.gamma_multiply(alpha);
        let galley = ui.painter().layout_no_wrap(text, font, color);
        let pos = egui::pos2(left, y);
        // Keep text anchored to the card body while it rotates
        let rotated_pos = center + rotation * (pos - center);
        let mut shape = TextShape::new(rotated_pos, galley, color);
        shape.angle = angle;
        ui.painter().add(shape);
    }
}

/// Corners of `rect` rotated by `angle` around its center, in paint order
fn rotated_corners(rect: egui::Rect, angle: f32) -> Vec<egui::Pos2> {
    let rotation = Rot2::from_angle(angle);
    let center = rect.center();
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
    .iter()
    .map(|&corner| center + rotation * (corner - center))
    .collect()
}
