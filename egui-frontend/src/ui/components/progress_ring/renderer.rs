//! # Progress Ring Renderer
//!
//! This module paints the loyalty ring with egui primitives: a full
//! background track circle plus a foreground arc starting at 12 o'clock and
//! sweeping clockwise in proportion to the displayed value.
//!
//! Whenever the target value changes, the displayed value sweeps from its
//! current position to the target over a fixed duration with ease-in-out.

use eframe::egui;
use std::f32::consts::PI;

use super::calculations::{circumference, clamp_value, dash_offset, ease_in_out, ring_radius};
use crate::ui::components::theme::CURRENT_THEME;

/// Duration of the sweep animation when the target changes
pub const SWEEP_SECONDS: f32 = 0.8;

/// Configuration for ring appearance
#[derive(Debug, Clone)]
pub struct RingConfig {
    /// Diameter of the ring's bounding box
    pub size: f32,
    /// Stroke width for both track and arc
    pub stroke_width: f32,
    /// Unfilled track color
    pub track_color: egui::Color32,
    /// Progress arc color
    pub fill_color: egui::Color32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            size: 160.0,
            stroke_width: 10.0,
            track_color: CURRENT_THEME.ring.track,
            fill_color: CURRENT_THEME.ring.fill,
        }
    }
}

/// Circular progress ring component
#[derive(Debug)]
pub struct ProgressRing {
    /// Configuration for appearance
    config: RingConfig,
    /// Value currently displayed, animated toward `target`
    displayed: f32,
    /// Value the current sweep started from
    sweep_from: f32,
    /// Target value in [0, 100]
    target: f32,
    /// Seconds elapsed in the current sweep
    elapsed: f32,
}

impl ProgressRing {
    /// Create a ring that sweeps in from fully hidden on first render
    pub fn new() -> Self {
        Self {
            config: RingConfig::default(),
            displayed: 0.0,
            sweep_from: 0.0,
            target: 0.0,
            elapsed: SWEEP_SECONDS,
        }
    }

    pub fn with_config(config: RingConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Set the target value, starting a new sweep if it changed. Input is
    /// clamped to [0, 100], never rejected.
    pub fn set_target(&mut self, value: f32) {
        let clamped = clamp_value(value);
        if (clamped - self.target).abs() > f32::EPSILON {
            self.sweep_from = self.displayed;
            self.target = clamped;
            self.elapsed = 0.0;
        }
    }

    /// Advance the sweep animation by one frame
    pub fn tick(&mut self, dt: f32) {
        if !self.is_animating() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(SWEEP_SECONDS);
        let t = ease_in_out(self.elapsed / SWEEP_SECONDS);
        self.displayed = egui::lerp(self.sweep_from..=self.target, t);
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed < SWEEP_SECONDS
    }

    /// Value currently displayed (mid-sweep values included)
    pub fn displayed_value(&self) -> f32 {
        self.displayed
    }

    /// Render the ring, allocating a square of the configured size
    pub fn render(&self, ui: &mut egui::Ui) {
        let desired = egui::vec2(self.config.size, self.config.size);
        let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let center = rect.center();
        let radius = ring_radius(self.config.size);

        // Background track (full circle)
        ui.painter().circle_stroke(
            center,
            radius,
            egui::Stroke::new(self.config.stroke_width, self.config.track_color),
        );

        // Progress arc, clockwise from 12 o'clock. The swept angle follows
        // the stroke-dash model: the dash offset is the hidden portion of
        // the full circumference.
        let circ = circumference(radius);
        let hidden = dash_offset(self.displayed, circ);
        if hidden < circ {
            let start_angle = -PI / 2.0;
            let end_angle = start_angle + 2.0 * PI * ((circ - hidden) / circ);
            self.draw_progress_arc(ui.painter(), center, radius, start_angle, end_angle);
        }
    }

    /// Draw a progress arc using line segments (egui has no native arc)
    fn draw_progress_arc(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    ) {
        // Segment count follows arc length for smooth appearance
        let arc_length = (end_angle - start_angle).abs();
        let num_segments = ((arc_length * radius / 3.0).ceil() as i32).clamp(8, 128);
        let angle_step = (end_angle - start_angle) / num_segments as f32;
        let stroke = egui::Stroke::new(self.config.stroke_width, self.config.fill_color);

        for i in 0..num_segments {
            let angle1 = start_angle + angle_step * i as f32;
            let angle2 = start_angle + angle_step * (i + 1) as f32;

            let point1 = egui::pos2(
                center.x + radius * angle1.cos(),
                center.y + radius * angle1.sin(),
            );
            let point2 = egui::pos2(
                center.x + radius * angle2.cos(),
                center.y + radius * angle2.sin(),
            );

            painter.line_segment([point1, point2], stroke);
        }

        // Rounded caps at both ends of the arc
        let cap_radius = self.config.stroke_width / 2.0;
        for angle in [start_angle, end_angle] {
            let cap = egui::pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            painter.circle_filled(cap, cap_radius, self.config.fill_color);
        }
    }
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_sweeps_in_from_hidden() {
        let mut ring = ProgressRing::new();
        assert!(!ring.is_animating());

        ring.set_target(50.0);
        assert!(ring.is_animating());
        assert_eq!(ring.displayed_value(), 0.0);

        ring.tick(SWEEP_SECONDS);
        assert!(!ring.is_animating());
        assert_eq!(ring.displayed_value(), 50.0);
    }

    #[test]
    fn test_target_change_restarts_sweep_from_displayed() {
        let mut ring = ProgressRing::new();
        ring.set_target(50.0);
        ring.tick(SWEEP_SECONDS);

        ring.set_target(60.0);
        assert!(ring.is_animating());
        assert_eq!(ring.displayed_value(), 50.0);

        ring.tick(SWEEP_SECONDS / 2.0);
        let mid = ring.displayed_value();
        assert!(mid > 50.0 && mid < 60.0);

        ring.tick(SWEEP_SECONDS / 2.0);
        assert_eq!(ring.displayed_value(), 60.0);
    }

    #[test]
    fn test_target_is_clamped() {
        let mut ring = ProgressRing::new();
        ring.set_target(140.0);
        ring.tick(SWEEP_SECONDS);
        assert_eq!(ring.displayed_value(), 100.0);

        ring.set_target(-10.0);
        ring.tick(SWEEP_SECONDS);
        assert_eq!(ring.displayed_value(), 0.0);
    }

    #[test]
    fn test_repeated_identical_targets_do_not_restart_the_sweep() {
        let mut ring = ProgressRing::new();
        ring.set_target(50.0);
        ring.tick(SWEEP_SECONDS);

        ring.set_target(50.0);
        assert!(!ring.is_animating());
    }
}
