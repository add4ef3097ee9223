//! # Progress Ring Calculations
//!
//! Pure arc geometry for the loyalty ring. Rendering is a function of the
//! input value and the ring's radius only; there is no hidden state here.

use std::f32::consts::PI;

/// Inset from the bounding box edge to the stroke centerline, so the stroke
/// never clips the box
pub const STROKE_INSET: f32 = 14.0;

/// Clamp a ring value to [0, 100]. Out-of-range input is a normal occurrence
/// (a points total past the tier ceiling), not an error.
pub fn clamp_value(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

/// Radius of the stroke centerline for a ring drawn in a `size`-wide box
pub fn ring_radius(size: f32) -> f32 {
    size / 2.0 - STROKE_INSET
}

pub fn circumference(radius: f32) -> f32 {
    2.0 * PI * radius
}

/// Arc length rendered for a value in [0, 100]
pub fn visible_length(value: f32, circumference: f32) -> f32 {
    clamp_value(value) / 100.0 * circumference
}

/// Unrendered portion of the arc: `circumference` hides the arc entirely,
/// zero shows the full circle.
pub fn dash_offset(value: f32, circumference: f32) -> f32 {
    circumference - visible_length(value, circumference)
}

/// Cubic ease-in-out over [0, 1], clamped outside
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_visible_length_is_proportional() {
        let c = circumference(ring_radius(160.0));
        assert_eq!(visible_length(0.0, c), 0.0);
        assert!((visible_length(100.0, c) - c).abs() < TOLERANCE);
        assert!((visible_length(50.0, c) - c / 2.0).abs() < TOLERANCE);
        assert!((visible_length(25.0, c) - c / 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_out_of_range_values_render_as_clamped_boundaries() {
        let c = circumference(ring_radius(160.0));
        assert_eq!(visible_length(-20.0, c), visible_length(0.0, c));
        assert_eq!(visible_length(140.0, c), visible_length(100.0, c));
        assert_eq!(dash_offset(-20.0, c), dash_offset(0.0, c));
        assert_eq!(dash_offset(140.0, c), dash_offset(100.0, c));
    }

    #[test]
    fn test_dash_offset_endpoints() {
        let c = circumference(ring_radius(160.0));
        // value 0: arc fully hidden
        assert_eq!(dash_offset(0.0, c), c);
        // value 100: arc fully visible
        assert!(dash_offset(100.0, c).abs() < TOLERANCE);
    }

    #[test]
    fn test_ring_radius_leaves_stroke_inset() {
        assert_eq!(ring_radius(160.0), 66.0);
    }

    #[test]
    fn test_ease_in_out_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < TOLERANCE);

        // Clamped outside [0, 1]
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let eased = ease_in_out(step as f32 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }
}
