// Maps the motion signal onto the stamped shape's parameters: vertical motion
// stretches/shrinks it, horizontal motion spins it. A small magnitude gate
// keeps detection jitter from nudging the shape while the hand is still.

use crate::color::hsv_to_rgb;
use crate::motion::MotionSample;
use crate::types::pack_rgb;

pub const SIZE_MIN: i32 = 20;
pub const SIZE_MAX: i32 = 150;

/// Motion below this magnitude (in pixels) is treated as jitter.
const MOTION_GATE: f32 = 2.0;

/// Sensitivity of size to vertical motion and rotation to horizontal motion.
const SIZE_SCALE: f32 = 0.3;
const ROTATION_SCALE: f32 = 0.5;

/// Current size and rotation of the stamped shape. Survives mode switches;
/// only an explicit motion update changes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
    pub size: i32,        // clamped to [SIZE_MIN, SIZE_MAX]
    pub rotation: f32,    // wrapped into [0, 360)
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self { size: 50, rotation: 0.0 }
    }
}

impl ShapeParams {
    /// Apply one motion sample. Below the gate nothing changes; above it,
    /// size saturates at its bounds and rotation wraps.
    pub fn apply(&mut self, sample: MotionSample) {
        if sample.magnitude <= MOTION_GATE {
            return;
        }
        let grown = self.size + (sample.dy * SIZE_SCALE).round() as i32;
        self.size = grown.clamp(SIZE_MIN, SIZE_MAX);
        self.rotation = (self.rotation + sample.dx * ROTATION_SCALE).rem_euclid(360.0);
    }

    /// Fill color derived from the current size: the size range maps onto a
    /// half-turn of hue at full saturation and value, so growing the shape
    /// sweeps it through the spectrum.
    pub fn fill_color(&self) -> u32 {
        let hue = ((self.size - SIZE_MIN) as f32 / (SIZE_MAX - SIZE_MIN) as f32 * 180.0) as u8;
        let (r, g, b) = hsv_to_rgb(hue.min(180), 255, 255);
        pack_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(dx: f32, dy: f32) -> MotionSample {
        MotionSample { dx, dy, magnitude: dx.hypot(dy) }
    }

    #[test]
    fn motion_below_gate_changes_nothing() {
        let mut p = ShapeParams::default();
        let before = p;
        p.apply(sample(1.0, 1.0)); // magnitude ~1.41, under the gate
        assert_eq!(p, before);
        p.apply(MotionSample::ZERO);
        assert_eq!(p, before);
    }

    #[test]
    fn vertical_motion_resizes_and_horizontal_motion_rotates() {
        let mut p = ShapeParams::default();
        p.apply(sample(10.0, 6.0));
        assert_eq!(p.size, 52); // 50 + round(6 * 0.3)
        assert!((p.rotation - 5.0).abs() < 1e-6); // 10 * 0.5
    }

    #[test]
    fn size_saturates_at_the_upper_bound() {
        let mut p = ShapeParams { size: 148, rotation: 0.0 };
        p.apply(sample(0.0, 17.0)); // round(17 * 0.3) = +5
        assert_eq!(p.size, 150);
    }

    #[test]
    fn size_saturates_at_the_lower_bound() {
        let mut p = ShapeParams { size: 21, rotation: 0.0 };
        p.apply(sample(0.0, -40.0));
        assert_eq!(p.size, SIZE_MIN);
    }

    #[test]
    fn rotation_wraps_past_a_full_turn() {
        let mut p = ShapeParams { size: 50, rotation: 358.0 };
        p.apply(sample(10.0, 0.0)); // +5 degrees
        assert!((p.rotation - 3.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_wraps_negative_motion_into_range() {
        let mut p = ShapeParams { size: 50, rotation: 1.0 };
        p.apply(sample(-10.0, 0.0)); // -5 degrees
        assert!((p.rotation - 356.0).abs() < 1e-6);
    }

    #[test]
    fn clamping_is_idempotent() {
        let mut p = ShapeParams { size: SIZE_MAX, rotation: 0.0 };
        p.apply(sample(0.0, 100.0));
        p.apply(sample(0.0, 100.0));
        assert_eq!(p.size, SIZE_MAX);
    }

    #[test]
    fn fill_color_tracks_size() {
        // Smallest size: hue 0 (red). Largest: hue 180, back to red.
        let small = ShapeParams { size: SIZE_MIN, rotation: 0.0 };
        let large = ShapeParams { size: SIZE_MAX, rotation: 0.0 };
        assert_eq!(small.fill_color(), 0x00FF0000);
        assert_eq!(large.fill_color(), 0x00FF0000);
        // Midway lands on cyan-ish hue 90 -> 180 full degrees.
        let mid = ShapeParams { size: 85, rotation: 0.0 };
        assert_eq!(mid.fill_color(), 0x0000FFFF);
    }
}
