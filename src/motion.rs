// Frame-to-frame displacement of the tracked point. This is the raw control
// signal for shape mode: the parameter controller turns it into size and
// rotation changes.

use crate::types::Point;

/// Displacement between two consecutive centroid observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub dx: f32,
    pub dy: f32,
    pub magnitude: f32,
}

impl MotionSample {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0, magnitude: 0.0 };
}

/// Remembers where the tracked point was last frame.
#[derive(Default)]
pub struct MotionTracker {
    prior: Option<Point>,
}

impl MotionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displacement from the previous observation to `current`. The first call
    /// seeds the tracker and reports zero motion. The prior is overwritten on
    /// every call.
    pub fn update(&mut self, current: Point) -> MotionSample {
        let sample = match self.prior {
            None => MotionSample::ZERO,
            Some(prev) => {
                let dx = (current.x - prev.x) as f32;
                let dy = (current.y - prev.y) as f32;
                MotionSample { dx, dy, magnitude: dx.hypot(dy) }
            }
        };
        self.prior = Some(current);
        sample
    }
}
