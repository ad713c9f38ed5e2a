// Freehand trail: a bounded history of recent pen positions rendered as a
// chain of segments that thin out and fade toward the tail, like a nebula
// streak. The decay is a function of the segment's position in the buffer,
// so the whole trail "breathes" as new points push old ones along.

use std::collections::VecDeque;

use crate::draw::draw_line_thick;
use crate::types::{pack_rgb, FrameBuffer, Point};

/// How many pen positions the trail remembers. Oldest entries fall off first.
pub const TRAIL_CAPACITY: usize = 50;

/// Bounded FIFO of pen positions. `None` entries mark frames where the pen
/// vanished; no segment is drawn across such a gap.
#[derive(Default)]
pub struct TrailHistory {
    points: VecDeque<Option<Point>>,
}

impl TrailHistory {
    pub fn new() -> Self {
        Self { points: VecDeque::with_capacity(TRAIL_CAPACITY) }
    }

    /// Record a pen position, evicting the oldest entry beyond capacity.
    pub fn push(&mut self, p: Point) {
        self.push_entry(Some(p));
    }

    /// Record a detection gap so the next stroke starts fresh instead of
    /// connecting across the jump. Consecutive gaps collapse into one entry.
    pub fn break_path(&mut self) {
        if matches!(self.points.back(), Some(Some(_))) {
            self.push_entry(None);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push_entry(&mut self, entry: Option<Point>) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(entry);
    }

    /// Draw the connecting segments on every target surface with identical
    /// thickness and color, so the canvas and the live view never drift apart.
    pub fn render(&self, surfaces: &mut [&mut FrameBuffer]) {
        let len = self.points.len();
        for i in 1..len {
            let (Some(a), Some(b)) = (self.points[i - 1], self.points[i]) else {
                continue; // gap on either end, skip the segment
            };
            let (thickness, color) = segment_style(i, len);
            for surface in surfaces.iter_mut() {
                draw_line_thick(surface, a.x, a.y, b.x, b.y, thickness, color);
            }
        }
    }
}

/// Thickness and color for the segment ending at buffer index `i` (1-based
/// over a history of `len` entries). Early segments are thick and bright;
/// both decay toward the end of the buffer.
fn segment_style(i: usize, len: usize) -> (i32, u32) {
    let thickness = ((TRAIL_CAPACITY as f32 / (i + 1) as f32).sqrt() * 8.0) as i32;
    let intensity = 255 - (i * 255 / len) as u32;
    let color = pack_rgb(
        (intensity / 2) as u8,       // dim red
        (intensity * 3 / 10) as u8,  // dimmer green
        intensity as u8,             // full blue: the streak reads as cold light
    );
    (thickness, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_bounded_fifo() {
        let mut trail = TrailHistory::new();
        for i in 0..60 {
            trail.push(Point::new(i, 0));
        }
        assert_eq!(trail.len(), TRAIL_CAPACITY);
        // The ten oldest entries were evicted.
        assert_eq!(trail.points.front().unwrap().unwrap().x, 10);
        assert_eq!(trail.points.back().unwrap().unwrap().x, 59);
    }

    #[test]
    fn consecutive_gaps_collapse() {
        let mut trail = TrailHistory::new();
        trail.break_path(); // empty history: nothing to break
        assert!(trail.is_empty());

        trail.push(Point::new(1, 1));
        trail.break_path();
        trail.break_path();
        assert_eq!(trail.len(), 2);
        assert_eq!(*trail.points.back().unwrap(), None);
    }

    #[test]
    fn segments_thin_and_fade_along_the_buffer() {
        let (t1, _) = segment_style(1, 50);
        let (t49, _) = segment_style(49, 50);
        assert_eq!(t1, 40); // sqrt(50/2) * 8
        assert_eq!(t49, 8); // sqrt(50/50) * 8
        assert!(t1 > t49);

        let (_, c1) = segment_style(1, 50);
        let (_, c49) = segment_style(49, 50);
        let blue = |c: u32| c & 0xFF;
        assert!(blue(c1) > blue(c49));
        assert_eq!(blue(c1), 250); // 255 - 1*255/50
    }

    #[test]
    fn no_segment_is_drawn_across_a_gap() {
        let mut trail = TrailHistory::new();
        trail.push(Point::new(5, 5));
        trail.break_path();
        trail.push(Point::new(40, 5));

        let mut fb = FrameBuffer::black(64, 64);
        trail.render(&mut [&mut fb]);
        // Both segments touch a gap entry, so nothing was drawn at all.
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn adjacent_points_draw_on_every_surface() {
        let mut trail = TrailHistory::new();
        trail.push(Point::new(10, 32));
        trail.push(Point::new(50, 32));

        let mut canvas = FrameBuffer::black(64, 64);
        let mut live = FrameBuffer::black(64, 64);
        trail.render(&mut [&mut canvas, &mut live]);

        let idx = 32 * 64 + 30; // midpoint of the stroke
        assert_ne!(canvas.pixels[idx], 0);
        assert_eq!(canvas.pixels[idx], live.pixels[idx]);
    }
}
