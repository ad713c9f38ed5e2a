// Color-blob detection: threshold the frame in HSV, scrub noise with a couple
// of erode/dilate passes, then take the centroid of the largest surviving
// blob. Returns None when nothing big enough is in view, which the loop
// treats as "no action this frame".

use crate::color::rgb_to_hsv;
use crate::types::{FrameBuffer, Point};

/// A blob must cover at least this many pixels to count as a detection.
pub const MIN_BLOB_AREA: usize = 500;

/// 5x5 square structuring element, applied this many times each way.
const KERNEL_RADIUS: i32 = 2;
const MORPH_PASSES: usize = 2;

/// The two object colors the board reacts to, with their inclusive HSV
/// bounds (hue 0..180, saturation/value 0..255).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorClass {
    /// The pen. Drives the trail or the stamped shape.
    Yellow,
    /// The mode switch.
    Blue,
}

impl ColorClass {
    fn bounds(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            ColorClass::Yellow => ((20, 100, 100), (30, 255, 255)),
            ColorClass::Blue => ((100, 100, 100), (130, 255, 255)),
        }
    }
}

/// Find the centroid of the largest blob of `class`-colored pixels, or None
/// if no blob passes the area threshold.
pub fn detect(frame: &FrameBuffer, class: ColorClass) -> Option<Point> {
    let mut mask = threshold(frame, class);
    let mut scratch = vec![0u8; mask.len()];

    for _ in 0..MORPH_PASSES {
        erode(&mask, &mut scratch, frame.width, frame.height);
        std::mem::swap(&mut mask, &mut scratch);
    }
    for _ in 0..MORPH_PASSES {
        dilate(&mask, &mut scratch, frame.width, frame.height);
        std::mem::swap(&mut mask, &mut scratch);
    }

    largest_blob_centroid(&mask, frame.width, frame.height)
}

/// Binary mask: 1 where the pixel's HSV falls inside the class bounds.
fn threshold(frame: &FrameBuffer, class: ColorClass) -> Vec<u8> {
    let (lo, hi) = class.bounds();
    frame
        .pixels
        .iter()
        .map(|&px| {
            let r = ((px >> 16) & 0xFF) as u8;
            let g = ((px >> 8) & 0xFF) as u8;
            let b = (px & 0xFF) as u8;
            let (h, s, v) = rgb_to_hsv(r, g, b);
            let inside = (lo.0..=hi.0).contains(&h)
                && (lo.1..=hi.1).contains(&s)
                && (lo.2..=hi.2).contains(&v);
            inside as u8
        })
        .collect()
}

/// A pixel survives erosion only if its whole (clipped) kernel window is set.
fn erode(src: &[u8], dst: &mut [u8], width: usize, height: usize) {
    morph(src, dst, width, height, true)
}

/// A pixel is set after dilation if anything in its kernel window is set.
fn dilate(src: &[u8], dst: &mut [u8], width: usize, height: usize) {
    morph(src, dst, width, height, false)
}

fn morph(src: &[u8], dst: &mut [u8], width: usize, height: usize, all: bool) {
    let (w, h) = (width as i32, height as i32);
    for y in 0..h {
        for x in 0..w {
            let mut hit = all;
            'window: for ky in -KERNEL_RADIUS..=KERNEL_RADIUS {
                for kx in -KERNEL_RADIUS..=KERNEL_RADIUS {
                    let (sx, sy) = (x + kx, y + ky);
                    if sx < 0 || sy < 0 || sx >= w || sy >= h {
                        continue; // window clipped at the border
                    }
                    let set = src[(sy * w + sx) as usize] != 0;
                    if all && !set {
                        hit = false;
                        break 'window;
                    }
                    if !all && set {
                        hit = true;
                        break 'window;
                    }
                }
            }
            dst[(y * w + x) as usize] = hit as u8;
        }
    }
}

/// Flood the mask into 8-connected components, keep the biggest, and return
/// its first-moment centroid. A zero-area component can never divide by zero:
/// it simply reports no detection.
fn largest_blob_centroid(mask: &[u8], width: usize, height: usize) -> Option<Point> {
    let (w, h) = (width as i32, height as i32);
    let mut visited = vec![false; mask.len()];
    let mut stack: Vec<(i32, i32)> = Vec::new();

    let mut best_area = 0usize;
    let mut best_centroid = None;

    for start in 0..mask.len() {
        if mask[start] == 0 || visited[start] {
            continue;
        }

        // Accumulate the zeroth and first moments over this component.
        let mut area = 0usize;
        let (mut sum_x, mut sum_y) = (0i64, 0i64);
        visited[start] = true;
        stack.push(((start % width) as i32, (start / width) as i32));

        while let Some((x, y)) = stack.pop() {
            area += 1;
            sum_x += x as i64;
            sum_y += y as i64;

            for ny in (y - 1)..=(y + 1) {
                for nx in (x - 1)..=(x + 1) {
                    if nx < 0 || ny < 0 || nx >= w || ny >= h {
                        continue;
                    }
                    let idx = (ny * w + nx) as usize;
                    if mask[idx] != 0 && !visited[idx] {
                        visited[idx] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }

        if area > best_area {
            best_area = area;
            best_centroid = Some(Point::new(
                (sum_x / area as i64) as i32,
                (sum_y / area as i64) as i32,
            ));
        }
    }

    if best_area > MIN_BLOB_AREA { best_centroid } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pack_rgb;

    /// Black frame with one solid square of the given color.
    fn frame_with_square(color: u32, cx: usize, cy: usize, half: usize) -> FrameBuffer {
        let mut fb = FrameBuffer::black(160, 120);
        for y in (cy - half)..(cy + half) {
            for x in (cx - half)..(cx + half) {
                fb.pixels[y * 160 + x] = color;
            }
        }
        fb
    }

    #[test]
    fn yellow_square_is_detected_at_its_center() {
        // 40x40 = 1600 px: survives two erode passes and the area gate.
        let fb = frame_with_square(pack_rgb(255, 255, 0), 80, 60, 20);
        let c = detect(&fb, ColorClass::Yellow).expect("blob");
        assert!((c.x - 80).abs() <= 1 && (c.y - 60).abs() <= 1);
    }

    #[test]
    fn blue_square_matches_only_the_blue_class() {
        let fb = frame_with_square(pack_rgb(0, 0, 255), 40, 40, 20);
        assert!(detect(&fb, ColorClass::Blue).is_some());
        assert!(detect(&fb, ColorClass::Yellow).is_none());
    }

    #[test]
    fn small_blobs_fall_under_the_area_gate() {
        // 14x14 = 196 px, below the 500 px threshold even before erosion.
        let fb = frame_with_square(pack_rgb(255, 255, 0), 80, 60, 7);
        assert!(detect(&fb, ColorClass::Yellow).is_none());
    }

    #[test]
    fn empty_frame_yields_no_detection() {
        let fb = FrameBuffer::black(160, 120);
        assert!(detect(&fb, ColorClass::Yellow).is_none());
        assert!(detect(&fb, ColorClass::Blue).is_none());
    }

    #[test]
    fn largest_of_two_blobs_wins() {
        let mut fb = frame_with_square(pack_rgb(255, 255, 0), 40, 60, 22);
        // A second, smaller yellow square far away.
        for y in 44..76 {
            for x in 114..146 {
                fb.pixels[y * 160 + x] = pack_rgb(255, 255, 0);
            }
        }
        let c = detect(&fb, ColorClass::Yellow).expect("blob");
        assert!(c.x < 80, "centroid {c:?} should come from the bigger blob");
    }

    #[test]
    fn desaturated_yellow_is_rejected() {
        // Pale yellow: hue matches but saturation is under the lower bound.
        let fb = frame_with_square(pack_rgb(255, 255, 180), 80, 60, 20);
        assert!(detect(&fb, ColorClass::Yellow).is_none());
    }
}
