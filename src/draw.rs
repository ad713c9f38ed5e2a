// Window + software drawing utilities.
// Everything visible goes through here: the minifb window, the raster
// primitives the shape and trail renderers stamp with, the live/canvas
// compositor, and a tiny 5x7 bitmap font for the HUD.

use crate::error::Error;
use crate::types::{FrameBuffer, Point, ShapeKind};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

/// Blend weights for the displayed frame: mostly live video with the canvas
/// glowing through underneath.
const LIVE_WEIGHT: f32 = 0.7;
const CANVAS_WEIGHT: f32 = 0.3;

const MARKER_COLOR: u32 = 0x00FF_FF00; // yellow ring around the tracked pen

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new composite image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while Q or ESC is held down; either ends the session.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_down(Key::Q) || self.window.is_key_down(Key::Escape)
    }

    /// Visual: when pressed, the canvas goes back to black and the trail resets.
    pub fn clear_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Keys 1-4 pick which shape gets stamped in shape mode. Any other key
    /// is simply not ours to handle.
    pub fn shape_key_pressed(&self) -> Option<ShapeKind> {
        const BINDINGS: [(Key, ShapeKind); 4] = [
            (Key::Key1, ShapeKind::Circle),
            (Key::Key2, ShapeKind::Rectangle),
            (Key::Key3, ShapeKind::Triangle),
            (Key::Key4, ShapeKind::Star),
        ];
        BINDINGS
            .iter()
            .find(|(key, _)| self.window.is_key_pressed(*key, KeyRepeat::No))
            .map(|&(_, kind)| kind)
    }
}

/* ---------- Software drawing: pixels, lines, discs, polygons ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a line with the given stroke thickness by stamping filled discs
/// along the Bresenham path. Thickness 1 falls back to the thin line.
pub fn draw_line_thick(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: u32) {
    if thickness <= 1 {
        draw_line(fb, x0, y0, x1, y1, color);
        return;
    }
    let radius = thickness / 2;
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        fill_disc(fb, x0, y0, radius, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Solid filled circle, clipped to the framebuffer.
pub fn fill_disc(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    for dy in -radius..=radius {
        let half = (((radius * radius - dy * dy) as f32).sqrt()) as i32;
        for dx in -half..=half {
            put_pixel(fb, cx + dx, cy + dy, color);
        }
    }
}

/// Circle outline with a stroke width, drawn as an annulus.
pub fn draw_ring(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, thickness: i32, color: u32) {
    if radius <= 0 {
        return;
    }
    let rf = radius as f32;
    let half_t = (thickness as f32 * 0.5).max(0.5);
    let reach = radius + thickness;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if (dist - rf).abs() <= half_t {
                put_pixel(fb, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Fill a closed polygon with even-odd scanline rules.
pub fn fill_polygon(fb: &mut FrameBuffer, verts: &[(i32, i32)], color: u32) {
    if verts.len() < 3 {
        return;
    }
    let min_y = verts.iter().map(|v| v.1).min().unwrap_or(0);
    let max_y = verts.iter().map(|v| v.1).max().unwrap_or(0);

    let mut crossings: Vec<f32> = Vec::with_capacity(verts.len());
    for y in min_y..=max_y {
        crossings.clear();
        for i in 0..verts.len() {
            let (x0, y0) = verts[i];
            let (x1, y1) = verts[(i + 1) % verts.len()];
            if y0 == y1 {
                continue; // horizontal edge: covered by its neighbours
            }
            // Half-open span [min, max) so shared vertices count once.
            let (lo, hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
            if y < lo || y >= hi {
                continue;
            }
            let t = (y - y0) as f32 / (y1 - y0) as f32;
            crossings.push(x0 as f32 + t * (x1 - x0) as f32);
        }
        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in crossings.chunks_exact(2) {
            let start = pair[0].round() as i32;
            let end = pair[1].round() as i32;
            for x in start..=end {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Stroke the polygon's edges (closed) with the given thickness.
pub fn draw_polygon_outline(fb: &mut FrameBuffer, verts: &[(i32, i32)], thickness: i32, color: u32) {
    for i in 0..verts.len() {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % verts.len()];
        draw_line_thick(fb, x0, y0, x1, y1, thickness, color);
    }
}

/// Axis-aligned filled rectangle (HUD panel background).
pub fn fill_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            put_pixel(fb, x, y, color);
        }
    }
}

/// Axis-aligned rectangle border (HUD panel frame).
pub fn draw_rect_outline(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: u32) {
    for t in 0..thickness {
        draw_line(fb, x0 + t, y0 + t, x1 - t, y0 + t, color);
        draw_line(fb, x0 + t, y1 - t, x1 - t, y1 - t, color);
        draw_line(fb, x0 + t, y0 + t, x0 + t, y1 - t, color);
        draw_line(fb, x1 - t, y0 + t, x1 - t, y1 - t, color);
    }
}

/// Mark the tracked pen position on the live view: an open ring with a solid
/// dot in the middle, drawn on the live frame only (never the canvas).
pub fn draw_marker(fb: &mut FrameBuffer, p: Point) {
    draw_ring(fb, p.x, p.y, 15, 3, MARKER_COLOR);
    fill_disc(fb, p.x, p.y, 5, MARKER_COLOR);
}

/// Weighted blend of the live frame over the persistent canvas.
/// Visual: your drawings glow through the video instead of covering it.
pub fn composite(screen: &mut FrameBuffer, live: &FrameBuffer, canvas: &FrameBuffer) {
    for (out, (&l, &c)) in screen
        .pixels
        .iter_mut()
        .zip(live.pixels.iter().zip(canvas.pixels.iter()))
    {
        let blend = |shift: u32| {
            let lv = ((l >> shift) & 0xFF) as f32;
            let cv = ((c >> shift) & 0xFF) as f32;
            (lv * LIVE_WEIGHT + cv * CANVAS_WEIGHT).min(255.0) as u32
        };
        *out = (blend(16) << 16) | (blend(8) << 8) | blend(0);
    }
}

/* ---------- 5x7 bitmap font for the HUD ---------- */

/// Return a 5x7 glyph bitmap for the characters the HUD uses.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Full uppercase alphabet
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation: space, vertical bar, colon, dot, dash
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b01110,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; lowercase is drawn as uppercase.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch.to_ascii_uppercase(), color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_weights_live_over_canvas() {
        let live = FrameBuffer { width: 1, height: 1, pixels: vec![0x00FF0000] };
        let canvas = FrameBuffer { width: 1, height: 1, pixels: vec![0x000000FF] };
        let mut screen = FrameBuffer::black(1, 1);
        composite(&mut screen, &live, &canvas);
        // 0.7 * 255 = 178.5 red, 0.3 * 255 = 76.5 blue.
        assert_eq!(screen.pixels[0], (178 << 16) | 76);
    }

    #[test]
    fn drawing_clips_at_the_borders() {
        let mut fb = FrameBuffer::black(16, 16);
        fill_disc(&mut fb, 0, 0, 10, 0x00FFFFFF);
        draw_ring(&mut fb, 15, 15, 8, 2, 0x00FFFFFF);
        draw_line_thick(&mut fb, -5, 8, 30, 8, 6, 0x00FFFFFF);
        // Nothing panicked and in-bounds pixels were touched.
        assert_ne!(fb.pixels[0], 0);
    }

    #[test]
    fn polygon_fill_covers_the_interior_only() {
        let mut fb = FrameBuffer::black(32, 32);
        let square = [(8, 8), (24, 8), (24, 24), (8, 24)];
        fill_polygon(&mut fb, &square, 0x00_00FF00);
        assert_eq!(fb.pixels[16 * 32 + 16], 0x00_00FF00); // center
        assert_eq!(fb.pixels[4 * 32 + 4], 0); // outside
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut fb = FrameBuffer::black(8, 8);
        fill_polygon(&mut fb, &[(2, 2), (5, 5)], 0x00FFFFFF);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }
}
