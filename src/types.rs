// Core types shared by every stage of the pipeline.

/// A 2D pixel position, usually the centroid of a detected color blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black surface; this is how the persistent canvas starts out.
    pub fn black(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Reset to black without reallocating (the "clear canvas" key).
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}

/// What the tracked yellow object currently controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Trace the tracked point as a fading trail.
    FreehandDraw,
    /// Motion resizes/rotates a procedural shape stamped at the point.
    ShapeStamp,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::FreehandDraw => Mode::ShapeStamp,
            Mode::ShapeStamp => Mode::FreehandDraw,
        }
    }
}

/// Which procedural shape gets stamped in shape mode. Selected with keys 1-4,
/// independent of the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
    Star,
}

impl ShapeKind {
    /// Display name used on the HUD.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "PLANET",
            ShapeKind::Rectangle => "SHIP",
            ShapeKind::Triangle => "COMET",
            ShapeKind::Star => "STAR",
        }
    }
}

/// Pack an RGB triple into the 0x00RRGGBB layout minifb expects.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
