// Cosmic Board: a virtual whiteboard driven by color-tracked hand motion.
// • A YELLOW object is the pen. In freehand mode it leaves a fading trail;
//   in shape mode its motion resizes (vertical) and rotates (horizontal) a
//   procedural shape stamped onto a persistent canvas.
// • A BLUE object toggles between the two modes.
// • Keys: 1-4 pick the shape, C clears the canvas, Q/ESC quits.

mod camera;
mod color;
mod draw;
mod error;
mod geometry;
mod motion;
mod params;
mod shapes;
mod trail;
mod types;
mod vision;

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use camera::CameraCapture;
use draw::Drawer;
use error::Error;
use motion::MotionTracker;
use params::ShapeParams;
use trail::TrailHistory;
use types::{FrameBuffer, Mode, ShapeKind};
use vision::ColorClass;

/// Pause after a blue-triggered mode toggle so one gesture can't flip the
/// mode again on the very next frames.
const MODE_TOGGLE_PAUSE: Duration = Duration::from_millis(500);

const CAM_WIDTH: u32 = 1280;
const CAM_HEIGHT: u32 = 720;

fn main() -> Result<(), Error> {
    env_logger::init();
    info!("cosmic board: yellow draws, blue toggles mode");
    info!("keys: C = clear, 1-4 = planet/ship/comet/star, Q/ESC = quit");

    /* --- Camera + window setup --- */
    let mut cam = CameraCapture::new(0, CAM_WIDTH, CAM_HEIGHT)?;
    let (w, h) = cam.resolution();
    let (w, h) = (w as usize, h as usize);
    let mut drawer = Drawer::new("Cosmic Board", w, h)?;

    /* --- Persistent state ---
       The canvas accumulates everything you draw; the trail, motion tracker,
       and shape parameters drive what gets drawn onto it. */
    let mut canvas = FrameBuffer::black(w, h);
    let mut screen = FrameBuffer::black(w, h);

    let mut mode = Mode::FreehandDraw;
    let mut shape_kind = ShapeKind::Circle;
    let mut trail = TrailHistory::new();
    let mut tracker = MotionTracker::new();
    let mut params = ShapeParams::default();

    /* --- FPS bookkeeping (debug log once per second) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.quit_pressed() {
        // 1) Grab a fresh live frame (already mirrored). A camera failure is
        //    fatal for the loop; the error propagates out of main.
        let mut live = cam.next_frame()?;

        // 2) Keys
        if drawer.clear_pressed_once() {
            canvas.clear();
            trail.clear();
            info!("canvas cleared");
        }
        if let Some(kind) = drawer.shape_key_pressed() {
            shape_kind = kind;
            debug!("shape -> {kind:?}");
        }

        // 3) Detect the two control colors on the live frame.
        let pen = vision::detect(&live, ColorClass::Yellow);
        let toggle = vision::detect(&live, ColorClass::Blue);

        // 4) Blue flips the mode. The trail resets so the next stroke starts
        //    fresh; the canvas and shape parameters survive the switch.
        if toggle.is_some() {
            toggle_mode(&mut mode, &mut trail);
            debug!("mode -> {mode:?}");
            thread::sleep(MODE_TOGGLE_PAUSE);
        }

        // 5) Yellow acts according to the current mode. No detection means
        //    no action this frame (and a broken trail in freehand mode).
        match pen {
            Some(p) => {
                draw::draw_marker(&mut live, p);
                match mode {
                    Mode::FreehandDraw => {
                        trail.push(p);
                        trail.render(&mut [&mut canvas, &mut live]);
                    }
                    Mode::ShapeStamp => {
                        let sample = tracker.update(p);
                        params.apply(sample);
                        shapes::stamp(
                            &mut [&mut canvas, &mut live],
                            shape_kind,
                            p,
                            params.size,
                            params.rotation,
                            params.fill_color(),
                        );
                    }
                }
            }
            None => {
                if mode == Mode::FreehandDraw {
                    trail.break_path();
                }
            }
        }

        // 6) Composite: the canvas glows through the live video.
        draw::composite(&mut screen, &live, &canvas);

        // 7) HUD on top of the composite.
        draw_hud(&mut screen, mode, shape_kind, &params);

        // 8) Present to the window.
        drawer.present(&screen)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!("fps: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("session ended");
    Ok(())
}

/// Flip between freehand and shape mode. Only the trail resets: the canvas
/// keeps its pixels and the shape keeps its size and rotation.
fn toggle_mode(mode: &mut Mode, trail: &mut TrailHistory) {
    *mode = mode.toggled();
    trail.clear();
}

/// Status panel in the top-left corner plus a key-help line at the bottom.
fn draw_hud(screen: &mut FrameBuffer, mode: Mode, shape_kind: ShapeKind, params: &ShapeParams) {
    draw::fill_rect(screen, 10, 10, 350, 180, 0x00000000);
    draw::draw_rect_outline(screen, 10, 10, 350, 180, 2, 0x00FFFFFF);

    let mode_text = match mode {
        Mode::FreehandDraw => "MODE: FREEHAND",
        Mode::ShapeStamp => "MODE: SHAPES",
    };
    draw::draw_text_5x7(screen, 20, 40, mode_text, 0x00FFFF00);

    if mode == Mode::ShapeStamp {
        draw::draw_text_5x7(screen, 20, 70, &format!("SHAPE: {}", shape_kind.label()), 0x00FFFFFF);
        draw::draw_text_5x7(screen, 20, 100, &format!("SIZE: {}", params.size), 0x00FFFFFF);
        draw::draw_text_5x7(screen, 20, 130, &format!("ROT: {} DEG", params.rotation as i32), 0x00FFFFFF);
    }

    draw::draw_text_5x7(screen, 20, 160, "YELLOW: DRAW | BLUE: MODE", 0x00C8C8C8);

    let help_y = screen.height as i32 - 20;
    draw::draw_text_5x7(screen, 10, help_y, "KEYS: C CLEAR | 1-4 SHAPE | Q QUIT", 0x00FFFFFF);
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::types::Point;

    #[test]
    fn mode_toggle_resets_the_trail_and_flips_back() {
        let mut mode = Mode::FreehandDraw;
        let mut trail = TrailHistory::new();
        trail.push(Point::new(10, 10));
        trail.push(Point::new(20, 20));

        toggle_mode(&mut mode, &mut trail);
        assert_eq!(mode, Mode::ShapeStamp);
        assert!(trail.is_empty());

        toggle_mode(&mut mode, &mut trail);
        assert_eq!(mode, Mode::FreehandDraw);
    }
}
