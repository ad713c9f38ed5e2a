// Stamps one procedural shape onto a set of target surfaces. Taking the
// surfaces as a slice is deliberate: the persistent canvas and the live view
// always receive the exact same geometry, so they cannot drift apart.

use crate::draw::{draw_polygon_outline, draw_ring, fill_disc, fill_polygon};
use crate::geometry::{rectangle_vertices, rotate_polygon, star_vertices, triangle_vertices};
use crate::types::{pack_rgb, FrameBuffer, Point, ShapeKind};

const OUTLINE_COLOR: u32 = 0x00FF_FFFF;
const OUTLINE_THICKNESS: i32 = 2;

/// Stamp `kind` at `center` with the current size, rotation, and fill color
/// on every surface in `surfaces`.
pub fn stamp(
    surfaces: &mut [&mut FrameBuffer],
    kind: ShapeKind,
    center: Point,
    size: i32,
    rotation: f32,
    color: u32,
) {
    match kind {
        ShapeKind::Circle => {
            // The planet ignores rotation: a filled body, a white outer ring
            // slightly beyond it, and a faint inner ring for texture.
            for surface in surfaces.iter_mut() {
                fill_disc(surface, center.x, center.y, size, color);
                draw_ring(surface, center.x, center.y, size + 5, OUTLINE_THICKNESS, OUTLINE_COLOR);
                draw_ring(surface, center.x, center.y, (size as f32 * 0.7) as i32, 1, pack_rgb(100, 100, 100));
            }
        }
        ShapeKind::Rectangle => stamp_polygon(surfaces, &rectangle_vertices(size), rotation, center, color),
        ShapeKind::Triangle => stamp_polygon(surfaces, &triangle_vertices(size), rotation, center, color),
        ShapeKind::Star => stamp_polygon(surfaces, &star_vertices(size), rotation, center, color),
    }
}

fn stamp_polygon(
    surfaces: &mut [&mut FrameBuffer],
    local: &[(f32, f32)],
    rotation: f32,
    center: Point,
    color: u32,
) {
    let verts: Vec<(i32, i32)> = rotate_polygon(local, rotation, center)
        .into_iter()
        .map(|(x, y)| (x.round() as i32, y.round() as i32))
        .collect();

    for surface in surfaces.iter_mut() {
        fill_polygon(surface, &verts, color);
        draw_polygon_outline(surface, &verts, OUTLINE_THICKNESS, OUTLINE_COLOR);
    }
}
