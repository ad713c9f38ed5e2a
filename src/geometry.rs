// Vertex generators for the stampable shapes, plus the one rotation routine
// everything shares. All shapes are built in a local frame centered on the
// origin; `rotate_polygon` spins them and drops them at the stamp position.
//
// Angle convention: degrees, positive = clockwise on screen (y grows downward).

use crate::types::Point;

/// Rotate local-frame vertices by `angle_deg` and translate to `center`.
pub fn rotate_polygon(local: &[(f32, f32)], angle_deg: f32, center: Point) -> Vec<(f32, f32)> {
    let theta = angle_deg.to_radians();
    let (sin_a, cos_a) = theta.sin_cos();

    local
        .iter()
        .map(|&(x, y)| {
            (
                x * cos_a - y * sin_a + center.x as f32,
                x * sin_a + y * cos_a + center.y as f32,
            )
        })
        .collect()
}

/// Four corners of the ship rectangle: 1.5x wider than tall.
pub fn rectangle_vertices(size: i32) -> Vec<(f32, f32)> {
    let half_w = size as f32 * 1.5 / 2.0;
    let half_h = size as f32 / 2.0;
    vec![
        (-half_w, -half_h),
        (half_w, -half_h),
        (half_w, half_h),
        (-half_w, half_h),
    ]
}

/// Isoceles comet triangle: apex above the center, base below it.
pub fn triangle_vertices(size: i32) -> Vec<(f32, f32)> {
    let s = size as f32;
    vec![(0.0, -1.5 * s), (-s, 0.75 * s), (s, 0.75 * s)]
}

/// Five-point star: 10 vertices alternating outer and inner radius every 36
/// degrees, first point straight up (-90 degrees).
pub fn star_vertices(size: i32) -> Vec<(f32, f32)> {
    let outer = size as f32;
    let inner = size as f32 * 0.4;

    (0..10)
        .map(|i| {
            let angle = (i as f32 * 36.0 - 90.0).to_radians();
            let radius = if i % 2 == 0 { outer } else { inner };
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn vertex_counts_are_fixed() {
        assert_eq!(rectangle_vertices(40).len(), 4);
        assert_eq!(triangle_vertices(40).len(), 3);
        assert_eq!(star_vertices(40).len(), 10);
    }

    #[test]
    fn rectangle_is_one_and_a_half_times_wider_than_tall() {
        let v = rectangle_vertices(100);
        assert!(close(v[0], (-75.0, -50.0)));
        assert!(close(v[2], (75.0, 50.0)));
    }

    #[test]
    fn star_alternates_outer_and_inner_radii() {
        let v = star_vertices(50);
        for (i, &(x, y)) in v.iter().enumerate() {
            let r = (x * x + y * y).sqrt();
            let expected = if i % 2 == 0 { 50.0 } else { 20.0 };
            assert!((r - expected).abs() < EPS, "vertex {i}: radius {r}");
        }
    }

    #[test]
    fn star_first_point_is_straight_up() {
        let v = star_vertices(50);
        assert!(close(v[0], (0.0, -50.0)));
    }

    #[test]
    fn rotation_round_trips() {
        let center = Point::new(320, 240);
        let local = triangle_vertices(60);
        let spun = rotate_polygon(&local, 73.5, center);

        // Undo the rotation about the same center by rotating the re-localized
        // vertices back.
        let relocal: Vec<(f32, f32)> = spun
            .iter()
            .map(|&(x, y)| (x - center.x as f32, y - center.y as f32))
            .collect();
        let back = rotate_polygon(&relocal, -73.5, Point::new(0, 0));

        for (orig, restored) in local.iter().zip(back.iter()) {
            assert!(close(*orig, *restored));
        }
    }

    #[test]
    fn zero_rotation_is_pure_translation() {
        let v = rotate_polygon(&[(10.0, -5.0)], 0.0, Point::new(100, 200));
        assert!(close(v[0], (110.0, 195.0)));
    }

    #[test]
    fn quarter_turn_swaps_axes() {
        // Clockwise 90 degrees in image coordinates: (1,0) -> (0,1).
        let v = rotate_polygon(&[(1.0, 0.0)], 90.0, Point::new(0, 0));
        assert!(close(v[0], (0.0, 1.0)));
    }
}
