//! Rounded polygon outline construction
//!
//! Replaces every corner of a point ring with a circular fillet tangent to
//! both adjacent edges, emitting the outline as alternating straight edges
//! and arcs. Each edge is shortened by the fillet's tangent length at both
//! ends; the arcs bridge the gaps.

use roundel_core::{FillRule, Path, Point, Vec2};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use tracing::{debug, trace};

/// Geometry of one rounded corner
struct Corner {
    /// Incoming tangent point, on the edge from the previous vertex
    start: Point,
    /// Outgoing tangent point, on the edge to the next vertex
    end: Point,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

/// Fillet geometry at `curr`, whose cyclic neighbors are `prev` and `next`
fn corner(prev: Point, curr: Point, next: Point, corner_radius: f64) -> Corner {
    let c2p = Vec2::new(prev.x - curr.x, prev.y - curr.y).normalize();
    let c2n = Vec2::new(next.x - curr.x, next.y - curr.y).normalize();

    let omega = c2n.dot(c2p).acos();
    let theta = FRAC_PI_2 - omega / 2.0;

    // Fillet radius rescaled by the corner's opening angle; a square's
    // corners keep exactly the requested radius.
    let radius = corner_radius / theta * FRAC_PI_4;
    let tangent = radius * theta.tan();

    let start = Point::new(curr.x + tangent * c2p.x, curr.y + tangent * c2p.y);
    let end = Point::new(curr.x + tangent * c2n.x, curr.y + tangent * c2n.y);

    // Perpendicular from the incoming tangent point by the fillet radius.
    let center = Point::new(start.x + c2p.y * radius, start.y - c2p.x * radius);

    let start_angle = c2p.x.atan2(-c2p.y);
    let end_angle = start_angle + 2.0 * theta;

    Corner {
        start,
        end,
        center,
        radius,
        start_angle,
        end_angle,
    }
}

/// Corner radius normalized to `[0, half the first edge length]`
///
/// The bound is taken from the first edge only, never the minimum over all
/// edges; rings produced by [`crate::RegularPolygon`] have equal edges, so
/// the bound holds at every corner there.
fn clamp_corner_radius(points: &[Point], requested: f64) -> f64 {
    if requested < 0.0 {
        debug!(requested, "negative corner radius clamped to zero");
        return 0.0;
    }

    let max_radius = points[0].distance_to(points[1 % points.len()]) / 2.0;
    if requested > max_radius {
        debug!(
            requested,
            max_radius, "corner radius clamped to half the first edge length"
        );
        return max_radius;
    }
    requested
}

/// Builds the closed rounded outline of a point ring
///
/// An empty ring produces an empty path. The output is one contour of the
/// form `MoveTo + len * (LineTo, ArcTo) + Close`, marked for even-odd
/// filling.
pub fn rounded_polygon(points: &[Point], corner_radius: f64) -> Path {
    if points.is_empty() {
        return Path::new();
    }

    let len = points.len();
    let radius = clamp_corner_radius(points, corner_radius);
    trace!(points = len, radius, "building rounded outline");

    // Seed the contour at the first corner's outgoing tangent point; the
    // cyclic pass below revisits that corner last and completes it.
    let seed = corner(points[len - 1], points[0], points[1 % len], radius);
    let mut path = Path::new().move_to(seed.end.x, seed.end.y);

    for i in 0..len {
        let c = corner(
            points[i],
            points[(i + 1) % len],
            points[(i + 2) % len],
            radius,
        );
        path = path
            .line_to(c.start.x, c.start.y)
            .arc_to(c.center, c.radius, c.start_angle, c.end_angle, true);
    }

    path.close().with_fill_rule(FillRule::EvenOdd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::RegularPolygon;
    use roundel_core::PathCommand;

    const EPSILON: f64 = 1e-9;

    fn square_vertices(circumradius: f64) -> Vec<Point> {
        RegularPolygon::new(4, Point::ZERO, circumradius)
            .vertices()
            .to_vec()
    }

    /// Arc radii in emission order
    fn arc_radii(path: &Path) -> Vec<f64> {
        path.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::ArcTo { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }

    /// Straight-segment lengths in emission order, tracking the current
    /// point through moves and arc sweeps
    fn line_lengths(path: &Path) -> Vec<f64> {
        let mut lengths = Vec::new();
        let mut current = Point::ZERO;
        for cmd in path.commands() {
            match cmd {
                PathCommand::MoveTo(p) => current = *p,
                PathCommand::LineTo(p) => {
                    lengths.push(current.distance_to(*p));
                    current = *p;
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    end_angle,
                    ..
                } => {
                    current = Point::new(
                        center.x + radius * end_angle.cos(),
                        center.y + radius * end_angle.sin(),
                    );
                }
                PathCommand::Close => {}
            }
        }
        lengths
    }

    #[test]
    fn test_empty_ring_empty_path() {
        assert!(rounded_polygon(&[], 5.0).is_empty());
    }

    #[test]
    fn test_command_structure() {
        let vertices = RegularPolygon::new(6, Point::ZERO, 30.0).vertices();
        let path = rounded_polygon(&vertices, 4.0);

        assert_eq!(path.len(), 1 + 6 * 2 + 1);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        for i in 0..6 {
            assert!(matches!(
                path.commands()[1 + 2 * i],
                PathCommand::LineTo(_)
            ));
            assert!(matches!(
                path.commands()[2 + 2 * i],
                PathCommand::ArcTo { clockwise: true, .. }
            ));
        }
        assert!(path.is_closed());
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
    }

    #[test]
    fn test_zero_radius_reduces_to_unrounded_polygon() {
        let vertices = RegularPolygon::new(5, Point::ZERO, 10.0).vertices();
        let path = rounded_polygon(&vertices, 0.0);

        for r in arc_radii(&path) {
            assert!(r.abs() < EPSILON);
        }

        // With no fillet, each straight segment ends at the vertex itself.
        let line_targets: Vec<Point> = path
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        for (i, target) in line_targets.iter().enumerate() {
            let vertex = vertices[(i + 1) % vertices.len()];
            assert!(target.distance_to(vertex) < EPSILON);
        }
    }

    #[test]
    fn test_radius_clamped_to_half_first_edge() {
        let vertices = square_vertices(10.0);
        let half_edge = vertices[0].distance_to(vertices[1]) / 2.0;
        let path = rounded_polygon(&vertices, 1000.0);

        // Square corners keep the requested (here: clamped) radius.
        for r in arc_radii(&path) {
            assert!((r - half_edge).abs() < EPSILON);
        }
    }

    #[test]
    fn test_negative_radius_clamps_to_zero() {
        let path = rounded_polygon(&square_vertices(10.0), -3.0);
        for r in arc_radii(&path) {
            assert!(r.abs() < EPSILON);
        }
    }

    #[test]
    fn test_clamp_uses_first_edge_not_minimum() {
        // First edge is long (10), the others short; a radius above half
        // the short edges but below half the first edge passes unclamped.
        let ring = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let path = rounded_polygon(&ring, 4.0);
        for r in arc_radii(&path) {
            assert!((r - 4.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_square_scenario() {
        // sides = 4, circumradius = 10, center = (0, 0), corner radius = 2
        let vertices = square_vertices(10.0);
        let path = rounded_polygon(&vertices, 2.0);

        let radii = arc_radii(&path);
        assert_eq!(radii.len(), 4);
        for r in &radii {
            assert!((r - 2.0).abs() < EPSILON);
        }

        let lengths = line_lengths(&path);
        assert_eq!(lengths.len(), 4);
        let edge = 200.0_f64.sqrt();
        for len in &lengths {
            assert!((len - (edge - 4.0)).abs() < EPSILON);
        }

        // Rounding pulls the outline strictly inside the unrounded square.
        let bounds = path.bounds();
        let expected = 24.0 - 4.0 * 2.0_f64.sqrt();
        assert!(bounds.width() < 20.0);
        assert!(bounds.height() < 20.0);
        assert!((bounds.width() - expected).abs() < EPSILON);
        assert!((bounds.height() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_last_arc_returns_to_seed_point() {
        let vertices = RegularPolygon::new(7, Point::new(3.0, 5.0), 20.0).vertices();
        let path = rounded_polygon(&vertices, 3.0);

        let seed = match path.commands()[0] {
            PathCommand::MoveTo(p) => p,
            _ => panic!("expected MoveTo"),
        };
        let last_arc_end = match path.commands()[path.len() - 2] {
            PathCommand::ArcTo {
                center,
                radius,
                end_angle,
                ..
            } => Point::new(
                center.x + radius * end_angle.cos(),
                center.y + radius * end_angle.sin(),
            ),
            _ => panic!("expected ArcTo before Close"),
        };
        assert!(seed.distance_to(last_arc_end) < EPSILON);
    }

    #[test]
    fn test_hexagon_adjusted_radius() {
        // A hexagon's corners open at 120 degrees, so the effective fillet
        // radius is 1.5x the requested one.
        let vertices = RegularPolygon::new(6, Point::ZERO, 30.0).vertices();
        let path = rounded_polygon(&vertices, 4.0);
        for r in arc_radii(&path) {
            assert!((r - 6.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_two_point_ring_degenerates_without_panic() {
        let path = rounded_polygon(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], 1.0);
        assert_eq!(path.len(), 1 + 2 * 2 + 1);
    }
}
