//! Regular polygon vertex generation

use roundel_core::{Point, Size};
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Ring of polygon vertices in index order
///
/// Adjacency is cyclic: vertex `i` neighbors `i - 1` and `i + 1` modulo the
/// ring length.
pub type VertexRing = SmallVec<[Point; 8]>;

/// A regular polygon inscribed in a circle
#[derive(Clone, Copy, Debug)]
pub struct RegularPolygon {
    /// Number of sides; fewer than three yields no vertices
    pub sides: u32,
    /// Center of the circumscribed circle
    pub center: Point,
    /// Radius of the circle all vertices lie on
    pub circumradius: f64,
}

impl RegularPolygon {
    pub const fn new(sides: u32, center: Point, circumradius: f64) -> Self {
        Self {
            sides,
            center,
            circumradius,
        }
    }

    /// Polygon fitted to a drawing area: centered in it and inscribed in
    /// the largest circle that fits
    pub fn fitted(bounds: Size, sides: u32) -> Self {
        Self::new(
            sides,
            Point::new(bounds.width / 2.0, bounds.height / 2.0),
            bounds.width.min(bounds.height) / 2.0,
        )
    }

    /// Vertices in counter-clockwise order
    ///
    /// Vertex 0 lies on the positive-x axis from the center; orientation is
    /// deterministic and rotation is never baked in here. Fewer than three
    /// sides yields an empty ring.
    pub fn vertices(&self) -> VertexRing {
        let mut points = VertexRing::new();
        if self.sides < 3 {
            return points;
        }

        let step = TAU / self.sides as f64;
        for i in 0..self.sides {
            let angle = step * i as f64;
            points.push(Point::new(
                self.center.x + self.circumradius * angle.cos(),
                self.center.y + self.circumradius * angle.sin(),
            ));
        }
        points
    }
}
