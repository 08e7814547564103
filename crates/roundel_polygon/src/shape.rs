//! Shape configuration for rounded regular polygons
//!
//! `RoundedPolygon` bundles the parameters a consumer edits — side count,
//! corner radius, rotation, scale, fill color — and produces the finished
//! outline for a given drawing area. The struct is plain data; rebuild the
//! outline whenever a parameter changes.

use crate::{rounded_regular_polygon, transform};
use roundel_core::{Color, Path, Size, Vec2};
use tracing::trace;

/// Configuration for a rounded regular polygon shape
#[derive(Clone, Copy, Debug)]
pub struct RoundedPolygon {
    /// Number of polygon sides
    pub sides: u32,
    /// Fillet radius applied at every corner
    pub corner_radius: f64,
    /// Rotation in degrees about the outline's center
    pub rotation: f64,
    /// Anisotropic scale about the outline's center
    pub scale: Vec2,
    /// Fill color for the consumer
    pub color: Color,
}

impl Default for RoundedPolygon {
    fn default() -> Self {
        Self {
            sides: 6,
            corner_radius: 0.0,
            rotation: 0.0,
            scale: Vec2::ONE,
            color: Color::RED,
        }
    }
}

impl RoundedPolygon {
    /// Create a shape with the given side count
    pub fn new(sides: u32) -> Self {
        Self {
            sides,
            ..Default::default()
        }
    }

    /// Set the corner radius
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the scale factors
    pub fn with_scale(mut self, x: f64, y: f64) -> Self {
        self.scale = Vec2::new(x, y);
        self
    }

    /// Set the fill color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builds the finished outline for a drawing area
    ///
    /// The rounded polygon is inscribed in `bounds`, rotated, scaled, and
    /// closed if the builder has not already closed it. Fewer than three
    /// sides produces an empty path.
    pub fn path(&self, bounds: Size) -> Path {
        trace!(
            sides = self.sides,
            corner_radius = self.corner_radius,
            rotation = self.rotation,
            "building shape outline"
        );

        let mut path = rounded_regular_polygon(bounds, self.sides, self.corner_radius);
        transform::rotate(&mut path, self.rotation);
        transform::scale(&mut path, self.scale.x, self.scale.y);
        if !path.is_empty() && !path.is_closed() {
            path = path.close();
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundel_core::PathCommand;

    #[test]
    fn test_defaults() {
        let shape = RoundedPolygon::default();
        assert_eq!(shape.sides, 6);
        assert_eq!(shape.corner_radius, 0.0);
        assert_eq!(shape.rotation, 0.0);
        assert_eq!(shape.scale, Vec2::ONE);
        assert_eq!(shape.color, Color::RED);
    }

    #[test]
    fn test_builder_methods() {
        let shape = RoundedPolygon::new(8)
            .with_corner_radius(4.0)
            .with_rotation(22.5)
            .with_scale(1.5, 0.5)
            .with_color(Color::BLUE);

        assert_eq!(shape.sides, 8);
        assert_eq!(shape.corner_radius, 4.0);
        assert_eq!(shape.rotation, 22.5);
        assert_eq!(shape.scale, Vec2::new(1.5, 0.5));
        assert_eq!(shape.color, Color::BLUE);
    }

    #[test]
    fn test_path_is_closed_exactly_once() {
        let shape = RoundedPolygon::new(5).with_corner_radius(3.0).with_rotation(30.0);
        let path = shape.path(Size::new(60.0, 60.0));

        assert!(path.is_closed());
        let closes = path
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::Close))
            .count();
        assert_eq!(closes, 1);
        assert_eq!(path.len(), 1 + 5 * 2 + 1);
    }

    #[test]
    fn test_degenerate_side_count_yields_empty_path() {
        let shape = RoundedPolygon::new(2);
        assert!(shape.path(Size::new(60.0, 60.0)).is_empty());
    }
}
