//! Rounded Regular Polygon Outlines
//!
//! Builds the closed outline of a regular N-sided polygon whose corners
//! are replaced by circular-arc fillets, then rotates and non-uniformly
//! scales it about its own bounding-box center. The result is a plain
//! command-list [`Path`] for whatever renderer fills it.
//!
//! # Pipeline
//!
//! - **Vertices**: [`RegularPolygon`] places N points on a circle
//! - **Rounding**: [`rounded_polygon`] replaces each corner with a fillet
//!   tangent to both adjacent edges
//! - **Transforms**: [`rotate`] and [`scale`] pivot about the outline's
//!   bounding-box center
//! - **Configuration**: [`RoundedPolygon`] bundles the editable parameters
//!   and runs the whole pipeline per drawing area
//!
//! # Example
//!
//! ```rust
//! use roundel_core::Size;
//! use roundel_polygon::RoundedPolygon;
//!
//! let shape = RoundedPolygon::new(6).with_corner_radius(4.0).with_rotation(15.0);
//! let path = shape.path(Size::new(60.0, 60.0));
//!
//! assert!(path.is_closed());
//! ```

pub mod polygon;
pub mod rounded;
pub mod shape;
pub mod transform;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from roundel_core (unified type system)
// ─────────────────────────────────────────────────────────────────────────────

pub use roundel_core::{
    // Transforms
    Affine2D,
    // Colors
    Color,
    // Paths
    FillRule,
    Path,
    PathCommand,
    // Geometry
    Point,
    Rect,
    Size,
    Vec2,
};

// ─────────────────────────────────────────────────────────────────────────────
// roundel_polygon specific exports
// ─────────────────────────────────────────────────────────────────────────────

pub use polygon::{RegularPolygon, VertexRing};
pub use rounded::rounded_polygon;
pub use shape::RoundedPolygon;
pub use transform::{rotate, scale};

/// Builds the rounded outline of a regular polygon fitted to a drawing area
///
/// The polygon is centered at `(width / 2, height / 2)` and inscribed in a
/// circle of radius `min(width, height) / 2`; its corners are rounded with
/// `corner_radius`. Fewer than three sides produces an empty path.
pub fn rounded_regular_polygon(bounds: Size, sides: u32, corner_radius: f64) -> Path {
    let vertices = RegularPolygon::fitted(bounds, sides).vertices();
    rounded_polygon(&vertices, corner_radius)
}
