//! Roundel Core Geometry
//!
//! This crate provides the foundation types for the Roundel shape library:
//!
//! - **Geometry**: `Point`, `Vec2`, `Size`, `Rect`, `Affine2D`
//! - **Paths**: ordered command-list outlines (`Path`, `PathCommand`) with
//!   arc-aware bounds and in-place affine application
//! - **Color**: RGBA fill colors carried alongside outlines for consumers
//!
//! All outline geometry is `f64`. A path is plain data — an ordered list of
//! move/line/arc/close commands plus a fill rule — and carries no rendering
//! backend of its own; whatever renderer consumes it decides how to fill it.
//!
//! # Example
//!
//! ```rust
//! use roundel_core::Path;
//!
//! let path = Path::new()
//!     .move_to(0.0, 0.0)
//!     .line_to(10.0, 0.0)
//!     .line_to(10.0, 10.0)
//!     .close();
//!
//! assert_eq!(path.len(), 4);
//! assert!(path.is_closed());
//! ```

pub mod color;
pub mod geometry;
pub mod path;

pub use color::Color;
pub use geometry::{Affine2D, Point, Rect, Size, Vec2};
pub use path::{FillRule, Path, PathCommand};
