//! Path transforms about the outline's own center
//!
//! Both operators pivot about the center of the path's axis-aligned
//! bounding box rather than the coordinate origin: translate the pivot to
//! the origin, apply the linear part, translate back, all composed into a
//! single affine application. Rotate-then-scale is the supported call
//! order; the operators do not commute.

use roundel_core::{Affine2D, Path};

/// Rotates `path` by `angle_degrees` about its bounding-box center
pub fn rotate(path: &mut Path, angle_degrees: f64) {
    let center = path.bounds().center();
    let to_origin = Affine2D::translation(-center.x, -center.y);
    let rotation = Affine2D::rotation(angle_degrees.to_radians());
    let from_origin = Affine2D::translation(center.x, center.y);

    path.apply(&from_origin.then(&rotation).then(&to_origin));
}

/// Scales `path` by `(scale_x, scale_y)` about its bounding-box center
pub fn scale(path: &mut Path, scale_x: f64, scale_y: f64) {
    let center = path.bounds().center();
    let to_origin = Affine2D::translation(-center.x, -center.y);
    let scaling = Affine2D::scale(scale_x, scale_y);
    let from_origin = Affine2D::translation(center.x, center.y);

    path.apply(&from_origin.then(&scaling).then(&to_origin));
}
