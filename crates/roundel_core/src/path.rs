//! Path building and representation
//!
//! A path is an ordered list of commands forming one closed contour: move,
//! line, circular arc, close. Commands are plain data interpreted by the
//! consuming renderer. Arcs are parameterized by center, radius and a
//! start/end angle pair; the point at angle `phi` is
//! `center + radius * (cos(phi), sin(phi))`.

use crate::geometry::{Affine2D, Point, Rect};
use std::f64::consts::TAU;

/// Fill rule for a path interior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// Non-zero winding rule
    #[default]
    NonZero,
    /// Even-odd rule
    EvenOdd,
}

/// Path command for building vector outlines
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Circular arc around a center, swept from `start_angle` to `end_angle`
    ArcTo {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
    /// Close the contour
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
    fill_rule: FillRule,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            fill_rule: FillRule::default(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self {
            commands,
            fill_rule: FillRule::default(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Circular arc around `center`
    ///
    /// - `radius`: arc radius
    /// - `start_angle`, `end_angle`: sweep bounds in radians
    /// - `clockwise`: traversal direction in the consumer's convention
    pub fn arc_to(
        mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Self {
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        self
    }

    /// Close the contour
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Set the fill rule
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Get the fill rule
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path ends with a close command
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Calculate the axis-aligned bounding rectangle of this path
    ///
    /// Arc segments contribute their endpoints plus every axis-extreme
    /// point whose angle falls inside the sweep, so a fillet bulge is
    /// inside the box even when its endpoints are not extreme.
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        let mut include = |p: Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(*p),
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => {
                    for p in arc_extremes(*center, *radius, *start_angle, *end_angle) {
                        if let Some(p) = p {
                            include(p);
                        }
                    }
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }

    /// Apply an affine transform to the path geometry in place
    ///
    /// Points and arc centers map through the transform. Arcs stay
    /// circular: their angles shift by the transform's rotation component
    /// and their radius scales by the mean axis scale, which is exact for
    /// rigid and uniform-scale transforms and an approximation for
    /// anisotropic ones. Sweep direction is never changed.
    pub fn apply(&mut self, transform: &Affine2D) {
        let [a, b, c, d, _, _] = transform.elements;
        let angle_shift = b.atan2(a);
        let radius_scale = ((a * a + b * b).sqrt() + (c * c + d * d).sqrt()) / 2.0;

        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    *p = transform.transform_point(*p);
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => {
                    *center = transform.transform_point(*center);
                    *radius *= radius_scale;
                    *start_angle += angle_shift;
                    *end_angle += angle_shift;
                }
                PathCommand::Close => {}
            }
        }
    }
}

/// Candidate extreme points of an arc: both endpoints plus the four axis
/// directions, each present when its angle lies inside the sweep.
fn arc_extremes(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> [Option<Point>; 6] {
    const AXIS_DIRS: [(f64, f64); 4] = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

    let at = |angle: f64| Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());

    let lo = start_angle.min(end_angle);
    let hi = start_angle.max(end_angle);
    let sweep = hi - lo;

    let mut extremes = [None; 6];
    extremes[0] = Some(at(start_angle));
    extremes[1] = Some(at(end_angle));

    for (i, (dx, dy)) in AXIS_DIRS.iter().enumerate() {
        let axis_angle = (*dy).atan2(*dx);
        let offset = (axis_angle - lo).rem_euclid(TAU);
        if sweep >= TAU || offset <= sweep {
            extremes[2 + i] = Some(Point::new(center.x + radius * dx, center.y + radius * dy));
        }
    }

    extremes
}
