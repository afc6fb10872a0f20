//! Geometry kernel: points, axis-aligned bounds, and oriented rectangles.
//!
//! Everything here is pure and total. Rotations pivot around a rectangle's
//! own top-left corner, matching how the rendering surface rotates nodes, and
//! angles are degrees clockwise (y grows downward).

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either stage or group-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by `delta`.
    #[must_use]
    pub fn offset(self, delta: Point) -> Self {
        Self { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// Axis-aligned box with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Normalize two dragged corners into a box with non-negative extent.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The same box shifted by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Point) -> Self {
        Self { x: self.x + delta.x, y: self.y + delta.y, ..*self }
    }
}

/// A rectangle with position, size, and a clockwise rotation in degrees
/// around its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl OrientedRect {
    /// The four corners in top-left, top-right, bottom-right, bottom-left order.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let pivot = Point::new(self.x, self.y);
        let rad = degrees_to_radians(self.rotation);
        [
            Point::new(0.0, 0.0),
            Point::new(self.width, 0.0),
            Point::new(self.width, self.height),
            Point::new(0.0, self.height),
        ]
        .map(|offset| rotated_corner(pivot, offset, rad))
    }
}

/// Convert degrees to radians. No wrap-around is applied.
#[must_use]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg.to_radians()
}

/// Rotate `offset` (expressed in the unrotated frame) by `angle` radians
/// around `pivot` and return the resulting absolute point.
///
/// A zero offset yields `pivot` unchanged whatever the angle.
#[must_use]
pub fn rotated_corner(pivot: Point, offset: Point, angle: f64) -> Point {
    if offset.x == 0.0 && offset.y == 0.0 {
        return pivot;
    }
    let (sin, cos) = angle.sin_cos();
    Point {
        x: pivot.x + offset.x * cos - offset.y * sin,
        y: pivot.y + offset.x * sin + offset.y * cos,
    }
}

/// Axis-aligned envelope of a rotated rectangle.
///
/// This is the full rotated extent, so hit-testing against it is
/// conservative for rotated shapes.
#[must_use]
pub fn axis_aligned_bounds(rect: &OrientedRect) -> Bounds {
    let corners = rect.corners();
    let mut min = corners[0];
    let mut max = corners[0];
    for c in &corners[1..] {
        min.x = min.x.min(c.x);
        min.y = min.y.min(c.y);
        max.x = max.x.max(c.x);
        max.y = max.y.max(c.y);
    }
    Bounds { x: min.x, y: min.y, width: max.x - min.x, height: max.y - min.y }
}

/// Overlap test with strict inequalities: boxes that only share an edge do
/// not intersect.
#[must_use]
pub fn boxes_intersect(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
