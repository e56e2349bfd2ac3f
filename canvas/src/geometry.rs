//! Plane geometry shared by placement, hit-testing, and rendering.
//!
//! Everything here is in canvas space: CSS pixels with the origin at the
//! top-left corner of the drawing surface and `y` growing downward.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point (or a displacement) in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[must_use]
    pub fn offset(self, by: Point) -> Self {
        Self { x: self.x + by.x, y: self.y + by.y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    /// Both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Height of an equilateral triangle with side `size`: `(√3 / 2) · size`.
#[must_use]
pub fn triangle_height(size: f64) -> f64 {
    (3.0_f64.sqrt() / 2.0) * size
}

/// Vertices of an upward-pointing equilateral triangle, relative to its anchor.
///
/// The apex sits half a height above the anchor and the base half a height
/// below it, so the anchor is the midpoint of the vertical extent.
#[must_use]
pub fn triangle_vertices(size: f64) -> [Point; 3] {
    let half = size / 2.0;
    let height = triangle_height(size);
    [
        Point::new(0.0, -height / 2.0),
        Point::new(-half, height / 2.0),
        Point::new(half, height / 2.0),
    ]
}

/// Whether `p` lies inside (or on the boundary of) triangle `abc`.
#[must_use]
pub fn point_in_triangle(p: Point, [a, b, c]: [Point; 3]) -> bool {
    let cross = |o: Point, u: Point, v: Point| (u.x - o.x) * (v.y - o.y) - (u.y - o.y) * (v.x - o.x);
    let d1 = cross(p, a, b);
    let d2 = cross(p, b, c);
    let d3 = cross(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Shortest distance from `p` to the segment `ab`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b.delta_from(a);
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    let ap = p.delta_from(a);
    if len_sq <= f64::EPSILON {
        return ap.x.hypot(ap.y);
    }
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + ab.x * t, a.y + ab.y * t);
    let d = p.delta_from(closest);
    d.x.hypot(d.y)
}
