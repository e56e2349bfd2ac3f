#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HIT_SLOP, SHAPE_STROKE_WIDTH};
use crate::doc::{Shape, ShapeId, ShapeList};
use crate::geometry::{Point, distance_to_segment, point_in_triangle, triangle_vertices};
use crate::surface::DragLayer;

/// Half the outline width plus slop: how far outside a shape still counts as a hit.
fn edge_tolerance() -> f64 {
    SHAPE_STROKE_WIDTH / 2.0 + HIT_SLOP
}

/// Whether `pt` falls on `shape` (fill or outline).
#[must_use]
pub fn contains(shape: &Shape, pt: Point) -> bool {
    let tol = edge_tolerance();
    match *shape {
        Shape::Square { x, y, size, .. } => {
            pt.x >= x - tol && pt.x <= x + size + tol && pt.y >= y - tol && pt.y <= y + size + tol
        }
        Shape::Circle { x, y, radius, .. } => (pt.x - x).hypot(pt.y - y) <= radius + tol,
        Shape::Triangle { x, y, size, .. } => {
            let anchor = Point::new(x, y);
            let [a, b, c] = triangle_vertices(size).map(|v| v.offset(anchor));
            point_in_triangle(pt, [a, b, c])
                || distance_to_segment(pt, a, b) <= tol
                || distance_to_segment(pt, b, c) <= tol
                || distance_to_segment(pt, c, a) <= tol
        }
        Shape::Line { x1, y1, x2, y2, .. } => distance_to_segment(pt, Point::new(x1, y1), Point::new(x2, y2)) <= tol,
    }
}

/// The topmost shape drawn under `pt`, taking drag offsets into account.
#[must_use]
pub fn hit_test(pt: Point, shapes: &ShapeList, drag: &DragLayer) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .find(|shape| contains(&drag.visual(shape), pt))
        .map(Shape::id)
}
