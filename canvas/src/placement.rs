//! Placement engine: turns (tool, click point) into a new shape list.
//!
//! Pure functions only. Nothing here logs, touches the DOM, or mutates its
//! inputs; the controller in [`crate::engine`] owns the resulting state.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use uuid::Uuid;

use crate::config::Defaults;
use crate::doc::{Shape, ShapeId, ShapeKind, ShapeList};
use crate::geometry::Point;
use crate::input::Tool;

/// Build a shape of `kind` for a click at `point`.
#[must_use]
pub fn shape_for(kind: ShapeKind, point: Point, defaults: &Defaults, id: ShapeId) -> Shape {
    let Point { x, y } = point;
    match kind {
        ShapeKind::Square => {
            let size = defaults.square_size;
            Shape::Square { id, x: x - size / 2.0, y: y - size / 2.0, size }
        }
        ShapeKind::Circle => Shape::Circle { id, x, y, radius: defaults.circle_radius },
        ShapeKind::Triangle => Shape::Triangle { id, x, y, size: defaults.tri_size },
        ShapeKind::Line => {
            let half = defaults.line_length / 2.0;
            Shape::Line { id, x1: x - half, y1: y, x2: x + half, y2: y }
        }
    }
}

/// Place a shape for `tool` at `point` with a fresh random id.
///
/// Returns `existing` itself (same allocation) when the tool places nothing.
#[must_use]
pub fn place(tool: Tool, point: Point, defaults: &Defaults, existing: &ShapeList) -> ShapeList {
    place_with(tool, point, defaults, existing, Uuid::new_v4)
}

/// Like [`place`], drawing the new id from `next_id`.
///
/// `next_id` is only called when a shape is actually created.
#[must_use]
pub fn place_with<F>(tool: Tool, point: Point, defaults: &Defaults, existing: &ShapeList, next_id: F) -> ShapeList
where
    F: FnOnce() -> ShapeId,
{
    match tool.shape_kind() {
        Some(kind) => existing.appended(shape_for(kind, point, defaults, next_id())),
        None => existing.clone(),
    }
}
