//! Document model: shapes and the ordered, immutable shape list.
//!
//! A [`Shape`] is a value record: once placed its variant and id never
//! change. A [`ShapeList`] is a shared, append-only sequence whose insertion
//! order is the draw order. Appending produces a new list and leaves the
//! original untouched, so any holder of an older list keeps a consistent view.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point;

/// Unique identifier for a placed shape.
pub type ShapeId = Uuid;

/// The variant tag of a shape, without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
    Line,
}

/// A placed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned square; `x`/`y` is the top-left corner.
    Square { id: ShapeId, x: f64, y: f64, size: f64 },
    /// Circle centered on `x`/`y`.
    Circle { id: ShapeId, x: f64, y: f64, radius: f64 },
    /// Upward equilateral triangle anchored on `x`/`y`, side `size`.
    Triangle { id: ShapeId, x: f64, y: f64, size: f64 },
    /// Straight segment between two endpoints.
    Line { id: ShapeId, x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Shape {
    #[must_use]
    pub fn id(&self) -> ShapeId {
        match *self {
            Self::Square { id, .. } | Self::Circle { id, .. } | Self::Triangle { id, .. } | Self::Line { id, .. } => id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Square { .. } => ShapeKind::Square,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Triangle { .. } => ShapeKind::Triangle,
            Self::Line { .. } => ShapeKind::Line,
        }
    }

    /// A copy of this shape moved by `delta`. Id and variant are preserved.
    #[must_use]
    pub fn translated(&self, delta: Point) -> Self {
        let (dx, dy) = (delta.x, delta.y);
        match *self {
            Self::Square { id, x, y, size } => Self::Square { id, x: x + dx, y: y + dy, size },
            Self::Circle { id, x, y, radius } => Self::Circle { id, x: x + dx, y: y + dy, radius },
            Self::Triangle { id, x, y, size } => Self::Triangle { id, x: x + dx, y: y + dy, size },
            Self::Line { id, x1, y1, x2, y2 } => Self::Line { id, x1: x1 + dx, y1: y1 + dy, x2: x2 + dx, y2: y2 + dy },
        }
    }
}

/// Ordered, append-only collection of shapes. Index order is z-order.
///
/// Cloning is cheap: clones share the same backing allocation.
#[derive(Debug, Clone, Default)]
pub struct ShapeList {
    shapes: Arc<[Shape]>,
}

impl ShapeList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new list equal to this one with `shape` appended on top.
    #[must_use]
    pub fn appended(&self, shape: Shape) -> Self {
        let shapes: Arc<[Shape]> = self.shapes.iter().cloned().chain(std::iter::once(shape)).collect();
        Self { shapes }
    }

    /// Whether both handles refer to the very same list value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shapes, &other.shapes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes bottom-first.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn find(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Ids in draw order.
    #[must_use]
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(Shape::id).collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

impl<'a> IntoIterator for &'a ShapeList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for ShapeList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.shapes == other.shapes
    }
}
