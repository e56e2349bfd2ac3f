//! Visual-only drag state of the rendering surface.
//!
//! Dragging moves a shape on screen without committing anything to the
//! shape list. The surface remembers how far each dragged shape has been
//! moved and applies that offset when hit-testing and drawing.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::HashMap;

use crate::doc::{Shape, ShapeId};
use crate::geometry::Point;

/// Accumulated on-screen offsets for shapes that have been dragged.
#[derive(Debug, Clone, Default)]
pub struct DragLayer {
    offsets: HashMap<ShapeId, Point>,
}

impl DragLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset of `id`; the origin if it was never dragged.
    #[must_use]
    pub fn offset(&self, id: ShapeId) -> Point {
        self.offsets.get(&id).copied().unwrap_or_default()
    }

    /// Move `id` by `delta` on screen.
    pub fn nudge(&mut self, id: ShapeId, delta: Point) {
        let entry = self.offsets.entry(id).or_default();
        *entry = entry.offset(delta);
    }

    /// Where `shape` is currently drawn.
    #[must_use]
    pub fn visual(&self, shape: &Shape) -> Shape {
        match self.offsets.get(&shape.id()) {
            Some(delta) => shape.translated(*delta),
            None => shape.clone(),
        }
    }

    /// Number of shapes with a recorded offset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
