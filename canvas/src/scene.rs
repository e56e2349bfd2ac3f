//! Scene description: the drawing primitive each shape renders as.
//!
//! The scene is what the controller hands to a rendering surface. It is plain
//! data so it can be asserted on in tests and painted by any backend; the
//! Canvas2D backend lives in [`crate::render`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{SHAPE_FILL, SHAPE_STROKE, SHAPE_STROKE_WIDTH};
use crate::doc::{Shape, ShapeId, ShapeList};
use crate::geometry::{Point, triangle_vertices};
use crate::surface::DragLayer;

/// How the ends of an open path are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

impl LineCap {
    /// The Canvas2D `lineCap` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// Paint applied to a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Fill color, or `None` for an unfilled path.
    pub fill: Option<&'static str>,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub line_cap: LineCap,
}

impl Style {
    /// White fill with a black outline.
    #[must_use]
    pub fn filled() -> Self {
        Self { fill: Some(SHAPE_FILL), stroke: SHAPE_STROKE, stroke_width: SHAPE_STROKE_WIDTH, line_cap: LineCap::Butt }
    }

    /// Black outline only, with rounded ends.
    #[must_use]
    pub fn stroked() -> Self {
        Self { fill: None, stroke: SHAPE_STROKE, stroke_width: SHAPE_STROKE_WIDTH, line_cap: LineCap::Round }
    }
}

/// Geometry of a drawing primitive, in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Axis-aligned rectangle from its top-left corner.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Full disc around a center.
    Circle { x: f64, y: f64, radius: f64 },
    /// Path with `points` relative to `origin`; closed polygons join the last point to the first.
    Path { origin: Point, points: Vec<Point>, closed: bool },
}

/// One drawable item of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// The shape this primitive was produced from.
    pub id: ShapeId,
    pub geometry: Geometry,
    pub style: Style,
    /// Whether the surface lets the user drag it.
    pub draggable: bool,
}

/// The primitive `shape` renders as.
#[must_use]
pub fn primitive_for(shape: &Shape) -> Primitive {
    let (geometry, style) = match *shape {
        Shape::Square { x, y, size, .. } => (Geometry::Rect { x, y, width: size, height: size }, Style::filled()),
        Shape::Circle { x, y, radius, .. } => (Geometry::Circle { x, y, radius }, Style::filled()),
        Shape::Triangle { x, y, size, .. } => (
            Geometry::Path { origin: Point::new(x, y), points: triangle_vertices(size).to_vec(), closed: true },
            Style::filled(),
        ),
        Shape::Line { x1, y1, x2, y2, .. } => (
            Geometry::Path {
                origin: Point::default(),
                points: vec![Point::new(x1, y1), Point::new(x2, y2)],
                closed: false,
            },
            Style::stroked(),
        ),
    };
    Primitive { id: shape.id(), geometry, style, draggable: true }
}

/// Build the scene for `shapes`, bottom-first, at their on-screen positions.
#[must_use]
pub fn build(shapes: &ShapeList, drag: &DragLayer) -> Vec<Primitive> {
    shapes.iter().map(|shape| primitive_for(&drag.visual(shape))).collect()
}
