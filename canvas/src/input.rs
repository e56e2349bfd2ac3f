//! Input model: tools, mouse buttons, pointer events, and the gesture state.
//!
//! `Tool` captures what a background click should create. `PointerDown`
//! carries what the host surface knows about a press: which button, what it
//! landed on, and where (if the position could be resolved). `InputState` is
//! the gesture being tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{ShapeId, ShapeKind};
use crate::geometry::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Reserved for a future selection mode; background clicks do nothing.
    Select,
    /// Place a square (the tool a session starts with).
    #[default]
    Square,
    /// Place a circle.
    Circle,
    /// Place an equilateral triangle.
    Triangle,
    /// Place a horizontal line.
    Line,
}

impl Tool {
    /// Tools offered on the toolbar, in display order.
    pub const PALETTE: [Tool; 4] = [Tool::Square, Tool::Circle, Tool::Triangle, Tool::Line];

    /// The kind of shape a background click creates, or `None` for `Select`.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Square => Some(ShapeKind::Square),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Triangle => Some(ShapeKind::Triangle),
            Self::Line => Some(ShapeKind::Line),
        }
    }

    /// Human-readable label used for toolbar buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
            Self::Line => "Line",
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The empty drawing surface itself.
    Background,
    /// An already-rendered shape.
    Shape(ShapeId),
    /// Something else layered over the surface (toolbar, overlay, ...).
    Other,
}

/// A pointer-down event as reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    pub button: Button,
    pub target: PointerTarget,
    /// Canvas-space position, or `None` when the surface could not resolve one.
    pub position: Option<Point>,
}

impl PointerDown {
    /// A primary-button press on the background at `position`.
    #[must_use]
    pub fn background(position: Point) -> Self {
        Self { button: Button::Primary, target: PointerTarget::Background, position: Some(position) }
    }
}

/// Gesture tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A shape is being dragged on the surface.
    DraggingShape {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// Canvas-space position of the previous pointer event.
        last: Point,
    },
}
