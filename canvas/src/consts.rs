//! Shared numeric and style constants for the canvas crate.

// ── Placement defaults ──────────────────────────────────────────

/// Side length of a newly placed square.
pub const DEFAULT_SQUARE_SIZE: f64 = 80.0;

/// Radius of a newly placed circle.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 40.0;

/// Side length of a newly placed equilateral triangle.
pub const DEFAULT_TRI_SIZE: f64 = 100.0;

/// Total length of a newly placed horizontal line.
pub const DEFAULT_LINE_LENGTH: f64 = 140.0;

// ── Styling ─────────────────────────────────────────────────────

/// Fill for closed shapes.
pub const SHAPE_FILL: &str = "white";

/// Outline color for every shape.
pub const SHAPE_STROKE: &str = "black";

/// Outline width in canvas units.
pub const SHAPE_STROKE_WIDTH: f64 = 2.0;

/// Background painted behind the scene.
pub const BACKGROUND_FILL: &str = "#F9FAFB";

// ── Hit-testing ─────────────────────────────────────────────────

/// Extra slop around thin geometry (lines, outlines) in canvas units.
pub const HIT_SLOP: f64 = 4.0;
