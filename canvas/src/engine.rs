use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{ConfigError, Defaults};
use crate::doc::{ShapeId, ShapeList};
use crate::geometry::Point;
use crate::hit;
use crate::input::{Button, InputState, PointerDown, PointerTarget, Tool};
use crate::placement;
use crate::render;
use crate::scene::{self, Primitive};
use crate::surface::DragLayer;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The shape list was replaced; carries the new list.
    ShapesChanged(ShapeList),
    /// Set the CSS cursor on the canvas element.
    SetCursor(&'static str),
    /// The scene changed and should be redrawn.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    shapes: ShapeList,
    defaults: Defaults,
    tool: Tool,
    pub input: InputState,
    pub drag: DragLayer,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::from_valid(Defaults::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a core that places shapes with the given sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLength`] if any size is not finite and positive.
    pub fn with_defaults(defaults: Defaults) -> Result<Self, ConfigError> {
        defaults.validate()?;
        Ok(Self::from_valid(defaults))
    }

    fn from_valid(defaults: Defaults) -> Self {
        Self {
            shapes: ShapeList::new(),
            defaults,
            tool: Tool::default(),
            input: InputState::default(),
            drag: DragLayer::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Tool ---

    /// Make `tool` the active tool. Placed shapes are unaffected.
    pub fn on_select_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("tool {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
    }

    // --- Input events ---

    /// Handle a press on the surface.
    ///
    /// A primary press on the background places a shape for the active tool.
    /// A primary press on a shape starts dragging it instead. Everything else
    /// is ignored.
    pub fn on_pointer_down(&mut self, ev: PointerDown) -> Vec<Action> {
        // A press always starts a new gesture, even if the last release was lost.
        self.input = InputState::Idle;
        if ev.button != Button::Primary {
            log::trace!("ignoring {:?} button press", ev.button);
            return Vec::new();
        }
        match ev.target {
            PointerTarget::Background => {
                let Some(point) = ev.position.filter(|p| p.is_finite()) else {
                    log::trace!("background press without a resolvable position");
                    return Vec::new();
                };
                self.place_at(point)
            }
            PointerTarget::Shape(id) => self.begin_drag(id, ev.position),
            PointerTarget::Other => {
                log::trace!("press outside the drawing surface");
                Vec::new()
            }
        }
    }

    /// Handle a press reported only by position, resolving the target by hit-testing.
    pub fn on_pointer_down_at(&mut self, position: Option<Point>, button: Button) -> Vec<Action> {
        let target = position.map_or(PointerTarget::Background, |p| self.resolve_target(p));
        self.on_pointer_down(PointerDown { button, target, position })
    }

    /// Continue a drag in progress.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        let InputState::DraggingShape { id, last } = self.input else {
            return Vec::new();
        };
        self.drag.nudge(id, point.delta_from(last));
        self.input = InputState::DraggingShape { id, last: point };
        vec![Action::RenderNeeded]
    }

    /// Finish a drag in progress. The shape list is not updated.
    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        let InputState::DraggingShape { id, last } = self.input else {
            return Vec::new();
        };
        self.drag.nudge(id, point.delta_from(last));
        self.input = InputState::Idle;
        log::debug!("dropped shape {id} at offset {:?}", self.drag.offset(id));
        vec![Action::SetCursor("default"), Action::RenderNeeded]
    }

    /// Abandon a drag whose release will never arrive (pointer left or was cancelled).
    ///
    /// Offsets applied so far are kept.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        let InputState::DraggingShape { id, .. } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        log::debug!("drag of shape {id} cancelled");
        vec![Action::SetCursor("default"), Action::RenderNeeded]
    }

    fn place_at(&mut self, point: Point) -> Vec<Action> {
        let next = placement::place(self.tool, point, &self.defaults, &self.shapes);
        if next.ptr_eq(&self.shapes) {
            log::trace!("{:?} tool places nothing", self.tool);
            return Vec::new();
        }
        self.shapes = next;
        log::debug!(
            "placed {:?} at ({}, {}); {} shapes",
            self.tool,
            point.x,
            point.y,
            self.shapes.len()
        );
        vec![Action::ShapesChanged(self.shapes.clone()), Action::RenderNeeded]
    }

    fn begin_drag(&mut self, id: ShapeId, position: Option<Point>) -> Vec<Action> {
        let Some(last) = position.filter(|p| p.is_finite()) else {
            return Vec::new();
        };
        if self.shapes.find(id).is_none() {
            log::trace!("press on unknown shape {id}");
            return Vec::new();
        }
        self.input = InputState::DraggingShape { id, last };
        vec![Action::SetCursor("grabbing")]
    }

    // --- Queries ---

    /// What a press at `point` lands on: the topmost drawn shape, else the background.
    #[must_use]
    pub fn resolve_target(&self, point: Point) -> PointerTarget {
        hit::hit_test(point, &self.shapes, &self.drag).map_or(PointerTarget::Background, PointerTarget::Shape)
    }

    /// The currently active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The current shape list, bottom-first.
    #[must_use]
    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// The scene to draw: one primitive per shape, in list order.
    #[must_use]
    pub fn render(&self) -> Vec<Primitive> {
        scene::build(&self.shapes, &self.drag)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Create an engine that places shapes with the given sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLength`] if any size is not finite and positive.
    pub fn with_defaults(canvas: HtmlCanvasElement, defaults: Defaults) -> Result<Self, ConfigError> {
        Ok(Self { canvas, core: EngineCore::with_defaults(defaults)? })
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.viewport_width = width_css.max(0.0);
        self.core.viewport_height = height_css.max(0.0);
        self.core.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
    }

    // --- Delegated input ---

    pub fn on_select_tool(&mut self, tool: Tool) {
        self.core.on_select_tool(tool);
    }

    pub fn on_pointer_down(&mut self, position: Option<Point>, button: Button) -> Vec<Action> {
        self.core.on_pointer_down_at(position, button)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_move(point)
    }

    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_up(point)
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let scene = self.core.render();
        render::draw(&ctx, &scene, self.core.viewport_width, self.core.viewport_height, self.core.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.core.tool()
    }

    #[must_use]
    pub fn shapes(&self) -> &ShapeList {
        self.core.shapes()
    }
}
