//! Pointer mapping helpers for the canvas host.

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use canvas::geometry::Point;
#[cfg(feature = "csr")]
use leptos::prelude::*;

/// Resolve a pointer event to canvas-space coordinates.
///
/// Returns `None` when the canvas is not mounted, in which case the engine
/// treats the press as unresolvable.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent, canvas_ref: &NodeRef<leptos::html::Canvas>) -> Option<Point> {
    let canvas = canvas_ref.get()?;
    let rect = canvas.get_bounding_client_rect();
    Some(Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top()))
}

/// Apply engine actions to the DOM. Returns `true` when a redraw is needed.
#[cfg(feature = "csr")]
pub fn process_actions(actions: Vec<Action>, engine: &Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) -> bool {
    let mut render = false;
    for action in actions {
        match action {
            Action::ShapesChanged(shapes) => {
                log::debug!("canvas now holds {} shapes", shapes.len());
                render = true;
            }
            Action::SetCursor(cursor) => {
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(err) = canvas.style().set_property("cursor", cursor) {
                        log::warn!("failed to set cursor: {err:?}");
                    }
                }
            }
            Action::RenderNeeded => render = true,
        }
    }
    if render {
        render_engine(engine);
    }
    render
}

/// Draw the engine's scene, logging (not propagating) Canvas2D failures.
#[cfg(feature = "csr")]
pub fn render_engine(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::warn!("canvas render failed: {err:?}");
    }
}
