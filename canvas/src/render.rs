//! Rendering: paints a scene to a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only scene and produces pixels; it never mutates
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::BACKGROUND_FILL;
use crate::scene::{Geometry, Primitive, Style};

/// Draw the full scene, bottom-first.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &[Primitive],
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    for primitive in scene {
        draw_primitive(ctx, primitive)?;
    }
    Ok(())
}

fn draw_primitive(ctx: &CanvasRenderingContext2d, primitive: &Primitive) -> Result<(), JsValue> {
    ctx.save();
    restoring(|| trace_and_paint(ctx, primitive), || ctx.restore())
}

/// Run `body`, then `restore`, whether or not `body` failed.
fn restoring<T, E>(body: impl FnOnce() -> Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    let result = body();
    restore();
    result
}

fn trace_and_paint(ctx: &CanvasRenderingContext2d, primitive: &Primitive) -> Result<(), JsValue> {
    ctx.begin_path();
    match &primitive.geometry {
        Geometry::Rect { x, y, width, height } => ctx.rect(*x, *y, *width, *height),
        Geometry::Circle { x, y, radius } => {
            if *radius <= 0.0 {
                return Ok(());
            }
            ctx.arc(*x, *y, *radius, 0.0, 2.0 * PI)?;
        }
        Geometry::Path { origin, points, closed } => {
            ctx.translate(origin.x, origin.y)?;
            for (i, p) in points.iter().enumerate() {
                if i == 0 {
                    ctx.move_to(p.x, p.y);
                } else {
                    ctx.line_to(p.x, p.y);
                }
            }
            if *closed {
                ctx.close_path();
            }
        }
    }
    paint(ctx, &primitive.style);
    Ok(())
}

/// Fill (if any) then stroke the current path.
fn paint(ctx: &CanvasRenderingContext2d, style: &Style) {
    if let Some(fill) = style.fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(style.stroke_width);
    ctx.set_line_cap(style.line_cap.as_css());
    ctx.stroke();
}
