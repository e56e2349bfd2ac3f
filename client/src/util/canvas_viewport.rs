//! Viewport synchronization between the browser window and the engine.

#[cfg(feature = "csr")]
use canvas::engine::Engine;

/// Size the engine to the browser window's inner size and device pixel ratio.
///
/// The drawing surface always fills the window, so the window is the source
/// of truth rather than the element's layout box.
#[cfg(feature = "csr")]
pub fn sync_viewport(engine: &mut Engine) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window
        .inner_width()
        .map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
        .max(1.0);
    let height = window
        .inner_height()
        .map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
        .max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}
