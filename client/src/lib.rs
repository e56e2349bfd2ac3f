//! # sketchpad
//!
//! Leptos + WASM frontend for the sketchpad drawing surface.
//!
//! This crate contains the page shell, the bottom tool bar, and the
//! `CanvasHost` bridge component that forwards DOM input to the `canvas`
//! crate's engine and lets it paint the scene.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
