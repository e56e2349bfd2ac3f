//! Browser helpers used by the canvas host.
//!
//! The browser-facing parts depend on `web_sys` and are only compiled with
//! the `csr` feature.

pub mod canvas_defaults;
pub mod canvas_input;
pub mod canvas_viewport;
