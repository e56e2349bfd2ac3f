//! Reusable UI component modules.

pub mod canvas_host;
pub mod shapes_bar;
