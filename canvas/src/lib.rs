//! Shape placement engine for the sketchpad drawing surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interaction logic of the canvas: turning a pointer press and the active
//! tool into a new, immutable shape list; tracking visual drags; hit-testing;
//! and rendering the scene. The host layer is responsible only for wiring DOM
//! events to the engine and reacting to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`placement`] | Pure (tool, point) → shape list function |
//! | [`doc`] | Shape records and the append-only [`doc::ShapeList`] |
//! | [`config`] | Placement defaults and their validation |
//! | [`input`] | Tools, pointer events, and the gesture state |
//! | [`geometry`] | Points, triangle vertices, distance helpers |
//! | [`hit`] | Hit-testing against drawn shapes |
//! | [`surface`] | Visual-only drag offsets |
//! | [`scene`] | Shape → drawing primitive translation |
//! | [`render`] | Canvas2D painter for a scene |
//! | [`consts`] | Shared numeric and style constants |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod placement;
pub mod render;
pub mod scene;
pub mod surface;
