//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! The host creates the engine once the `<canvas>` element mounts, keeps its
//! viewport in step with the window, forwards pointer input, and mirrors the
//! tool bar's selection into the engine.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::ui::UiState;

#[cfg(feature = "csr")]
use crate::util::canvas_defaults::load_defaults;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{pointer_point, process_actions, render_engine};
#[cfg(feature = "csr")]
use crate::util::canvas_viewport::sync_viewport;

#[cfg(feature = "csr")]
use canvas::engine::Engine;
#[cfg(feature = "csr")]
use canvas::input::Button;
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

/// Full-window drawing surface.
#[component]
pub fn CanvasHost() -> impl IntoView {
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    // Create the engine once the element exists.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = match Engine::with_defaults(canvas.clone(), load_defaults()) {
                Ok(instance) => instance,
                Err(err) => {
                    log::warn!("rejected canvas defaults: {err}");
                    Engine::new(canvas)
                }
            };
            instance.on_select_tool(ui.get_untracked().active_tool);
            sync_viewport(&mut instance);
            render_engine(&instance);
            log::debug!("canvas engine mounted");
            *engine.borrow_mut() = Some(instance);
        });
    }

    // Mirror tool bar selection into the engine.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let tool = ui.get().active_tool;
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_select_tool(tool);
            }
        });
    }

    // Follow window resizes.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        // The host lives as long as the page, so the listener is never removed.
        let _resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                sync_viewport(engine);
                render_engine(engine);
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let position = pointer_point(&ev, &canvas_ref);
                let button = Button::from_dom(ev.button());
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(position, button);
                    if !actions.is_empty() {
                        if let Some(canvas) = canvas_ref.get() {
                            if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                                log::trace!("pointer capture unavailable: {err:?}");
                            }
                        }
                    }
                    process_actions(actions, engine, &canvas_ref);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let Some(point) = pointer_point(&ev, &canvas_ref) else {
                    return;
                };
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(point);
                    process_actions(actions, engine, &canvas_ref);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let Some(point) = pointer_point(&ev, &canvas_ref) else {
                    return;
                };
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up(point);
                    process_actions(actions, engine, &canvas_ref);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Leaving the canvas or losing the pointer ends any drag; its release will not arrive.
    let on_pointer_cancel = {
        #[cfg(feature = "csr")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    if canvas.has_pointer_capture(ev.pointer_id()) {
                        if let Err(err) = canvas.release_pointer_capture(ev.pointer_id()) {
                            log::trace!("pointer release failed: {err:?}");
                        }
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_cancel();
                    process_actions(actions, engine, &canvas_ref);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_cancel.clone()
            on:pointercancel=on_pointer_cancel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
