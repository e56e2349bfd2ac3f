//! Bottom tool bar for choosing which shape a click places.
//!
//! The bar only reports selections and highlights the active tool; the
//! canvas host forwards the selection to the engine.

use leptos::prelude::*;

use canvas::input::Tool;

use crate::state::ui::UiState;

/// Centered bar of shape buttons floating over the bottom of the canvas.
#[component]
pub fn ShapesBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let buttons = Tool::PALETTE
        .iter()
        .map(|&tool| {
            let is_active = move || ui.get().is_active(tool);
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                ui.update(|u| u.active_tool = tool);
            };

            view! {
                <button
                    type="button"
                    class="shapes-bar__btn"
                    class:shapes-bar__btn--active=is_active
                    aria-label=tool.label()
                    aria-pressed=move || if is_active() { "true" } else { "false" }
                    title=tool.label()
                    on:click=on_click
                >
                    {render_icon(tool)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="shapes-bar" role="toolbar" aria-label="Shapes">
            {buttons}
        </div>
    }
}

fn render_icon(tool: Tool) -> impl IntoView {
    match tool {
        Tool::Square => view! {
            <svg viewBox="0 0 24 24" class="shapes-bar__icon" aria-hidden="true">
                <rect x="4" y="4" width="16" height="16" />
            </svg>
        }
        .into_any(),
        Tool::Circle => view! {
            <svg viewBox="0 0 24 24" class="shapes-bar__icon" aria-hidden="true">
                <circle cx="12" cy="12" r="8" />
            </svg>
        }
        .into_any(),
        Tool::Triangle => view! {
            <svg viewBox="0 0 24 24" class="shapes-bar__icon" aria-hidden="true">
                <polygon points="12,4 20,20 4,20" />
            </svg>
        }
        .into_any(),
        Tool::Line => view! {
            <svg viewBox="0 0 24 24" class="shapes-bar__icon" aria-hidden="true">
                <line x1="4" y1="12" x2="20" y2="12" />
            </svg>
        }
        .into_any(),
        Tool::Select => view! {
            <svg viewBox="0 0 24 24" class="shapes-bar__icon" aria-hidden="true">
                <path d="M6 3 L6 19 L10 15 L14 21 L16 20 L12 14 L18 14 Z" />
            </svg>
        }
        .into_any(),
    }
}
