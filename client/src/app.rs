//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::shapes_bar::ShapesBar;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared UI state and lays out the full-window canvas with the
/// tool bar floating over its bottom edge.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <div class="sketchpad">
            <CanvasHost/>
            <ShapesBar/>
        </div>
    }
}
