//! Local UI state shared between the tool bar and the canvas host.
//!
//! The canvas engine owns the authoritative tool; this copy exists so the
//! tool bar can highlight the active button reactively.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::input::Tool;

/// UI state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tool: Tool,
}

impl UiState {
    /// Whether `tool` is the one currently selected.
    #[must_use]
    pub fn is_active(&self, tool: Tool) -> bool {
        self.active_tool == tool
    }
}
