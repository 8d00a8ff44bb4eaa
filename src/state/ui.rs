//! Local UI chrome state (theme, active filter).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the task mirror (`tasks`) so a list
//! reload never resets the theme or the chosen filter.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::filter::TaskFilter;

/// UI state for the theme and the list filter.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub filter: TaskFilter,
}

impl UiState {
    /// Initial UI state with the persisted theme preference.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }
}
