//! Light/dark theme toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Label for the theme button; names the theme currently shown.
pub fn theme_label(dark: bool) -> &'static str {
    if dark { "🌙 Dark Mode" } else { "🔆 Light Mode" }
}

/// Flips the theme in [`UiState`] and persists it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            title="Toggle theme"
            on:click=move |_| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode))
        >
            {move || theme_label(ui.with(|u| u.dark_mode))}
        </button>
    }
}
