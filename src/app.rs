//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpTaskApi;
use crate::pages::todo::TodoPage;
use crate::state::tasks::TaskListState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Reads the persisted theme, provides the shared state contexts and the API
/// client, and mounts the task page under the configured base path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);

    provide_context(RwSignal::new(TaskListState::default()));
    provide_context(RwSignal::new(UiState::with_dark_mode(dark)));
    provide_context(HttpTaskApi::new(config.api_url));

    view! {
        <Title text="To-Do List"/>

        <Router base=config.base_path>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=TodoPage/>
                </Routes>
            </main>
        </Router>
    }
}
