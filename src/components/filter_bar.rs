//! Filter buttons and the pending-task counter.

use leptos::prelude::*;

use crate::state::filter::TaskFilter;
use crate::state::tasks::TaskListState;
use crate::state::ui::UiState;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tasks = expect_context::<RwSignal<TaskListState>>();
    let pending = move || tasks.with(TaskListState::pending_count);

    view! {
        <nav class="filter-bar">
            <span class="filter-bar__count">
                {move || match pending() {
                    1 => "1 task left".to_owned(),
                    n => format!("{n} tasks left"),
                }}
            </span>
            {TaskFilter::ALL
                .into_iter()
                .map(|filter| {
                    let active = move || ui.with(|u| u.filter == filter);
                    view! {
                        <button
                            class=move || {
                                if active() {
                                    "btn filter-bar__button filter-bar__button--active"
                                } else {
                                    "btn filter-bar__button"
                                }
                            }
                            on:click=move |_| ui.update(|u| u.filter = filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
