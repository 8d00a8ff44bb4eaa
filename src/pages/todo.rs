//! Task list page: loads on mount, one request per user action.

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::task_input::TaskInput;
use crate::components::task_row::TaskRow;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::HttpTaskApi;
use crate::net::task_sync;
use crate::net::types::{Task, TaskId};
use crate::state::tasks::{LoadStatus, TaskListState};
use crate::state::ui::UiState;

/// Run a sync operation on the browser event loop. Native builds have no
/// executor, so the future is dropped unpolled.
fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Key that changes whenever the server hands back a different version of
/// a task, so only affected rows are rebuilt.
fn row_key(task: &Task) -> (TaskId, String, bool) {
    (task.id.clone(), task.title.clone(), task.completed)
}

/// The to-do list: header, input, filters, and the task rows.
#[component]
pub fn TodoPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TaskListState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<HttpTaskApi>();

    {
        let api = api.clone();
        spawn(async move { task_sync::load(&api, &tasks).await });
    }

    let on_add = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            let title = tasks.with_untracked(|s| s.draft.clone());
            spawn(async move {
                task_sync::add(&api, &tasks, &title).await;
            });
        }
    });

    let on_toggle = Callback::new({
        let api = api.clone();
        move |id: TaskId| {
            let api = api.clone();
            spawn(async move {
                task_sync::toggle(&api, &tasks, &id).await;
            });
        }
    });

    let on_confirm = Callback::new({
        let api = api.clone();
        move |id: TaskId| {
            let api = api.clone();
            spawn(async move {
                task_sync::confirm_edit(&api, &tasks, &id).await;
            });
        }
    });

    let on_delete = Callback::new(move |id: TaskId| {
        let api = api.clone();
        spawn(async move {
            task_sync::remove(&api, &tasks, &id).await;
        });
    });

    // Memoized so typing into inputs does not rebuild the list container.
    let status = Memo::new(move |_| tasks.with(|s| s.status));
    let visible = move || {
        let filter = ui.with(|u| u.filter);
        tasks.with(|s| s.visible(filter))
    };

    view! {
        <div class="todo-page">
            <header class="todo-page__header">
                <h1>"To-Do List"</h1>
                <ThemeToggle/>
            </header>

            <TaskInput on_submit=on_add/>
            <FilterBar/>

            {move || match status.get() {
                LoadStatus::Loading => {
                    view! { <p class="todo-page__status">"Loading..."</p> }.into_any()
                }
                LoadStatus::Failed => {
                    view! {
                        <p class="todo-page__status todo-page__status--error">
                            "Could not load tasks. Please try again later."
                        </p>
                    }
                        .into_any()
                }
                LoadStatus::Loaded => {
                    view! {
                        <ul class="task-list">
                            <For each=visible key=row_key let:task>
                                <TaskRow
                                    task=task
                                    on_toggle=on_toggle
                                    on_confirm=on_confirm
                                    on_delete=on_delete
                                />
                            </For>
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
