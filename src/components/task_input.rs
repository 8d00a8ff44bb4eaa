//! New-task input with an Add button.

use leptos::prelude::*;

use super::keys::{KeyAction, key_action};
use crate::state::tasks::{TaskListState, normalize_title};

/// Text field bound to the draft in [`TaskListState`]. Enter or Add submits.
///
/// Add is disabled while the draft is blank; the submit path checks again
/// before touching the network.
#[component]
pub fn TaskInput(on_submit: Callback<()>) -> impl IntoView {
    let tasks = expect_context::<RwSignal<TaskListState>>();
    let blank = move || tasks.with(|s| normalize_title(&s.draft).is_none());

    view! {
        <div class="task-input">
            <input
                class="task-input__field"
                type="text"
                placeholder="Add new task..."
                prop:value=move || tasks.with(|s| s.draft.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    tasks.update(|s| s.draft = text);
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if key_action(&ev.key(), ev.is_composing()) == Some(KeyAction::Submit) {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                }
            />
            <button class="btn btn--primary" disabled=blank on:click=move |_| on_submit.run(())>
                "Add"
            </button>
        </div>
    }
}
