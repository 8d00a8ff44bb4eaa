//! One task in the list, with inline editing.

use leptos::prelude::*;

use super::keys::{KeyAction, key_action};
use crate::net::types::{Task, TaskId};
use crate::state::tasks::TaskListState;

/// A list row: completion checkbox, title or inline editor, and actions.
///
/// The checkbox never flips on its own; it follows the task as confirmed by
/// the server, so the click default is suppressed and `on_toggle` decides.
#[component]
pub fn TaskRow(
    task: Task,
    on_toggle: Callback<TaskId>,
    on_confirm: Callback<TaskId>,
    on_delete: Callback<TaskId>,
) -> impl IntoView {
    let tasks = expect_context::<RwSignal<TaskListState>>();
    let Task {
        id,
        title,
        completed,
    } = task;
    let id = StoredValue::new(id);

    let is_editing = move || id.with_value(|id| tasks.with(|s| s.is_editing(id)));
    let scratch = move || {
        id.with_value(|id| tasks.with(|s| s.edit_text(id).unwrap_or_default().to_owned()))
    };
    let begin_edit = move |_: leptos::ev::MouseEvent| {
        id.with_value(|id| {
            tasks.update(|s| {
                s.begin_edit(id);
            });
        });
    };
    let cancel_edit = move || id.with_value(|id| tasks.update(|s| s.cancel_edit(id)));
    let confirm_edit = move || on_confirm.run(id.get_value());

    let title_class = if completed {
        "task-row__title task-row__title--done"
    } else {
        "task-row__title"
    };

    view! {
        <li class="task-row">
            <input
                class="task-row__check"
                type="checkbox"
                prop:checked=completed
                on:click=move |ev| {
                    ev.prevent_default();
                    on_toggle.run(id.get_value());
                }
            />
            <Show
                when=is_editing
                fallback=move || {
                    view! {
                        <span class=title_class>{title.clone()}</span>
                        <button class="btn task-row__action" on:click=begin_edit>
                            "✏️ Edit"
                        </button>
                    }
                }
            >
                <input
                    class="task-row__edit"
                    type="text"
                    prop:value=scratch
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        id.with_value(|id| tasks.update(|s| s.set_edit_text(id, text)));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        match key_action(&ev.key(), ev.is_composing()) {
                            Some(KeyAction::Submit) => {
                                ev.prevent_default();
                                confirm_edit();
                            }
                            Some(KeyAction::Cancel) => cancel_edit(),
                            None => {}
                        }
                    }
                />
                <button class="btn task-row__action" on:click=move |_| confirm_edit()>
                    "✅ Confirm"
                </button>
                <button class="btn task-row__action" on:click=move |_| cancel_edit()>
                    "❌ Cancel"
                </button>
            </Show>
            <button class="btn btn--danger task-row__action" on:click=move |_| on_delete.run(id.get_value())>
                "❌ Delete"
            </button>
        </li>
    }
}
