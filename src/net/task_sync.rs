//! One remote call per user intent, applied to local state on success.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages spawn these futures from event handlers. Each operation reads what
//! it needs from the store up front, awaits exactly one [`TaskApi`] call, and
//! then writes the server's answer back. State is never changed before the
//! server confirms.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and swallowed: the action simply did not happen.
//! Only [`load`] records its failure, as the page-level error flag. There
//! are no retries and no guards against concurrent calls for the same id;
//! whichever response lands last wins.

#[cfg(test)]
#[path = "task_sync_test.rs"]
mod task_sync_test;

use super::api::TaskApi;
use super::types::{NewTask, TaskId, TaskPatch};
use crate::state::tasks::{TaskListState, TaskStore, normalize_title};

/// Fetch the whole collection and replace the local mirror with it.
pub async fn load<A: TaskApi, S: TaskStore>(api: &A, store: &S) {
    match api.list_tasks().await {
        Ok(tasks) => {
            log::debug!("loaded {} tasks", tasks.len());
            store.write(|s| s.replace_all(tasks));
        }
        Err(e) => {
            log::error!("failed to fetch tasks: {e}");
            store.write(TaskListState::mark_load_failed);
        }
    }
}

/// Create a task from `title`. Blank titles never reach the network.
///
/// On success the created task is appended and the draft input cleared.
/// Returns whether the task was added.
pub async fn add<A: TaskApi, S: TaskStore>(api: &A, store: &S, title: &str) -> bool {
    let Some(title) = normalize_title(title) else {
        return false;
    };
    match api.create_task(&NewTask::new(title)).await {
        Ok(task) => {
            store.write(|s| {
                s.append(task);
                s.draft.clear();
            });
            true
        }
        Err(e) => {
            log::error!("failed to add task: {e}");
            false
        }
    }
}

/// Flip the completion flag of `id` as currently displayed.
///
/// Unknown ids are ignored without a request.
pub async fn toggle<A: TaskApi, S: TaskStore>(api: &A, store: &S, id: &TaskId) -> bool {
    let Some(completed) = store.read(|s| s.get(id).map(|t| t.completed)) else {
        return false;
    };
    match api.update_task(id, &TaskPatch::completed(!completed)).await {
        Ok(task) => {
            store.write(|s| {
                s.replace(task);
            });
            true
        }
        Err(e) => {
            log::error!("failed to toggle task {id}: {e}");
            false
        }
    }
}

/// Send the scratch title of a row in edit mode.
///
/// Rows not in edit mode, or with a blank scratch, are left alone. On success
/// the task is replaced and its edit mode closed; on failure edit mode stays
/// open with the scratch intact.
pub async fn confirm_edit<A: TaskApi, S: TaskStore>(api: &A, store: &S, id: &TaskId) -> bool {
    let Some(title) = store.read(|s| s.edit_text(id).and_then(normalize_title)) else {
        return false;
    };
    match api.update_task(id, &TaskPatch::title(title)).await {
        Ok(task) => {
            store.write(|s| {
                s.replace(task);
                s.cancel_edit(id);
            });
            true
        }
        Err(e) => {
            log::error!("failed to update task {id}: {e}");
            false
        }
    }
}

/// Delete `id` on the server, then drop it locally.
pub async fn remove<A: TaskApi, S: TaskStore>(api: &A, store: &S, id: &TaskId) -> bool {
    match api.delete_task(id).await {
        Ok(()) => {
            store.write(|s| {
                s.remove(id);
            });
            true
        }
        Err(e) => {
            log::error!("failed to delete task {id}: {e}");
            false
        }
    }
}
