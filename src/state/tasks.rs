//! Local mirror of the remote task collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server is the only source of truth. This state is a rendering cache:
//! it changes only when a response arrives (`net::task_sync`) or when the
//! user edits purely local inputs (the new-task draft and per-row edit
//! scratch text).
//!
//! DESIGN
//! ======
//! Edit scratch text lives in a side map keyed by task id instead of on the
//! `Task` values themselves, so a server response replacing a task can never
//! carry or clobber half-typed edits, and several rows can be edited at once.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use super::filter::{TaskFilter, filtered_view};
use crate::net::types::{Task, TaskId};

/// Lifecycle of the initial collection fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    /// Initial GET failed; the page shows a static error instead of the list.
    Failed,
}

/// Task list page state.
#[derive(Clone, Debug, Default)]
pub struct TaskListState {
    /// Tasks in server order, each exactly as last returned by the server.
    pub tasks: Vec<Task>,
    pub status: LoadStatus,
    /// Contents of the new-task input.
    pub draft: String,
    /// Rows in edit mode, keyed by id, holding the scratch title.
    pub editing: HashMap<TaskId, String>,
}

impl TaskListState {
    /// Replace the whole collection with a fresh server listing.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.editing.retain(|id, _| tasks.iter().any(|t| &t.id == id));
        self.tasks = tasks;
        self.status = LoadStatus::Loaded;
    }

    pub fn mark_load_failed(&mut self) {
        self.status = LoadStatus::Failed;
    }

    /// Append a newly created task.
    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Swap in the server's representation of an existing task.
    ///
    /// Returns `false` (and changes nothing) if the id is no longer in the
    /// list, e.g. a response that lost the race against a delete.
    pub fn replace(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Drop a task and any edit in progress for it.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        self.editing.remove(id);
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Enter edit mode for `id`, seeding the scratch text with the current title.
    /// Re-entering an open edit keeps the existing scratch.
    pub fn begin_edit(&mut self, id: &TaskId) -> bool {
        let Some(title) = self.get(id).map(|t| t.title.clone()) else {
            return false;
        };
        self.editing.entry(id.clone()).or_insert(title);
        true
    }

    /// Update the scratch text of a row already in edit mode.
    pub fn set_edit_text(&mut self, id: &TaskId, text: impl Into<String>) {
        if let Some(scratch) = self.editing.get_mut(id) {
            *scratch = text.into();
        }
    }

    pub fn edit_text(&self, id: &TaskId) -> Option<&str> {
        self.editing.get(id).map(String::as_str)
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.contains_key(id)
    }

    /// Leave edit mode for `id`, discarding the scratch text.
    pub fn cancel_edit(&mut self, id: &TaskId) {
        self.editing.remove(id);
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn visible(&self, filter: TaskFilter) -> Vec<Task> {
        filtered_view(&self.tasks, filter)
    }
}

/// Trim user input into a task title; `None` when nothing is left.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Owner of a [`TaskListState`] that async operations read and write through.
///
/// The page uses a Leptos signal; tests use a `RefCell`.
pub trait TaskStore {
    fn read<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut TaskListState));
}

impl TaskStore for RwSignal<TaskListState> {
    fn read<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut TaskListState)) {
        self.update(f);
    }
}

impl TaskStore for RefCell<TaskListState> {
    fn read<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut TaskListState)) {
        f(&mut self.borrow_mut());
    }
}
