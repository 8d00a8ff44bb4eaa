//! Client-side list filter. Never sent to the server, never persisted.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::Task;

/// Which tasks the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Completed => "Completed",
            TaskFilter::Pending => "Pending",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }
}

/// Project `tasks` through `filter`, preserving relative order.
pub fn filtered_view(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}
