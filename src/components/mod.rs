//! Reusable view components for the task list page.

pub mod filter_bar;
pub mod keys;
pub mod task_input;
pub mod task_row;
pub mod theme_toggle;
