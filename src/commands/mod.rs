//! Command handlers behind the CLI surface.
//!
//! Each handler builds on `ApiClient` and the library core; rendering is
//! plain text to stdout.

pub mod auth;
pub mod board;
pub mod categories;
pub mod search;
pub mod tasks;
pub mod users;

use crate::models::Task;

/// One-line rendering of a task for listings and board columns.
pub(crate) fn task_line(task: &Task) -> String {
    let mut line = format!("[{}] {} ({})", short_id(task), task.title, task.priority.label());
    if let Some(user) = &task.assigned_to {
        line.push_str(&format!(" @{}", user.full_name()));
    }
    if let Some(due) = task.due_date {
        line.push_str(&format!(" due {}", due.format("%Y-%m-%d")));
    }
    line
}

/// First segment of the task id, enough to identify a card on screen.
pub(crate) fn short_id(task: &Task) -> String {
    let id = task.id.to_string();
    id.split('-').next().unwrap_or(&id).to_string()
}
