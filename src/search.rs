//!
//! # Client-side Search
//!
//! Filters an already-fetched task list. The API has no search endpoint, so
//! matching happens entirely in memory: a case-insensitive substring query
//! over title and description, plus optional structured filters applied as
//! equality checks.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Task, TaskPriority, TaskStatus};

/// Search criteria collected from the user.
///
/// An empty query matches every task; each structured filter narrows the
/// result further.
#[derive(Debug, Default, Clone)]
pub struct SearchParams {
    /// Free-text query matched against title and description.
    pub query: String,
    /// Keep only tasks with this status.
    pub status: Option<TaskStatus>,
    /// Keep only tasks with this priority.
    pub priority: Option<TaskPriority>,
    /// Keep only tasks assigned to this user.
    pub assignee: Option<Uuid>,
    /// Keep only tasks carrying this category.
    pub category: Option<Uuid>,
    /// Keep only tasks due on this calendar day (UTC).
    pub due_date: Option<NaiveDate>,
}

impl SearchParams {
    /// A query-only search with no structured filters.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    fn matches(&self, task: &Task) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        if let Some(assignee) = self.assignee {
            if task.assigned_to.as_ref().map(|u| u.id) != Some(assignee) {
                return false;
            }
        }

        if let Some(category) = self.category {
            if !task.categories.iter().any(|c| c.id == category) {
                return false;
            }
        }

        if let Some(due) = self.due_date {
            if task.due_date.map(|d| d.date_naive()) != Some(due) {
                return false;
            }
        }

        true
    }
}

/// Returns the tasks matching the given criteria, preserving input order.
pub fn filter_tasks<'a>(tasks: &'a [Task], params: &SearchParams) -> Vec<&'a Task> {
    tasks.iter().filter(|task| params.matches(task)).collect()
}
