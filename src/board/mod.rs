//!
//! # Kanban Board State
//!
//! An explicit in-memory container for the three-column board. The board is
//! a derived view over the fetched task list, never a source of truth: the
//! API holds the persistent state, and `BoardState::from_tasks` rebuilds the
//! whole view from a fresh fetch.
//!
//! The three columns are struct fields rather than a map, so the board shape
//! cannot drift at runtime.

pub mod reconcile;

pub use reconcile::{reconcile, DragEvent, DragLocation};

use std::str::FromStr;

use crate::models::{Task, TaskStatus};

/// Identifier of one of the three fixed board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// The wire/string form: "todo", "inProgress", "done".
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::InProgress => "inProgress",
            ColumnId::Done => "done",
        }
    }

    /// The display title rendered above the column.
    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Todo => "Todo",
            ColumnId::InProgress => "In Progress",
            ColumnId::Done => "Done",
        }
    }

    /// The task status a card acquires when dropped into this column.
    pub fn status(&self) -> TaskStatus {
        match self {
            ColumnId::Todo => TaskStatus::Todo,
            ColumnId::InProgress => TaskStatus::InProgress,
            ColumnId::Done => TaskStatus::Done,
        }
    }

    /// The column a task with the given status belongs to.
    pub fn from_status(status: TaskStatus) -> ColumnId {
        match status {
            TaskStatus::Todo => ColumnId::Todo,
            TaskStatus::InProgress => ColumnId::InProgress,
            TaskStatus::Done => ColumnId::Done,
        }
    }
}

/// Accepts the canonical string forms and the lowercase command-line
/// spelling "in-progress".
impl FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(ColumnId::Todo),
            "inProgress" | "in-progress" => Ok(ColumnId::InProgress),
            "done" => Ok(ColumnId::Done),
            other => Err(format!("unknown column: {}", other)),
        }
    }
}

/// One board column: its identifier, display title, and the ordered tasks
/// it currently holds. The order is the display order and is not persisted
/// server-side.
#[derive(Debug, Clone)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            tasks: Vec::new(),
        }
    }
}

/// The full board: exactly three columns, every task in exactly one of
/// them, placement determined by task status.
#[derive(Debug, Clone)]
pub struct BoardState {
    pub todo: Column,
    pub in_progress: Column,
    pub done: Column,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// An empty board with its three columns.
    pub fn new() -> Self {
        Self {
            todo: Column::new(ColumnId::Todo),
            in_progress: Column::new(ColumnId::InProgress),
            done: Column::new(ColumnId::Done),
        }
    }

    /// Rebuilds the board wholesale from a fetched task list.
    ///
    /// This is a full replace, not an incremental merge. Tasks are
    /// partitioned by status and keep their fetch order within each column.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            board.column_mut(ColumnId::from_status(task.status)).tasks.push(task);
        }
        board
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }

    pub fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Done => &mut self.done,
        }
    }

    /// The columns in display order.
    pub fn columns(&self) -> [&Column; 3] {
        [&self.todo, &self.in_progress, &self.done]
    }

    /// Locates a task anywhere on the board by id.
    pub fn find_task(&self, id: uuid::Uuid) -> Option<(ColumnId, usize, &Task)> {
        for column in self.columns() {
            if let Some(index) = column.tasks.iter().position(|t| t.id == id) {
                return Some((column.id, index, &column.tasks[index]));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;
    use chrono::Utc;
    use uuid::Uuid;

    fn task(title: &str, status: TaskStatus) -> Task {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            priority: TaskPriority::Medium,
            status,
            assigned_to: None,
            categories: Vec::new(),
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_column_id_strings() {
        assert_eq!(ColumnId::InProgress.as_str(), "inProgress");
        assert_eq!(ColumnId::InProgress.title(), "In Progress");
        assert_eq!("in-progress".parse(), Ok(ColumnId::InProgress));
        assert_eq!("todo".parse(), Ok(ColumnId::Todo));
        assert!("backlog".parse::<ColumnId>().is_err());
    }

    #[test]
    fn test_column_status_mapping_is_bijective() {
        for id in [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done] {
            assert_eq!(ColumnId::from_status(id.status()), id);
        }
    }

    #[test]
    fn test_from_tasks_partitions_by_status() {
        let tasks = vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::InProgress),
            task("d", TaskStatus::Todo),
        ];

        let board = BoardState::from_tasks(tasks);

        let todo_titles: Vec<&str> = board.todo.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(todo_titles, vec!["a", "d"]);
        assert_eq!(board.in_progress.tasks.len(), 1);
        assert_eq!(board.done.tasks.len(), 1);
        assert_eq!(board.done.tasks[0].title, "b");
    }

    #[test]
    fn test_from_tasks_replaces_rather_than_merges() {
        let first = BoardState::from_tasks(vec![task("a", TaskStatus::Todo)]);
        assert_eq!(first.todo.tasks.len(), 1);

        let second = BoardState::from_tasks(vec![task("b", TaskStatus::Done)]);
        assert!(second.todo.tasks.is_empty());
        assert_eq!(second.done.tasks.len(), 1);
    }

    #[test]
    fn test_find_task() {
        let needle = task("needle", TaskStatus::InProgress);
        let needle_id = needle.id;
        let board = BoardState::from_tasks(vec![task("a", TaskStatus::Todo), needle]);

        let (column, index, found) = board.find_task(needle_id).unwrap();
        assert_eq!(column, ColumnId::InProgress);
        assert_eq!(index, 0);
        assert_eq!(found.title, "needle");

        assert!(board.find_task(Uuid::new_v4()).is_none());
    }
}
