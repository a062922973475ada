//! Command-line definition for taskdeck.
//!
//! This module only declares the argument tree; the handlers live in
//! `commands`.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::board::ColumnId;
use crate::models::{TaskPriority, TaskStatus};

/// Taskdeck - Kanban board client for the task management API.
///
/// The board has three fixed columns (todo, inProgress, done). All state
/// lives in the remote API; the client fetches, renders, and writes back.
///
/// Environment variables:
///   API_BASE_URL         Base URL of the API (default http://localhost:5258)
///   TASKDECK_TOKEN       Provide a bearer token without logging in
///   TASKDECK_TOKEN_PATH  Override the credentials file location
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(version)]
#[command(about = "Kanban board client for the task management API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Register a new account and log in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },

    /// Invalidate the session and delete the stored token
    Logout,

    /// Show the currently authenticated user
    Whoami,

    /// Board operations
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Category operations
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// User operations
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Search fetched tasks client-side
    Search {
        /// Free-text query matched against title and description
        query: String,
        /// Filter by status (todo, in-progress, done)
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Filter by priority (low, medium, high)
        #[arg(long)]
        priority: Option<TaskPriority>,
        /// Filter by assignee id
        #[arg(long)]
        assignee: Option<Uuid>,
        /// Filter by category id
        #[arg(long)]
        category: Option<Uuid>,
        /// Filter by due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// Fetch tasks and users and render the three columns
    Show,

    /// Move a task to a column, optionally at a position
    Move {
        /// Id of the task to move
        task_id: Uuid,
        /// Destination column (todo, in-progress, done)
        #[arg(long)]
        to: ColumnId,
        /// Position within the destination column (appends if omitted)
        #[arg(long)]
        index: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List every task
    List,

    /// Show one task in detail
    Show { id: Uuid },

    /// Create a task
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Priority label (Low, Medium, High)
        #[arg(long, default_value = "Medium")]
        priority: String,
        /// Assignee user id
        #[arg(long)]
        assignee: String,
        /// Category id (repeatable)
        #[arg(long = "category", required = true)]
        categories: Vec<String>,
    },

    /// Update fields of a task
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<TaskPriority>,
        /// Status (todo, in-progress, done)
        #[arg(long)]
        status: Option<TaskStatus>,
    },

    /// Delete a task
    Delete { id: Uuid },

    /// List the tasks assigned to a user
    ByUser { user_id: Uuid },

    /// List the tasks carrying a category
    ByCategory { category_id: Uuid },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List every category
    List,

    /// Show one category
    Show { id: Uuid },

    /// Create a category
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Update a category
    Update {
        id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a category
    Delete { id: Uuid },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List every user
    List,

    /// Show one user
    Show { id: Uuid },
}
