use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::category::Category;
use super::user::User;

/// Represents the priority of a task.
/// Stored and transmitted by the API as a small integer: 0, 1, or 2.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    /// Low priority (wire value 0).
    Low,
    /// Medium priority (wire value 1).
    Medium,
    /// High priority (wire value 2).
    High,
}

impl TryFrom<u8> for TaskPriority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskPriority::Low),
            1 => Ok(TaskPriority::Medium),
            2 => Ok(TaskPriority::High),
            other => Err(format!("invalid priority value: {}", other)),
        }
    }
}

impl From<TaskPriority> for u8 {
    fn from(priority: TaskPriority) -> u8 {
        match priority {
            TaskPriority::Low => 0,
            TaskPriority::Medium => 1,
            TaskPriority::High => 2,
        }
    }
}

impl TaskPriority {
    /// The label shown in forms and listings.
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

/// Accepts both the form labels ("Low") and the lowercase command-line
/// spellings ("low").
impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" | "low" => Ok(TaskPriority::Low),
            "Medium" | "medium" => Ok(TaskPriority::Medium),
            "High" | "high" => Ok(TaskPriority::High),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// Represents the status of a task.
/// Stored and transmitted by the API as a small integer: 0, 1, or 2.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    /// Task is yet to be started (wire value 0).
    Todo,
    /// Task is currently being worked on (wire value 1).
    InProgress,
    /// Task is completed (wire value 2).
    Done,
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskStatus::Todo),
            1 => Ok(TaskStatus::InProgress),
            2 => Ok(TaskStatus::Done),
            other => Err(format!("invalid status value: {}", other)),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> u8 {
        match status {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }
}

impl TaskStatus {
    /// The label shown in forms and listings.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Done => "Done",
        }
    }
}

/// Accepts both the form labels ("InProgress") and the lowercase
/// command-line spellings ("in-progress").
impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Todo" | "todo" => Ok(TaskStatus::Todo),
            "InProgress" | "in-progress" => Ok(TaskStatus::InProgress),
            "Done" | "done" => Ok(TaskStatus::Done),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

/// A file attached to a task. Returned by the API, never created here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Represents a task entity as returned by the API.
///
/// The wire format uses camelCase field names (`dueDate`, `assignedTo`,
/// `createdAt`, `updatedAt`).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// The description of the task.
    pub description: String,
    /// Optional due date for the task.
    pub due_date: Option<DateTime<Utc>>,
    /// The priority of the task.
    pub priority: TaskPriority,
    /// The current status of the task.
    pub status: TaskStatus,
    /// The user to whom the task is assigned (optional).
    pub assigned_to: Option<User>,
    /// Categories this task belongs to.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Files attached to this task.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a task.
///
/// Status is omitted; the server defaults new tasks to Todo. The priority
/// field serializes as its numeric wire value.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    pub assigned_to_id: Uuid,
    pub category_ids: Vec<Uuid>,
}
