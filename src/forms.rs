//!
//! # Task Creation Form
//!
//! Raw form values as the user typed them, validated and converted into the
//! `NewTask` create payload. Field requirements mirror the creation form:
//! title, description, due date, and assignee are required, and at least one
//! category must be selected.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{NewTask, TaskPriority};

/// Raw task-creation form values.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TaskForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Due date in `YYYY-MM-DD` form.
    #[validate(length(min = 1, message = "Due date is required"))]
    pub due_date: String,

    /// Priority label ("Low", "Medium", "High").
    pub priority: String,

    #[validate(length(min = 1, message = "Assignee is required"))]
    pub assigned_to_id: String,

    #[validate(length(min = 1, message = "At least one category is required"))]
    pub category_ids: Vec<String>,
}

impl TaskForm {
    /// Validates the form and converts it into the create payload.
    ///
    /// The due date parses as a UTC midnight datetime. Unknown priority
    /// labels fall back to Low. Assignee and category ids must be UUIDs.
    pub fn into_new_task(self) -> Result<NewTask, AppError> {
        self.validate()?;

        let due_date = NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d")?
            .and_time(NaiveTime::MIN)
            .and_utc();

        let priority = self.priority.parse().unwrap_or(TaskPriority::Low);

        let assigned_to_id = Uuid::parse_str(&self.assigned_to_id)
            .map_err(|e| AppError::InvalidInput(format!("assignee id: {}", e)))?;

        let mut category_ids = Vec::with_capacity(self.category_ids.len());
        for raw in &self.category_ids {
            let id = Uuid::parse_str(raw)
                .map_err(|e| AppError::InvalidInput(format!("category id: {}", e)))?;
            category_ids.push(id);
        }

        Ok(NewTask {
            title: self.title,
            description: self.description,
            due_date,
            priority,
            assigned_to_id,
            category_ids,
        })
    }
}
