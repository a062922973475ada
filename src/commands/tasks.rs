//! Task commands: listing, detail, create, update, delete, and the
//! per-user / per-category listings.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use super::{board::render_board, task_line};
use crate::api::ApiClient;
use crate::board::BoardState;
use crate::error::AppError;
use crate::forms::TaskForm;
use crate::models::{Task, TaskPriority, TaskStatus};

fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks");
        return;
    }
    for task in tasks {
        println!("{}  [{}]", task_line(task), task.status.label());
    }
}

fn print_task_detail(task: &Task) {
    println!("Id:          {}", task.id);
    println!("Title:       {}", task.title);
    println!("Description: {}", task.description);
    println!("Status:      {}", task.status.label());
    println!("Priority:    {}", task.priority.label());
    match &task.assigned_to {
        Some(user) => println!("Assignee:    {} ({})", user.full_name(), user.email),
        None => println!("Assignee:    -"),
    }
    match task.due_date {
        Some(due) => println!("Due:         {}", due.format("%Y-%m-%d")),
        None => println!("Due:         -"),
    }
    if !task.categories.is_empty() {
        let names: Vec<&str> = task.categories.iter().map(|c| c.name.as_str()).collect();
        println!("Categories:  {}", names.join(", "));
    }
    if !task.attachments.is_empty() {
        for attachment in &task.attachments {
            println!("Attachment:  {} ({})", attachment.name, attachment.url);
        }
    }
    println!("Created:     {}", task.created_at.to_rfc3339());
    println!("Updated:     {}", task.updated_at.to_rfc3339());
}

/// List every task.
pub async fn run_list(client: &ApiClient) -> Result<(), AppError> {
    match client.list_tasks().await {
        Ok(tasks) => {
            print_task_list(&tasks);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to load tasks: {}", e);
            println!("Error loading data. Please try again later.");
            Ok(())
        }
    }
}

/// Show one task in detail.
pub async fn run_show(client: &ApiClient, id: Uuid) -> Result<(), AppError> {
    let task = client.get_task(id).await?;
    print_task_detail(&task);
    Ok(())
}

/// Create a task from form values, then refetch the whole list and render
/// the rebuilt board.
///
/// A failed creation reaches the log only.
pub async fn run_create(
    client: &ApiClient,
    title: String,
    description: String,
    due: String,
    priority: String,
    assignee: String,
    categories: Vec<String>,
) -> Result<(), AppError> {
    let form = TaskForm {
        title,
        description,
        due_date: due,
        priority,
        assigned_to_id: assignee,
        category_ids: categories,
    };
    let new_task = form.into_new_task()?;

    match client.create_task(&new_task).await {
        Ok(created) => {
            println!("Created task {}", created.id);
        }
        Err(e) => {
            log::error!("Failed to create task: {}", e);
            return Ok(());
        }
    }

    // Full refetch instead of a local insert, like a page reload.
    match client.list_tasks().await {
        Ok(tasks) => render_board(&BoardState::from_tasks(tasks)),
        Err(e) => {
            log::error!("Failed to reload tasks: {}", e);
            println!("Error loading data. Please try again later.");
        }
    }
    Ok(())
}

/// Update fields of a task: fetch the current snapshot, apply the changes,
/// and send the whole task back.
pub async fn run_update(
    client: &ApiClient,
    id: Uuid,
    title: Option<String>,
    description: Option<String>,
    due: Option<NaiveDate>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
) -> Result<(), AppError> {
    let mut task = client.get_task(id).await?;

    if let Some(title) = title {
        task.title = title;
    }
    if let Some(description) = description {
        task.description = description;
    }
    if let Some(due) = due {
        task.due_date = Some(due.and_time(NaiveTime::MIN).and_utc());
    }
    if let Some(priority) = priority {
        task.priority = priority;
    }
    if let Some(status) = status {
        task.status = status;
    }

    let updated = client.update_task(&task).await?;
    print_task_detail(&updated);
    Ok(())
}

/// Delete a task.
pub async fn run_delete(client: &ApiClient, id: Uuid) -> Result<(), AppError> {
    client.delete_task(id).await?;
    println!("Deleted task {}", id);
    Ok(())
}

/// List the tasks assigned to a user.
pub async fn run_by_user(client: &ApiClient, user_id: Uuid) -> Result<(), AppError> {
    match client.tasks_by_user(user_id).await {
        Ok(tasks) => {
            print_task_list(&tasks);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to load tasks for user {}: {}", user_id, e);
            println!("Error loading data. Please try again later.");
            Ok(())
        }
    }
}

/// List the tasks carrying a category.
pub async fn run_by_category(client: &ApiClient, category_id: Uuid) -> Result<(), AppError> {
    match client.tasks_by_category(category_id).await {
        Ok(tasks) => {
            print_task_list(&tasks);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to load tasks for category {}: {}", category_id, e);
            println!("Error loading data. Please try again later.");
            Ok(())
        }
    }
}
