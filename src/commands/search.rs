//! Search command: fetch the task list and filter it client-side.

use super::task_line;
use crate::api::ApiClient;
use crate::error::AppError;
use crate::search::{filter_tasks, SearchParams};

/// Fetch every task and print the ones matching the criteria.
pub async fn run_search(client: &ApiClient, params: SearchParams) -> Result<(), AppError> {
    let tasks = match client.list_tasks().await {
        Ok(tasks) => tasks,
        Err(e) => {
            log::error!("Failed to load tasks: {}", e);
            println!("Error loading data. Please try again later.");
            return Ok(());
        }
    };

    let matches = filter_tasks(&tasks, &params);
    if matches.is_empty() {
        println!("No matching tasks");
        return Ok(());
    }

    println!("{} matching task(s)", matches.len());
    for task in matches {
        println!("{}  [{}]", task_line(task), task.status.label());
    }
    Ok(())
}
