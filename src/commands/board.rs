//! Board commands: render the three columns and move cards between them.

use futures::try_join;
use uuid::Uuid;

use super::task_line;
use crate::api::ApiClient;
use crate::board::{reconcile, BoardState, ColumnId, DragEvent, DragLocation};
use crate::error::AppError;

/// Render the board as three text columns in display order.
pub(crate) fn render_board(board: &BoardState) {
    for column in board.columns() {
        println!("{} ({})", column.title, column.tasks.len());
        for task in &column.tasks {
            println!("  {}", task_line(task));
        }
        println!();
    }
}

/// Fetch tasks and users concurrently, rebuild the board, and render it.
pub async fn run_show(client: &ApiClient) -> Result<(), AppError> {
    let (tasks, users) = match try_join!(client.list_tasks(), client.list_users()) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to load board data: {}", e);
            println!("Error loading data. Please try again later.");
            return Ok(());
        }
    };

    let board = BoardState::from_tasks(tasks);
    render_board(&board);

    let names: Vec<String> = users.iter().map(|u| u.full_name()).collect();
    println!("Assignable users: {}", names.join(", "));
    Ok(())
}

/// Move a task: reconcile locally, render the optimistic board, then issue
/// the update in the background.
///
/// The rendered board is final for this invocation. A failed write reaches
/// the log only; local state is not rolled back and the write is not
/// retried.
pub async fn run_move(
    client: ApiClient,
    task_id: Uuid,
    to: ColumnId,
    index: Option<usize>,
) -> Result<(), AppError> {
    let tasks = match client.list_tasks().await {
        Ok(tasks) => tasks,
        Err(e) => {
            log::error!("Failed to load board data: {}", e);
            println!("Error loading data. Please try again later.");
            return Ok(());
        }
    };

    let mut board = BoardState::from_tasks(tasks);
    let (source_column, source_index, _) = board
        .find_task(task_id)
        .ok_or_else(|| AppError::NotFound(format!("task {} is not on the board", task_id)))?;

    let destination_index = index.unwrap_or_else(|| board.column(to).tasks.len());
    let event = DragEvent {
        task_id,
        source: DragLocation {
            column: source_column,
            index: source_index,
        },
        destination: Some(DragLocation {
            column: to,
            index: destination_index,
        }),
    };

    let update = reconcile(&mut board, &event);
    render_board(&board);

    match update {
        Some(task) => {
            let handle = tokio::spawn(async move {
                if let Err(e) = client.update_task(&task).await {
                    log::error!("Failed to update task {}: {}", task.id, e);
                }
            });
            let _ = handle.await;
        }
        None => println!("Nothing moved"),
    }
    Ok(())
}
