//!
//! # Drag Reconciliation
//!
//! Pure reducer translating a completed drag gesture into a local board
//! mutation and, when something actually moved, the post-move task snapshot
//! the caller should send to the API. No I/O happens here; issuing the
//! update (fire-and-forget) belongs to the command layer.

use uuid::Uuid;

use super::{BoardState, ColumnId};
use crate::models::Task;

/// A position within the board: column plus index into its task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub column: ColumnId,
    pub index: usize,
}

/// A completed drag gesture as reported by the presentation surface.
///
/// `destination` is `None` when the card was dropped outside any column.
#[derive(Debug, Clone)]
pub struct DragEvent {
    pub task_id: Uuid,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

/// Applies a drag event to the board.
///
/// Returns the moved task's post-move snapshot when an update should be
/// issued, or `None` when the event was a no-op:
///
/// - absent destination, or destination identical to source: nothing
///   changes and no update is produced;
/// - same-column move: the card is spliced to its new index; status is
///   unchanged but an update is still produced;
/// - cross-column move: the card leaves the source column, takes the
///   destination column's status, and is inserted at the destination index.
///
/// A source index that does not address the dragged task falls back to a
/// lookup by id within the source column; if the task is not in that column
/// at all the event is a no-op. Destination indexes past the end of the
/// destination column clamp to appending.
pub fn reconcile(board: &mut BoardState, event: &DragEvent) -> Option<Task> {
    let destination = event.destination?;
    if destination == event.source {
        return None;
    }

    let source_column = board.column_mut(event.source.column);
    let position = match source_column.tasks.get(event.source.index) {
        Some(task) if task.id == event.task_id => event.source.index,
        _ => source_column
            .tasks
            .iter()
            .position(|t| t.id == event.task_id)?,
    };

    let mut task = source_column.tasks.remove(position);
    if destination.column != event.source.column {
        task.status = destination.column.status();
    }

    let destination_column = board.column_mut(destination.column);
    let index = destination.index.min(destination_column.tasks.len());
    destination_column.tasks.insert(index, task.clone());

    Some(task)
}
