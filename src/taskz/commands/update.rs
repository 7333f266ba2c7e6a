use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::model::{Task, TaskUpdate};
use crate::store::RecordStore;
use uuid::Uuid;

use super::helpers::current;

/// Merge `update` into the task matching `id`, leaving every other record
/// and the collection order untouched.
///
/// A missing id is a deliberate no-op: the collection is saved unchanged and
/// the id is reported in `CmdResult::missing` so callers can react.
pub fn run<S: RecordStore>(
    store: &mut S,
    seed: &[Task],
    id: Uuid,
    update: &TaskUpdate,
) -> Result<CmdResult> {
    let title = match &update.title {
        Some(title) => {
            let title = title.trim();
            if title.is_empty() {
                return Err(TaskzError::Validation("Title cannot be empty".to_string()));
            }
            Some(title.to_string())
        }
        None => None,
    };

    let (tasks, _) = current(store, seed)?;
    let mut changed = None;
    let tasks: Vec<Task> = tasks
        .into_iter()
        .map(|task| {
            if task.id != id {
                return task;
            }
            let mut task = task;
            if let Some(title) = &title {
                task.title = title.clone();
            }
            if let Some(completed) = update.completed {
                task.completed = completed;
            }
            changed = Some(task.clone());
            task
        })
        .collect();
    store.save(&tasks)?;

    let mut result = CmdResult::default().with_tasks(tasks);
    match changed {
        Some(task) => {
            result.add_message(CmdMessage::success(format!("Task updated: {}", task.title)));
            result.affected.push(task);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("Task not found: {}", id)));
            result.missing.push(id);
        }
    }
    Ok(result)
}

/// Flip the completed flag of the task matching `id`. Convenience over
/// [`run`]; a missing id falls through to the same no-op signal.
pub fn toggle<S: RecordStore>(store: &mut S, seed: &[Task], id: Uuid) -> Result<CmdResult> {
    let (tasks, _) = current(store, seed)?;
    let completed = tasks.iter().find(|t| t.id == id).map(|t| !t.completed);
    run(
        store,
        seed,
        id,
        &TaskUpdate {
            title: None,
            completed,
        },
    )
}
