use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::model::Task;
use crate::store::RecordStore;

use super::helpers::current;

/// Append a new task with a fresh id. The title is trimmed here even though
/// UIs are expected to validate first.
pub fn run<S: RecordStore>(store: &mut S, seed: &[Task], title: &str) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskzError::Validation("Title cannot be empty".to_string()));
    }

    let (mut tasks, seeded) = current(store, seed)?;
    let task = Task::new(title.to_string());
    tasks.push(task.clone());
    store.save(&tasks)?;

    let mut result = CmdResult::default().with_tasks(tasks);
    if seeded {
        result.add_message(CmdMessage::info("Task list initialized"));
    }
    result.add_message(CmdMessage::success(format!("Task added: {}", task.title)));
    result.affected.push(task);
    Ok(result)
}
