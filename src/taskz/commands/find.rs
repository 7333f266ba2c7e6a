use crate::error::Result;
use crate::model::Task;
use crate::store::RecordStore;
use uuid::Uuid;

use super::helpers::current;

/// Linear scan for one task. The document carries no index; collections are
/// expected to stay in the tens to low hundreds of records.
pub fn run<S: RecordStore>(store: &mut S, seed: &[Task], id: Uuid) -> Result<Option<Task>> {
    let (tasks, _) = current(store, seed)?;
    Ok(tasks.into_iter().find(|task| task.id == id))
}
