use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::store::RecordStore;
use uuid::Uuid;

use super::helpers::current;

/// Remove the task matching `id`. Deleting an id that is already gone is a
/// no-op signaled through `CmdResult::missing`.
pub fn run<S: RecordStore>(store: &mut S, seed: &[Task], id: Uuid) -> Result<CmdResult> {
    let (tasks, _) = current(store, seed)?;
    let (kept, removed): (Vec<Task>, Vec<Task>) =
        tasks.into_iter().partition(|task| task.id != id);
    store.save(&kept)?;

    let mut result = CmdResult::default().with_tasks(kept);
    match removed.into_iter().next() {
        Some(task) => {
            result.add_message(CmdMessage::success(format!("Task deleted: {}", task.title)));
            result.affected.push(task);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("Task not found: {}", id)));
            result.missing.push(id);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_only_the_targeted_record() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &[], "A").unwrap();
        let id = add::run(&mut store, &[], "B").unwrap().affected[0].id;
        add::run(&mut store, &[], "C").unwrap();

        let result = run(&mut store, &[], id).unwrap();
        let titles: Vec<_> = result.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(result.affected[0].title, "B");
    }

    #[test]
    fn deleting_a_missing_id_leaves_the_collection_unchanged() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &[], "A").unwrap();
        let before = store.load().unwrap().unwrap();

        let ghost = Uuid::new_v4();
        let result = run(&mut store, &[], ghost).unwrap();
        assert_eq!(result.missing, vec![ghost]);
        assert_eq!(store.load().unwrap().unwrap(), before);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = InMemoryStore::new();
        let id = add::run(&mut store, &[], "A").unwrap().affected[0].id;

        run(&mut store, &[], id).unwrap();
        let result = run(&mut store, &[], id).unwrap();
        assert_eq!(result.missing, vec![id]);
        assert!(result.tasks.is_empty());
    }
}
