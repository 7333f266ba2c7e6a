use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::store::RecordStore;

use super::helpers::current;

/// Return the collection in stored order, seeding the store on first-ever
/// access so later operations never observe an absent document.
pub fn run<S: RecordStore>(store: &mut S, seed: &[Task]) -> Result<CmdResult> {
    let (tasks, seeded) = current(store, seed)?;
    let mut result = CmdResult::default().with_tasks(tasks);
    if seeded {
        result.add_message(CmdMessage::info("Task list initialized"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn first_list_writes_the_seed() {
        let mut store = InMemoryStore::new();
        let seed = vec![Task::new("Buy milk".into()), Task::new("Read".into())];

        let result = run(&mut store, &seed).unwrap();
        assert_eq!(result.tasks, seed);
        assert_eq!(store.load().unwrap(), Some(seed));
    }

    #[test]
    fn only_the_seeding_read_reports_initialization() {
        use crate::commands::MessageLevel;

        let mut store = InMemoryStore::new();
        let result = run(&mut store, &[]).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Info));

        let result = run(&mut store, &[]).unwrap();
        assert!(result.messages.is_empty());
    }

    #[test]
    fn second_list_does_not_reseed() {
        let mut store = InMemoryStore::new();
        let seed = vec![Task::new("Buy milk".into())];

        run(&mut store, &seed).unwrap();
        let result = run(&mut store, &seed).unwrap();

        assert_eq!(result.tasks.len(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &[], "First").unwrap();
        add::run(&mut store, &[], "Second").unwrap();
        add::run(&mut store, &[], "Third").unwrap();

        let titles: Vec<_> = run(&mut store, &[])
            .unwrap()
            .tasks
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }
}
