use super::RecordStore;
use crate::error::Result;
use crate::model::Task;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Option<Vec<Task>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called. Lets tests assert that an
    /// operation wrote exactly once.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.doc = Some(tasks.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::TaskzError;
    use std::cell::Cell;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tasks(mut self, titles: &[&str]) -> Self {
            let tasks: Vec<Task> = titles.iter().map(|t| Task::new((*t).into())).collect();
            self.store.save(&tasks).unwrap();
            self
        }

        pub fn with_completed_task(mut self, title: &str) -> Self {
            let mut tasks = self.store.load().unwrap().unwrap_or_default();
            let mut task = Task::new(title.into());
            task.completed = true;
            tasks.push(task);
            self.store.save(&tasks).unwrap();
            self
        }
    }

    /// Store whose first `load` fails and which then delegates to an inner
    /// [`InMemoryStore`], for exercising recovery after a degraded read.
    pub struct FlakyStore {
        inner: InMemoryStore,
        failures: Cell<usize>,
        loads: Cell<usize>,
    }

    impl FlakyStore {
        pub fn failing_once(inner: InMemoryStore) -> Self {
            Self {
                inner,
                failures: Cell::new(1),
                loads: Cell::new(0),
            }
        }

        /// Number of times `load` has been attempted, failures included.
        pub fn load_count(&self) -> usize {
            self.loads.get()
        }
    }

    impl RecordStore for FlakyStore {
        fn load(&self) -> Result<Option<Vec<Task>>> {
            self.loads.set(self.loads.get() + 1);
            if self.failures.get() > 0 {
                self.failures.set(self.failures.get() - 1);
                return Err(TaskzError::Store("store offline".to_string()));
            }
            self.inner.load()
        }

        fn save(&mut self, tasks: &[Task]) -> Result<()> {
            self.inner.save(tasks)
        }
    }

    /// Store whose every operation fails, for exercising the degraded read
    /// path and failure propagation.
    pub struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn load(&self) -> Result<Option<Vec<Task>>> {
            Err(TaskzError::Store("store offline".to_string()))
        }

        fn save(&mut self, _tasks: &[Task]) -> Result<()> {
            Err(TaskzError::Store("store offline".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn document_round_trips() {
        let mut store = InMemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let tasks = vec![Task::new("A".into())];
        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), Some(tasks));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn fixture_builders_populate_the_document() {
        let fixture = StoreFixture::new()
            .with_tasks(&["A", "B"])
            .with_completed_task("C");

        let tasks = fixture.store.load().unwrap().unwrap();
        let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert!(tasks[2].completed);
        assert!(!tasks[0].completed);
    }
}
