//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for all taskz operations, regardless of the UI being used.
//!
//! Beyond dispatch, this layer owns the two coordination concerns the
//! commands do not:
//!
//! - **The read cache.** `list` serves repeated reads from a cached copy of
//!   the collection. Every successful mutation clears that cache, so the next
//!   read after a mutation always re-fetches and reflects it.
//! - **Mutation events.** Listeners registered with [`TaskzApi::subscribe`]
//!   receive one [`TaskEvent`] per record created, changed, or removed. A UI
//!   holding its own cache keyed by a task id (an edit view, say) drops its
//!   entry when an event for that id arrives.
//!
//! ## Mutation serialization
//!
//! Every operation is a full load → transform → save cycle over the shared
//! document, which loses updates if two cycles interleave. Mutating methods
//! therefore take `&mut self`: the exclusive borrow keeps cycles from
//! overlapping within one service, and callers sharing a service across
//! threads wrap it in a mutex. There is no interior mutability that would
//! reopen the race.
//!
//! ## Failure policy
//!
//! Storage failures on the read path are downgraded at this boundary: `list`
//! logs the diagnostic and hands the UI an empty collection instead of an
//! error. Mutations surface their `Err` — the save is atomic, so a failed
//! mutation leaves the previous document and the previous cache intact.
//!
//! ## Generic Over RecordStore
//!
//! `TaskzApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `TaskzApi<FileStore>`
//! - Testing: `TaskzApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Task, TaskUpdate};
use crate::store::RecordStore;
use uuid::Uuid;

/// What a mutation did to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEventKind {
    Added,
    Updated,
    Removed,
}

/// Emitted after a successful save, once per affected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskEvent {
    pub kind: TaskEventKind,
    pub id: Uuid,
}

type Listener = Box<dyn Fn(&TaskEvent)>;

/// The main API facade for taskz operations.
///
/// Owns the record store, the seed collection written on first-ever access,
/// the cached read, and the mutation listeners.
pub struct TaskzApi<S: RecordStore> {
    store: S,
    seed: Vec<Task>,
    cache: Option<Vec<Task>>,
    listeners: Vec<Listener>,
}

impl<S: RecordStore> TaskzApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            seed: Vec::new(),
            cache: None,
            listeners: Vec::new(),
        }
    }

    /// Collection written to the store the first time it is read while still
    /// absent. Used only on that first access.
    pub fn with_seed(mut self, seed: Vec<Task>) -> Self {
        self.seed = seed;
        self
    }

    /// Register a listener for mutation events.
    pub fn subscribe(&mut self, listener: impl Fn(&TaskEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Cached read of the collection, seeding the store on first-ever access.
    ///
    /// Never fails: a storage failure is logged and downgraded to an empty
    /// collection. The cache is left empty in that case, so the next read
    /// retries the store.
    pub fn list(&mut self) -> Vec<Task> {
        if let Some(tasks) = &self.cache {
            return tasks.clone();
        }
        match commands::list::run(&mut self.store, &self.seed) {
            Ok(result) => {
                self.cache = Some(result.tasks.clone());
                result.tasks
            }
            Err(e) => {
                log::error!("Error fetching tasks: {}", e);
                Vec::new()
            }
        }
    }

    pub fn add(&mut self, title: &str) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.store, &self.seed, title)?;
        self.after_mutation(&result, TaskEventKind::Added);
        Ok(result)
    }

    pub fn update(&mut self, id: Uuid, update: &TaskUpdate) -> Result<commands::CmdResult> {
        let result = commands::update::run(&mut self.store, &self.seed, id, update)?;
        self.after_mutation(&result, TaskEventKind::Updated);
        Ok(result)
    }

    pub fn toggle_completed(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        let result = commands::update::toggle(&mut self.store, &self.seed, id)?;
        self.after_mutation(&result, TaskEventKind::Updated);
        Ok(result)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, &self.seed, id)?;
        self.after_mutation(&result, TaskEventKind::Removed);
        Ok(result)
    }

    /// Uncached single-record read straight from the store.
    pub fn find_by_id(&mut self, id: Uuid) -> Result<Option<Task>> {
        commands::find::run(&mut self.store, &self.seed, id)
    }

    fn after_mutation(&mut self, result: &commands::CmdResult, kind: TaskEventKind) {
        // The save completed, so the cached read is stale even on a no-op.
        self.cache = None;
        for task in &result.affected {
            let event = TaskEvent { kind, id: task.id };
            for listener in &self.listeners {
                listener(&event);
            }
        }
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
