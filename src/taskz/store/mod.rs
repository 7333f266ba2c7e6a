//! # Storage Layer
//!
//! This module defines the storage abstraction for taskz. The [`RecordStore`]
//! trait allows the application to work with different storage backends.
//!
//! A record store holds exactly one document: the full task collection,
//! serialized as a JSON array under a single slot. There are no partial
//! writes — every mutation above this layer is a read-modify-write of the
//! whole document.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The document lives in
//!   one JSON file; saves go through a temp file plus rename so a reader
//!   observes either the old or the new document, never a torn mix.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::error::Result;
use crate::model::Task;

pub mod fs;
pub mod memory;

/// Abstract interface for the single-slot task document.
pub trait RecordStore {
    /// Load the full document, or `None` if nothing has ever been stored.
    fn load(&self) -> Result<Option<Vec<Task>>>;

    /// Replace the stored document. The next `load` sees either the previous
    /// document or this one in full.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}
