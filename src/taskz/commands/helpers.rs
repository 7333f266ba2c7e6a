use crate::error::Result;
use crate::model::Task;
use crate::store::RecordStore;

/// The read half of every read-modify-write cycle: load the document, writing
/// the seed first if the store has never been written. After this returns,
/// the store always holds a document. The flag reports whether this call
/// performed that first-ever initialization.
pub fn current<S: RecordStore>(store: &mut S, seed: &[Task]) -> Result<(Vec<Task>, bool)> {
    match store.load()? {
        Some(tasks) => Ok((tasks, false)),
        None => {
            store.save(seed)?;
            Ok((seed.to_vec(), true))
        }
    }
}
