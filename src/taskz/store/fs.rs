use super::RecordStore;
use crate::error::{Result, TaskzError};
use crate::model::Task;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed record store. The whole collection is one pretty-printed JSON
/// array at `path`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TaskzError::Io)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(TaskzError::Io)?;
        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(TaskzError::Serialization)?;
        Ok(Some(tasks))
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(tasks).map_err(TaskzError::Serialization)?;

        // Atomic write: temp file in the same directory, then rename over
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let tmp_file = dir.join(format!(".tasks-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, &self.path))
        {
            let _ = fs::remove_file(&tmp_file);
            return Err(TaskzError::Io(e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> FileStore {
        FileStore::new(dir.join("tasks.json"))
    }

    #[test]
    fn load_is_absent_before_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn saved_document_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let tasks = vec![Task::new("Buy milk".into()), Task::new("Read".into())];

        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), Some(tasks));
    }

    #[test]
    fn save_replaces_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.save(&[Task::new("Old".into())]).unwrap();

        let replacement = vec![Task::new("New".into())];
        store.save(&replacement).unwrap();
        assert_eq!(store.load().unwrap(), Some(replacement));
    }

    #[test]
    fn malformed_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, TaskzError::Serialization(_)));
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.save(&[Task::new("A".into())]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("tasks.json")]);
    }

    #[test]
    fn failed_save_cleans_up_its_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tasks.json");
        // A directory at the target path makes the rename fail
        std::fs::create_dir(&target).unwrap();
        let mut store = FileStore::new(&target);

        assert!(store.save(&[Task::new("A".into())]).is_err());

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/tasks.json"));
        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }
}
