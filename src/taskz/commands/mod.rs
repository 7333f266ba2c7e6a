use crate::model::Task;
use uuid::Uuid;

pub mod add;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command.
///
/// A targeted id that matched nothing lands in `missing` rather than failing
/// the operation: the collection is still saved (unchanged) and the caller
/// decides how to surface it.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// The full collection after the operation ran.
    pub tasks: Vec<Task>,
    /// Records the operation created, changed, or removed.
    pub affected: Vec<Task>,
    /// Targeted ids that matched no record.
    pub missing: Vec<Uuid>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }
}
