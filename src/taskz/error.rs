use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TaskzError {
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl TaskzError {
    /// True for failures originating in the record store (I/O or codec).
    /// This is the class the API downgrades to a safe fallback on reads.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Serialization(_) | Self::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TaskzError>;
