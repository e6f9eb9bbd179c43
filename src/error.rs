use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task description cannot be empty")]
    EmptyDescription,

    #[error("task {0} not found")]
    NotFound(u64),

    #[error("corrupt task file: {0}")]
    CorruptFile(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
