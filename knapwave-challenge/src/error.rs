use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to allocate a table of {rows} x {columns} cells")]
    AllocationFailure { rows: usize, columns: usize },
}

pub type KnapsackResult<T> = std::result::Result<T, KnapsackError>;
