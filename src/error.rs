// File: ./src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownyError {
    #[error("I don't know what '{0}' means. Type 'help' to see the valid commands.")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Please give the {0} a description.")]
    EmptyDescription(&'static str),

    #[error("Invalid date '{0}'. Please use the format YYYY-MM-DD HHmm (e.g. 2024-01-31 1800).")]
    InvalidDateFormat(String),

    #[error("An event cannot end before it starts.")]
    InvalidEventRange,

    #[error("There is no task number {number}. You have {size} tasks in your list.")]
    InvalidTaskNumber { number: i64, size: usize },

    #[error("Task index {index} is out of range for a list of {size} tasks.")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Unreadable task entry on line {line}: {reason}")]
    CorruptEntry { line: usize, reason: String },

    #[error("Could not read tasks from {path:?}: {source}")]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("The change was kept in memory but could not be saved to {path:?}: {source}")]
    StoragePersist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DownyError>;
