//! Error types for the agenda store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Month value is invalid: {0}")]
    InvalidMonth(i32),

    #[error("Day value is invalid: {0}")]
    InvalidDay(i32),

    #[error("Wrong date format: {0}")]
    MalformedDate(String),

    #[error("Line is not valid UTF-8")]
    InvalidUtf8,

    #[error("Could not open {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} line {line}: {source}", path.display())]
    JournalLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<AgendaError>,
    },
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
