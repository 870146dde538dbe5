//! Error types for the calgrid ecosystem.

use thiserror::Error;

/// Errors that can occur in calgrid operations.
///
/// All of these are recoverable and user-facing: the CLI reports them as
/// messages and stays interactive. None should abort the process.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("End time must be after start time ({0})")]
    InvalidRange(String),

    #[error("Overlaps with existing event '{title}' ({start}-{end})")]
    Overlap {
        title: String,
        start: String,
        end: String,
    },

    #[error("No event with id '{id}' on {date_key}")]
    NotFound { date_key: String, id: String },

    #[error("No events found for {0}")]
    EmptyResult(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
