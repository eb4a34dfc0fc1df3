//! Error types for amp-event

use thiserror::Error;

/// Result alias for event-output operations.
pub type EventResult<T> = Result<T, EventError>;

/// Errors raised while exporting event tables.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("i/o failure while writing event table")]
    Io(#[from] std::io::Error),
}
