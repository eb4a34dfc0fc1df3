//! Error types for amp-core

use thiserror::Error;

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by core value types.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("token '{0}' is not a safe-serialized floating-point value")]
    FloatToken(String),
}
