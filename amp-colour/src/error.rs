//! Error types for amp-colour

use thiserror::Error;

/// Result alias for colour-generator operations.
pub type ColourResult<T> = Result<T, ColourError>;

/// Errors raised while constructing or persisting colour generators.
#[derive(Debug, Error)]
pub enum ColourError {
    #[error("leg {leg} declares colour range {range}, expected {expected} in the {basis} basis")]
    BasisMismatch {
        leg: usize,
        range: usize,
        expected: usize,
        basis: &'static str,
    },

    #[error("i/o failure while streaming colour state")]
    Stream(#[from] std::io::Error),

    #[error("malformed colour state: {0}")]
    State(String),
}
