//! Error types for amp-spinor

use thiserror::Error;

/// Result alias for spinor construction.
pub type SpinorResult<T> = Result<T, SpinorError>;

/// Fatal precondition violations of the wavefunction constructors.
///
/// These indicate a defect in the calling driver, not a property of the
/// event being evaluated; the affected evaluation should be aborted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpinorError {
    #[error("in {context}: destination slot of length {len} cannot hold a spinor at offset {at}")]
    SlotRange {
        context: &'static str,
        len: usize,
        at: usize,
    },

    #[error("in {context}: no momentum bound to the line")]
    MissingMomentum { context: &'static str },

    #[error("in {context}: no mass bound to the line")]
    MissingMass { context: &'static str },
}
