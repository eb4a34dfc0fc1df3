//! Error types for amp-vertex

use thiserror::Error;

/// Result alias for vertex operations.
pub type VertexResult<T> = Result<T, VertexError>;

/// Structural defects in vertex metadata.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VertexError {
    #[error("vertex '{formula}' declares rank {rank}, more than the supported 4 legs")]
    RankOutOfRange { formula: &'static str, rank: usize },

    #[error(
        "vertex '{formula}' declares tensor size {tensor_size} inconsistent with leg ranges {sizes:?}"
    )]
    SizeMismatch {
        formula: &'static str,
        tensor_size: usize,
        sizes: [usize; 4],
    },
}
