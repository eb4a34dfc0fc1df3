//! Vertex descriptors

use crate::error::{VertexError, VertexResult};

/// Static metadata of one interaction type.
///
/// The `formula` string documents the contraction; it is never evaluated
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDescriptor {
    /// Number of legs.
    pub rank: usize,
    /// Number of coupling parameters.
    pub params: usize,
    /// Total size of the vertex tensor.
    pub tensor_size: usize,
    /// Per-leg index ranges; a zero entry marks an absent leg.
    pub sizes: [usize; 4],
    /// Whether the vertex tensor depends on momenta.
    pub p_dependent: bool,
    /// Whether the vertex interacts fermions.
    pub fermionic: bool,
    /// Symbolic contraction formula.
    pub formula: &'static str,
}

impl VertexDescriptor {
    /// Checks the declared index ranges for consistency.
    ///
    /// The tensor size must equal the product of the nonzero per-leg
    /// ranges; a mismatch is a programming defect in the vertex table and
    /// aborts the affected evaluation.
    pub fn validate(&self) -> VertexResult<()> {
        if self.rank > 4 {
            return Err(VertexError::RankOutOfRange {
                formula: self.formula,
                rank: self.rank,
            });
        }
        let product: usize = self.sizes.iter().filter(|&&s| s != 0).product();
        if product != self.tensor_size {
            return Err(VertexError::SizeMismatch {
                formula: self.formula,
                tensor_size: self.tensor_size,
                sizes: self.sizes,
            });
        }
        Ok(())
    }
}
