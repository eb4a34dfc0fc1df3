//! Scalar three-point rule
//!
//! The φ³ interaction: every leg is a single scalar component, the vertex
//! tensor is the coupling itself.

use crate::descriptor::VertexDescriptor;
use amp_core::tensor::TensorSlot;
use amp_core::CValue;

pub const DESCRIPTOR: VertexDescriptor = VertexDescriptor {
    rank: 3,
    params: 1,
    tensor_size: 1,
    sizes: [1, 1, 1, 0],
    p_dependent: false,
    fermionic: false,
    formula: "1",
};

/// Accumulates the first scalar leg.
pub fn first(
    factor: CValue,
    couplings: &[CValue],
    a0: &mut TensorSlot,
    a1: &[CValue],
    a2: &[CValue],
) {
    a0.add(0, factor * couplings[0] * a1[0] * a2[0]);
}

/// Accumulates the second scalar leg.
pub fn second(
    factor: CValue,
    couplings: &[CValue],
    a1: &mut TensorSlot,
    a0: &[CValue],
    a2: &[CValue],
) {
    a1.add(0, factor * couplings[0] * a0[0] * a2[0]);
}

/// Accumulates the third scalar leg.
pub fn third(
    factor: CValue,
    couplings: &[CValue],
    a2: &mut TensorSlot,
    a0: &[CValue],
    a1: &[CValue],
) {
    a2.add(0, factor * couplings[0] * a0[0] * a1[0]);
}

/// The fourth leg has zero declared size: accumulating into it is a no-op.
pub fn fourth() {}
