//! Vector-fermion-fermion rule
//!
//! The minimal gauge coupling `ψ̄ γ^μ ψ` in the Pauli basis. Leg order is
//! (vector, row spinor, column spinor).

use crate::descriptor::VertexDescriptor;
use amp_core::spacetime::DIM;
use amp_core::tensor::TensorSlot;
use amp_core::CValue;
use amp_spinor::dirac::{gamma, slash};

pub const DESCRIPTOR: VertexDescriptor = VertexDescriptor {
    rank: 3,
    params: 1,
    tensor_size: 64,
    sizes: [DIM, 4, 4, 0],
    p_dependent: false,
    fermionic: true,
    formula: "g(mu1,a2,a3)",
};

/// Accumulates the vector leg: `ψ̄ γ^μ ψ` per Lorentz component.
pub fn first(
    factor: CValue,
    couplings: &[CValue],
    a0: &mut TensorSlot,
    a1: &[CValue],
    a2: &[CValue],
) {
    for mu in 0..DIM {
        let gm = gamma(mu);
        let mut acc = CValue::new(0.0, 0.0);
        for a in 0..4 {
            for b in 0..4 {
                acc += a1[a] * gm[a][b] * a2[b];
            }
        }
        a0.add(mu, factor * couplings[0] * acc);
    }
}

/// Accumulates the row-spinor leg: `v̸ ψ`.
pub fn second(
    factor: CValue,
    couplings: &[CValue],
    a1: &mut TensorSlot,
    a0: &[CValue],
    a2: &[CValue],
) {
    let v = slash(a0);
    for a in 0..4 {
        let mut acc = CValue::new(0.0, 0.0);
        for b in 0..4 {
            acc += v[a][b] * a2[b];
        }
        a1.add(a, factor * couplings[0] * acc);
    }
}

/// Accumulates the column-spinor leg: `ψ̄ v̸`.
pub fn third(
    factor: CValue,
    couplings: &[CValue],
    a2: &mut TensorSlot,
    a0: &[CValue],
    a1: &[CValue],
) {
    let v = slash(a0);
    for b in 0..4 {
        let mut acc = CValue::new(0.0, 0.0);
        for a in 0..4 {
            acc += a1[a] * v[a][b];
        }
        a2.add(b, factor * couplings[0] * acc);
    }
}

/// The fourth leg has zero declared size: accumulating into it is a no-op.
pub fn fourth() {}
