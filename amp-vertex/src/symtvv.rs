//! Symmetric tensor-vector-vector rule
//!
//! Recursive relations for the Feynman rule
//!
//! ```text
//! g(mu,rho)g(nu,sigma) + g(mu,sigma)g(nu,rho)
//! ```
//!
//! where mu and nu are the Lorentz indices of the symmetric tensor field
//! and rho, sigma those of the vector legs.

use crate::descriptor::VertexDescriptor;
use amp_core::spacetime::{DIM, Minkowski};
use amp_core::tensor::TensorSlot;
use amp_core::CValue;

pub const DESCRIPTOR: VertexDescriptor = VertexDescriptor {
    rank: 3,
    params: 1,
    tensor_size: DIM * DIM * DIM * DIM,
    sizes: [DIM * DIM, DIM, DIM, 0],
    p_dependent: false,
    fermionic: false,
    formula: "(g(mu1,mu3)g(mu2,mu4)+g(mu1,mu4)g(mu2,mu3))",
};

/// Accumulates the tensor-leg sub-amplitude from the two vector legs.
pub fn first(
    factor: CValue,
    couplings: &[CValue],
    a0: &mut TensorSlot,
    a1: &[CValue],
    a2: &[CValue],
) {
    for mu in 0..DIM {
        for nu in 0..=mu {
            let c = factor * couplings[0] * (a1[mu] * a2[nu] + a2[mu] * a1[nu]);
            a0.add(mu * DIM + nu, c);
            a0.add(nu * DIM + mu, c);
        }
    }
}

/// Accumulates the first vector-leg sub-amplitude.
pub fn second(
    factor: CValue,
    couplings: &[CValue],
    a1: &mut TensorSlot,
    a0: &[CValue],
    a2: &[CValue],
) {
    for mu in 0..DIM {
        let row = &a0[mu * DIM..(mu + 1) * DIM];
        a1.add(mu, 2.0 * factor * couplings[0] * Minkowski::dot(row, a2));
    }
}

/// Accumulates the second vector-leg sub-amplitude.
pub fn third(
    factor: CValue,
    couplings: &[CValue],
    a2: &mut TensorSlot,
    a0: &[CValue],
    a1: &[CValue],
) {
    for mu in 0..DIM {
        let row = &a0[mu * DIM..(mu + 1) * DIM];
        a2.add(mu, 2.0 * factor * couplings[0] * Minkowski::dot(row, a1));
    }
}

/// The fourth leg has zero declared size: accumulating into it is a no-op.
pub fn fourth() {}
