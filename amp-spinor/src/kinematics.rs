//! Shared spinor kinematics
//!
//! The base construction capability invoked by every helicity variant:
//! spatial-momentum magnitude, basis normalization and the complex
//! transverse combinations. The massive constructors decorate these values
//! with the ±m coefficient shifts; the massless family uses them directly.

use amp_core::momentum::Momentum;
use amp_core::numeric::sgn_sqrt;
use amp_core::{CValue, RValue};
use tracing::warn;

/// Kinematic quantities entering every spinor variant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpinorKinematics {
    /// Signed spatial-momentum magnitude `P = sgn_sqrt(E² − m²)`.
    pub pmag: RValue,
    /// `E + P`.
    pub e_plus_p: RValue,
    /// Basis normalization `1/sqrt(8·P·(E+P)·(P − p¹))`.
    pub norm: RValue,
    /// Transverse combination `(P − p¹ + p³, p²)`.
    pub f: CValue,
    /// Transverse combination `(P − p¹ − p³, −p²)`.
    pub g: CValue,
}

impl SpinorKinematics {
    /// Evaluates the kinematics for a momentum and mass.
    ///
    /// The signed square root is the literal legacy convention: a spacelike
    /// radicand produces a negative-magnitude `P`, not an error. A
    /// numerically singular basis choice (`P == 0`, `P == −E` or
    /// `P == p¹`) is advisory only; construction proceeds.
    pub fn from_momentum(p: &Momentum, m: RValue, context: &'static str) -> Self {
        let pmag = sgn_sqrt(p[0] * p[0] - m * m);

        if pmag == 0.0 || pmag == -p[0] || pmag == p[1] {
            warn!(
                context,
                energy = p[0],
                pmag,
                "inappropriate spinor base for given momentum"
            );
        }

        let e_plus_p = p[0] + pmag;
        let norm = 1.0 / (8.0 * pmag * e_plus_p * (pmag - p[1])).sqrt();
        Self {
            pmag,
            e_plus_p,
            norm,
            f: CValue::new(pmag - p[1] + p[3], p[2]),
            g: CValue::new(pmag - p[1] - p[3], -p[2]),
        }
    }

    /// The conjugate-flavour transverse combinations.
    pub fn conjugated(&self) -> (CValue, CValue) {
        (self.f.conj(), self.g.conj())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_kinematics() {
        let p = Momentum::new(10.0, 0.0, 0.0, 8.0);
        let k = SpinorKinematics::from_momentum(&p, 6.0, "test");
        assert_eq!(k.pmag, 8.0);
        assert_eq!(k.e_plus_p, 18.0);
        assert_eq!(k.norm, 1.0 / 96.0);
        assert_eq!(k.f, CValue::new(16.0, 0.0));
        assert_eq!(k.g, CValue::new(0.0, 0.0));
    }

    #[test]
    fn test_spacelike_momentum_gives_negative_magnitude() {
        let p = Momentum::new(3.0, 0.0, 0.0, 1.0);
        let k = SpinorKinematics::from_momentum(&p, 5.0, "test");
        assert_eq!(k.pmag, -4.0);
    }
}

/// The eight helicity construction variants.
///
/// Each variant fixes three things: which transverse-combination flavour it
/// contracts, how the mass shifts the coefficient pair, and the
/// accumulation sign pattern. The tables encode the normalization and
/// chirality conventions of the Pauli basis and must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    UPlus,
    UPlusBar,
    UMinus,
    UMinusBar,
    VPlus,
    VPlusBar,
    VMinus,
    VMinusBar,
}

impl Variant {
    pub(crate) const fn context(self) -> &'static str {
        match self {
            Variant::UPlus => "u_plus",
            Variant::UPlusBar => "u_plus_bar",
            Variant::UMinus => "u_minus",
            Variant::UMinusBar => "u_minus_bar",
            Variant::VPlus => "v_plus",
            Variant::VPlusBar => "v_plus_bar",
            Variant::VMinus => "v_minus",
            Variant::VMinusBar => "v_minus_bar",
        }
    }

    /// Antiparticle variants swap the mass shift between the coefficient
    /// pair.
    pub(crate) const fn is_antiparticle(self) -> bool {
        matches!(
            self,
            Variant::VPlus | Variant::VPlusBar | Variant::VMinus | Variant::VMinusBar
        )
    }

    /// Transverse-combination flavour contracted by this variant.
    pub(crate) fn flavour(self, k: &SpinorKinematics) -> (CValue, CValue) {
        match self {
            Variant::UPlus | Variant::UMinusBar | Variant::VPlusBar | Variant::VMinus => {
                (k.f, k.g)
            }
            Variant::UPlusBar | Variant::UMinus | Variant::VPlus | Variant::VMinusBar => {
                k.conjugated()
            }
        }
    }

    /// Accumulates the four spinor components with this variant's sign
    /// pattern.
    pub(crate) fn accumulate(
        self,
        d: CValue,
        e: CValue,
        f: CValue,
        g: CValue,
        slot: &mut amp_core::tensor::TensorSlot,
        at: usize,
    ) {
        match self {
            Variant::UPlus => {
                slot.add(at, d * f);
                slot.add(at + 1, -(d * g));
                slot.add(at + 2, e * f);
                slot.add(at + 3, -(e * g));
            }
            Variant::UPlusBar => {
                slot.add(at, d * f);
                slot.add(at + 1, -(d * g));
                slot.add(at + 2, -(e * f));
                slot.add(at + 3, e * g);
            }
            Variant::UMinus => {
                slot.add(at, d * g);
                slot.add(at + 1, d * f);
                slot.add(at + 2, -(e * g));
                slot.add(at + 3, -(e * f));
            }
            Variant::UMinusBar => {
                slot.add(at, d * g);
                slot.add(at + 1, d * f);
                slot.add(at + 2, e * g);
                slot.add(at + 3, e * f);
            }
            Variant::VPlus => {
                slot.add(at, -(d * g));
                slot.add(at + 1, -(d * f));
                slot.add(at + 2, e * g);
                slot.add(at + 3, e * f);
            }
            Variant::VPlusBar => {
                slot.add(at, -(d * g));
                slot.add(at + 1, -(d * f));
                slot.add(at + 2, -(e * g));
                slot.add(at + 3, -(e * f));
            }
            Variant::VMinus => {
                slot.add(at, -(d * f));
                slot.add(at + 1, d * g);
                slot.add(at + 2, -(e * f));
                slot.add(at + 3, e * g);
            }
            Variant::VMinusBar => {
                slot.add(at, -(d * f));
                slot.add(at + 1, d * g);
                slot.add(at + 2, e * f);
                slot.add(at + 3, -(e * g));
            }
        }
    }
}
