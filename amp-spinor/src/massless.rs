//! Massless helicity spinor constructors
//!
//! The massless family reuses the shared kinematics base with the
//! coefficient pair collapsed (`d = e`, since `P = E` on a light-like
//! momentum); the sign tables are identical to the massive family. There
//! is no mass argument: absence of a mass is what selects this family.

use crate::error::{SpinorError, SpinorResult};
use crate::kinematics::{SpinorKinematics, Variant};
use amp_core::momentum::Momentum;
use amp_core::tensor::TensorSlot;
use amp_core::CValue;

fn require<'a>(
    slot: &TensorSlot,
    at: usize,
    p: Option<&'a Momentum>,
    context: &'static str,
) -> SpinorResult<&'a Momentum> {
    if slot.len() < at + 4 {
        return Err(SpinorError::SlotRange {
            context,
            len: slot.len(),
            at,
        });
    }
    p.ok_or(SpinorError::MissingMomentum { context })
}

fn build(
    variant: Variant,
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    let p = require(slot, at, p, variant.context())?;
    let k = SpinorKinematics::from_momentum(p, 0.0, variant.context());
    let (f, g) = variant.flavour(&k);
    let d = h * k.norm * k.e_plus_p;
    variant.accumulate(d, d, f, g, slot, at);
    Ok(())
}

const UNIT: CValue = CValue::new(1.0, 0.0);

/// Positive-helicity particle spinor.
pub fn u_plus(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::UPlus, UNIT, slot, at, p)
}

/// Positive-helicity particle spinor with complex prefactor.
pub fn u_plus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::UPlus, h, slot, at, p)
}

/// Positive-helicity particle row spinor.
pub fn u_plus_bar(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::UPlusBar, UNIT, slot, at, p)
}

/// Positive-helicity particle row spinor with complex prefactor.
pub fn u_plus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::UPlusBar, h, slot, at, p)
}

/// Negative-helicity particle spinor.
pub fn u_minus(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::UMinus, UNIT, slot, at, p)
}

/// Negative-helicity particle spinor with complex prefactor.
pub fn u_minus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::UMinus, h, slot, at, p)
}

/// Negative-helicity particle row spinor.
pub fn u_minus_bar(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::UMinusBar, UNIT, slot, at, p)
}

/// Negative-helicity particle row spinor with complex prefactor.
pub fn u_minus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::UMinusBar, h, slot, at, p)
}

/// Positive-helicity antiparticle spinor.
pub fn v_plus(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::VPlus, UNIT, slot, at, p)
}

/// Positive-helicity antiparticle spinor with complex prefactor.
pub fn v_plus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::VPlus, h, slot, at, p)
}

/// Positive-helicity antiparticle row spinor.
pub fn v_plus_bar(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::VPlusBar, UNIT, slot, at, p)
}

/// Positive-helicity antiparticle row spinor with complex prefactor.
pub fn v_plus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::VPlusBar, h, slot, at, p)
}

/// Negative-helicity antiparticle spinor.
pub fn v_minus(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::VMinus, UNIT, slot, at, p)
}

/// Negative-helicity antiparticle spinor with complex prefactor.
pub fn v_minus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::VMinus, h, slot, at, p)
}

/// Negative-helicity antiparticle row spinor.
pub fn v_minus_bar(slot: &mut TensorSlot, at: usize, p: Option<&Momentum>) -> SpinorResult<()> {
    build(Variant::VMinusBar, UNIT, slot, at, p)
}

/// Negative-helicity antiparticle row spinor with complex prefactor.
pub fn v_minus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
) -> SpinorResult<()> {
    build(Variant::VMinusBar, h, slot, at, p)
}
