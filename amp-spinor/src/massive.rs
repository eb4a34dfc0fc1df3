//! Massive helicity spinor constructors
//!
//! One entry point per construction variant, each accumulating four complex
//! components into the destination slot. The `_scaled` forms multiply the
//! whole contribution by a complex prefactor, which is needed when the
//! helicity itself is sampled or summed rather than fixed.

use crate::error::{SpinorError, SpinorResult};
use crate::kinematics::{SpinorKinematics, Variant};
use amp_core::momentum::Momentum;
use amp_core::tensor::TensorSlot;
use amp_core::{CValue, RValue};

fn require<'a>(
    slot: &TensorSlot,
    at: usize,
    p: Option<&'a Momentum>,
    m: Option<&'a RValue>,
    context: &'static str,
) -> SpinorResult<(&'a Momentum, RValue)> {
    if slot.len() < at + 4 {
        return Err(SpinorError::SlotRange {
            context,
            len: slot.len(),
            at,
        });
    }
    let p = p.ok_or(SpinorError::MissingMomentum { context })?;
    let m = m.ok_or(SpinorError::MissingMass { context })?;
    Ok((p, *m))
}

fn build(
    variant: Variant,
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    let (p, m) = require(slot, at, p, m, variant.context())?;
    let k = SpinorKinematics::from_momentum(p, m, variant.context());
    let (f, g) = variant.flavour(&k);
    let c = h * k.norm;
    let (d, e) = if variant.is_antiparticle() {
        (c * (k.e_plus_p - m), c * (k.e_plus_p + m))
    } else {
        (c * (k.e_plus_p + m), c * (k.e_plus_p - m))
    };
    variant.accumulate(d, e, f, g, slot, at);
    Ok(())
}

const UNIT: CValue = CValue::new(1.0, 0.0);

/// Positive-helicity particle spinor.
pub fn u_plus(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UPlus, UNIT, slot, at, p, m)
}

/// Positive-helicity particle spinor with complex prefactor.
pub fn u_plus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UPlus, h, slot, at, p, m)
}

/// Positive-helicity particle row spinor.
pub fn u_plus_bar(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UPlusBar, UNIT, slot, at, p, m)
}

/// Positive-helicity particle row spinor with complex prefactor.
pub fn u_plus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UPlusBar, h, slot, at, p, m)
}

/// Negative-helicity particle spinor.
pub fn u_minus(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UMinus, UNIT, slot, at, p, m)
}

/// Negative-helicity particle spinor with complex prefactor.
pub fn u_minus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UMinus, h, slot, at, p, m)
}

/// Negative-helicity particle row spinor.
pub fn u_minus_bar(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UMinusBar, UNIT, slot, at, p, m)
}

/// Negative-helicity particle row spinor with complex prefactor.
pub fn u_minus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::UMinusBar, h, slot, at, p, m)
}

/// Positive-helicity antiparticle spinor.
pub fn v_plus(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VPlus, UNIT, slot, at, p, m)
}

/// Positive-helicity antiparticle spinor with complex prefactor.
pub fn v_plus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VPlus, h, slot, at, p, m)
}

/// Positive-helicity antiparticle row spinor.
pub fn v_plus_bar(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VPlusBar, UNIT, slot, at, p, m)
}

/// Positive-helicity antiparticle row spinor with complex prefactor.
pub fn v_plus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VPlusBar, h, slot, at, p, m)
}

/// Negative-helicity antiparticle spinor.
pub fn v_minus(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VMinus, UNIT, slot, at, p, m)
}

/// Negative-helicity antiparticle spinor with complex prefactor.
pub fn v_minus_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VMinus, h, slot, at, p, m)
}

/// Negative-helicity antiparticle row spinor.
pub fn v_minus_bar(
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VMinusBar, UNIT, slot, at, p, m)
}

/// Negative-helicity antiparticle row spinor with complex prefactor.
pub fn v_minus_bar_scaled(
    h: CValue,
    slot: &mut TensorSlot,
    at: usize,
    p: Option<&Momentum>,
    m: Option<&RValue>,
) -> SpinorResult<()> {
    build(Variant::VMinusBar, h, slot, at, p, m)
}
