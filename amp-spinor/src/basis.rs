//! Wavefunction-basis factory
//!
//! Resolves a fermion-line configuration to its constructor once at setup
//! time; after binding, the kernels run without further dispatch. The
//! variant set is closed — the factory is total and cannot fail.

use crate::error::SpinorResult;
use crate::{massive, massless};
use amp_core::momentum::Momentum;
use amp_core::tensor::TensorSlot;
use amp_core::{CValue, RValue};
use serde::{Deserialize, Serialize};

/// Particle or antiparticle line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FermionLine {
    Particle,
    AntiParticle,
}

/// Discrete helicity eigenstate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HelicityState {
    Plus,
    Minus,
}

/// Column spinor or its conjugate row form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinorForm {
    Column,
    Row,
}

/// Massive constructor entry point.
pub type MassiveFn =
    fn(&mut TensorSlot, usize, Option<&Momentum>, Option<&RValue>) -> SpinorResult<()>;

/// Massive constructor entry point with complex prefactor.
pub type MassiveScaledFn =
    fn(CValue, &mut TensorSlot, usize, Option<&Momentum>, Option<&RValue>) -> SpinorResult<()>;

/// Massless constructor entry point.
pub type MasslessFn = fn(&mut TensorSlot, usize, Option<&Momentum>) -> SpinorResult<()>;

/// A constructor bound to one fermion line.
#[derive(Debug, Clone, Copy)]
pub enum SpinorConstructor {
    Massive(MassiveFn),
    Massless(MasslessFn),
}

/// The Pauli gamma-matrix basis.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauliBasis;

impl PauliBasis {
    /// Constructor for a massive line.
    pub fn massive(line: FermionLine, h: HelicityState, form: SpinorForm) -> MassiveFn {
        use crate::basis::{FermionLine::*, HelicityState::*, SpinorForm::*};
        match (line, h, form) {
            (Particle, Plus, Column) => massive::u_plus,
            (Particle, Plus, Row) => massive::u_plus_bar,
            (Particle, Minus, Column) => massive::u_minus,
            (Particle, Minus, Row) => massive::u_minus_bar,
            (AntiParticle, Plus, Column) => massive::v_plus,
            (AntiParticle, Plus, Row) => massive::v_plus_bar,
            (AntiParticle, Minus, Column) => massive::v_minus,
            (AntiParticle, Minus, Row) => massive::v_minus_bar,
        }
    }

    /// Prefactor-carrying constructor for a massive line.
    pub fn massive_scaled(line: FermionLine, h: HelicityState, form: SpinorForm) -> MassiveScaledFn {
        use crate::basis::{FermionLine::*, HelicityState::*, SpinorForm::*};
        match (line, h, form) {
            (Particle, Plus, Column) => massive::u_plus_scaled,
            (Particle, Plus, Row) => massive::u_plus_bar_scaled,
            (Particle, Minus, Column) => massive::u_minus_scaled,
            (Particle, Minus, Row) => massive::u_minus_bar_scaled,
            (AntiParticle, Plus, Column) => massive::v_plus_scaled,
            (AntiParticle, Plus, Row) => massive::v_plus_bar_scaled,
            (AntiParticle, Minus, Column) => massive::v_minus_scaled,
            (AntiParticle, Minus, Row) => massive::v_minus_bar_scaled,
        }
    }

    /// Constructor for a massless line.
    pub fn massless(line: FermionLine, h: HelicityState, form: SpinorForm) -> MasslessFn {
        use crate::basis::{FermionLine::*, HelicityState::*, SpinorForm::*};
        match (line, h, form) {
            (Particle, Plus, Column) => massless::u_plus,
            (Particle, Plus, Row) => massless::u_plus_bar,
            (Particle, Minus, Column) => massless::u_minus,
            (Particle, Minus, Row) => massless::u_minus_bar,
            (AntiParticle, Plus, Column) => massless::v_plus,
            (AntiParticle, Plus, Row) => massless::v_plus_bar,
            (AntiParticle, Minus, Column) => massless::v_minus,
            (AntiParticle, Minus, Row) => massless::v_minus_bar,
        }
    }

    /// Resolves the constructor family from the presence of a mass.
    pub fn resolve(
        line: FermionLine,
        h: HelicityState,
        form: SpinorForm,
        massive: bool,
    ) -> SpinorConstructor {
        if massive {
            SpinorConstructor::Massive(Self::massive(line, h, form))
        } else {
            SpinorConstructor::Massless(Self::massless(line, h, form))
        }
    }
}
