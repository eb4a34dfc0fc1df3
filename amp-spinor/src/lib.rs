//! # ⚛️ amp-spinor — Helicity Spinor Construction
//!
//! Builds helicity-eigenstate wavefunction values for fermion lines in the
//! Pauli basis of gamma matrices. Eight construction variants exist,
//! {particle, antiparticle} × {positive, negative helicity} × {column, row},
//! each accumulating exactly four complex components into a caller-supplied
//! tensor position, plus scaled forms taking a complex prefactor for
//! continuous-helicity sampling.
//!
//! The massive constructors decorate a shared kinematics base (the massless
//! construction capability) with the mass-dependent coefficient shifts;
//! there is no inheritance chain between the families.
//!
//! ## Example
//!
//! ```ignore
//! use amp_core::prelude::*;
//! use amp_spinor::massive;
//!
//! let mut slot = TensorSlot::new(4);
//! let p = Momentum::new(10.0, 0.0, 0.0, 8.0);
//! let m = 6.0;
//! massive::u_plus(&mut slot, 0, Some(&p), Some(&m))?;
//! ```
//!
//! A missing momentum or mass, or an undersized destination range, is a
//! fatal precondition violation reported as an [`SpinorError`]; degenerate
//! kinematics (a numerically singular spinor basis) only emit a warning and
//! construction proceeds.

pub mod basis;
pub mod dirac;
pub mod error;
pub mod kinematics;
pub mod massive;
pub mod massless;

pub use basis::{
    FermionLine, HelicityState, MassiveFn, MassiveScaledFn, MasslessFn, PauliBasis,
    SpinorConstructor, SpinorForm,
};
pub use dirac::{SpinMatrix, feynman_slash, gamma, mul_column, mul_row, slash};
pub use error::{SpinorError, SpinorResult};
