//! # 🧮 amp-core — Amplitude Engine Core Types
//!
//! Core value types for recursive tree-level amplitude evaluation: Minkowski
//! momenta, complex tensor slots with accumulate-only semantics, and the
//! numeric tolerance layer shared by every other AMP crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              Process tree (external)            │
//! │  owns Momentum + TensorSlot per node            │
//! └──────────────────┬──────────────────────────────┘
//!                    │ read-only handles / add-in-place
//! ┌──────────────────┴──────────────────────────────┐
//! │  amp-core                                       │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Momentum + Minkowski metric              │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  TensorSlot (accumulate, reset)           │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  NumericConfig + safe float I/O           │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Principles
//!
//! 1. **Slots are accumulated, never overwritten** — contributions from
//!    diagrams sharing sub-topologies superpose in any order.
//! 2. **No ambient state** — tolerance configuration is an explicit value
//!    passed into every comparison.
//! 3. **Momenta are immutable** — assigned once by the tree, referenced by
//!    kernels through optional read-only handles.

pub mod error;
pub mod momentum;
pub mod numeric;
pub mod prelude;
pub mod safeio;
pub mod spacetime;
pub mod tensor;

pub use error::{CoreError, CoreResult};
pub use momentum::Momentum;
pub use numeric::{
    NumericConfig, equal_sequences, equals, equals_c, larger, make_z, make_zbar, make_zbar_c,
    make_zc, sgn_sq, sgn_sqrt, smaller, times_i,
};
pub use safeio::{safe_parse, safe_write};
pub use spacetime::{DIM, Minkowski};
pub use tensor::TensorSlot;

use num_complex::Complex;

/// Real scalar type used throughout the engine.
pub type RValue = f64;

/// Complex amplitude component type.
pub type CValue = Complex<RValue>;

#[cfg(test)]
mod tests;
