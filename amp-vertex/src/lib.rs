//! # 🔗 amp-vertex — Recursion Kernels
//!
//! Per-interaction-type numeric kernels that propagate tensor-valued
//! sub-amplitudes along a process tree. For a vertex with R legs there are
//! R kernel entry points, one per free leg: kernel *k* reads the slots of
//! every other leg, multiplies by the bound coupling(s) and a combinatorial
//! prefactor, and adds its contribution into leg *k*'s slot.
//!
//! Kernels depend only on their declared inputs, never on global or
//! hidden state, so the superposition order of diagrams sharing
//! sub-topologies is irrelevant. They also never validate externally-established
//! preconditions: index ranges come from the vertex descriptors, and a
//! malformed range is a programming error, not a recoverable condition.
//!
//! Dispatch is a closed enum resolved once per tree node at setup time
//! ([`VertexKind`]); afterwards the kernels run without indirection.

pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod sss;
pub mod symtvv;
pub mod vff;

pub use descriptor::VertexDescriptor;
pub use dispatch::{EvalArgs, VertexKind};
pub use error::{VertexError, VertexResult};

#[cfg(test)]
mod tests;
