//! Kernel dispatch
//!
//! The closed set of interaction types, resolved to descriptors and kernel
//! entry points at tree-construction time. After a node is bound to its
//! [`VertexKind`] the per-event evaluation path is a direct call.

use crate::descriptor::VertexDescriptor;
use crate::error::VertexResult;
use crate::{sss, symtvv, vff};
use amp_core::tensor::TensorSlot;
use amp_core::CValue;

/// Arguments of one kernel invocation: the combinatorial prefactor, the
/// bound couplings, the mutable target slot and the remaining legs'
/// components in ascending leg order.
///
/// Target and source slots belong to distinct tree nodes; the traversal
/// driver guarantees a leg is fully accumulated before a parent reads it.
pub struct EvalArgs<'a> {
    pub factor: CValue,
    pub couplings: &'a [CValue],
    pub target: &'a mut TensorSlot,
    pub others: &'a [&'a [CValue]],
}

/// Interaction types known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// Scalar three-point coupling.
    Sss,
    /// Symmetric tensor with two vectors.
    SymTvv,
    /// Vector current with a fermion pair.
    Vff,
}

impl VertexKind {
    /// All interaction types, in registry order.
    pub const ALL: [VertexKind; 3] = [VertexKind::Sss, VertexKind::SymTvv, VertexKind::Vff];

    /// Static descriptor of this interaction type.
    pub fn descriptor(&self) -> &'static VertexDescriptor {
        match self {
            VertexKind::Sss => &sss::DESCRIPTOR,
            VertexKind::SymTvv => &symtvv::DESCRIPTOR,
            VertexKind::Vff => &vff::DESCRIPTOR,
        }
    }

    /// Validated descriptor lookup, used when binding a tree node.
    pub fn resolve(&self) -> VertexResult<&'static VertexDescriptor> {
        let d = self.descriptor();
        d.validate()?;
        Ok(d)
    }

    /// Runs the kernel for the given free leg.
    ///
    /// `leg` indexes the target slot; legs beyond the rank with zero
    /// declared size are no-ops. An index outside the descriptor's leg
    /// table is a programming error and panics.
    pub fn evaluate(&self, leg: usize, args: &mut EvalArgs<'_>) {
        match (self, leg) {
            (VertexKind::Sss, 0) => {
                sss::first(args.factor, args.couplings, args.target, args.others[0], args.others[1])
            }
            (VertexKind::Sss, 1) => {
                sss::second(args.factor, args.couplings, args.target, args.others[0], args.others[1])
            }
            (VertexKind::Sss, 2) => {
                sss::third(args.factor, args.couplings, args.target, args.others[0], args.others[1])
            }
            (VertexKind::Sss, 3) => sss::fourth(),
            (VertexKind::SymTvv, 0) => symtvv::first(
                args.factor,
                args.couplings,
                args.target,
                args.others[0],
                args.others[1],
            ),
            (VertexKind::SymTvv, 1) => symtvv::second(
                args.factor,
                args.couplings,
                args.target,
                args.others[0],
                args.others[1],
            ),
            (VertexKind::SymTvv, 2) => symtvv::third(
                args.factor,
                args.couplings,
                args.target,
                args.others[0],
                args.others[1],
            ),
            (VertexKind::SymTvv, 3) => symtvv::fourth(),
            (VertexKind::Vff, 0) => {
                vff::first(args.factor, args.couplings, args.target, args.others[0], args.others[1])
            }
            (VertexKind::Vff, 1) => {
                vff::second(args.factor, args.couplings, args.target, args.others[0], args.others[1])
            }
            (VertexKind::Vff, 2) => {
                vff::third(args.factor, args.couplings, args.target, args.others[0], args.others[1])
            }
            (VertexKind::Vff, 3) => vff::fourth(),
            (_, l) => panic!("leg index {l} out of range for {self:?}"),
        }
    }
}
