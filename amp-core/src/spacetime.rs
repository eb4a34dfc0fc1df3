//! Minkowski metric operations

use crate::momentum::Momentum;
use crate::{CValue, RValue};

/// Spacetime dimension.
pub const DIM: usize = 4;

/// Minkowski spacetime with signature (+,−,−,−).
#[derive(Debug, Clone, Copy)]
pub struct Minkowski;

impl Minkowski {
    /// Metric contraction of two complex Lorentz vectors,
    /// `a⁰b⁰ − a¹b¹ − a²b² − a³b³`.
    ///
    /// No conjugation is applied: amplitude contractions are bilinear, not
    /// sesquilinear.
    pub fn dot(a: &[CValue], b: &[CValue]) -> CValue {
        a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3]
    }

    /// Metric contraction of two momenta.
    pub fn dot_mom(p: &Momentum, q: &Momentum) -> RValue {
        p.dot(q)
    }

    /// Diagonal metric component `g_μμ`.
    pub fn metric(mu: usize) -> RValue {
        if mu == 0 { 1.0 } else { -1.0 }
    }
}
