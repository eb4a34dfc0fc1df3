//! Numeric tolerance layer
//!
//! Tolerant floating/complex comparison and small complex-arithmetic
//! helpers used by every other AMP crate. The tolerance pair is an explicit
//! configuration value keyed by the scalar type in use; there is no ambient
//! process-wide state.

use crate::{CValue, RValue};
use serde::{Deserialize, Serialize};

/// Per-scalar-type tolerance configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericConfig {
    /// Absolute comparison tolerance.
    pub epsilon_abs: RValue,
    /// Relative comparison tolerance.
    pub epsilon_rel: RValue,
}

impl NumericConfig {
    /// Tolerances for double-precision evaluation.
    pub fn f64() -> Self {
        Self {
            epsilon_abs: 1.0e-10,
            epsilon_rel: 1.0e-10,
        }
    }

    /// Tolerances for single-precision evaluation.
    pub fn f32() -> Self {
        Self {
            epsilon_abs: 1.0e-4,
            epsilon_rel: 1.0e-4,
        }
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self::f64()
    }
}

/// Equality up to the configured precision: true when `|a−b| < ε_abs` or
/// `|a−b| ≤ ε_rel·max(|a|,|b|)`.
pub fn equals(a: RValue, b: RValue, cfg: &NumericConfig) -> bool {
    if (a - b).abs() < cfg.epsilon_abs {
        return true;
    }
    (a - b).abs() <= cfg.epsilon_rel * a.abs().max(b.abs())
}

/// Complex equality up to the configured precision.
pub fn equals_c(a: CValue, b: CValue, cfg: &NumericConfig) -> bool {
    if (a - b).norm() < cfg.epsilon_abs {
        return true;
    }
    (a - b).norm() <= cfg.epsilon_rel * a.norm().max(b.norm())
}

/// Strict tolerant less-than; mutually exclusive with [`equals`].
pub fn smaller(a: RValue, b: RValue, cfg: &NumericConfig) -> bool {
    !equals(a, b, cfg) && a < b
}

/// Strict tolerant greater-than; mutually exclusive with [`equals`].
pub fn larger(a: RValue, b: RValue, cfg: &NumericConfig) -> bool {
    !equals(a, b, cfg) && a > b
}

/// Element-wise tolerant equality of two sequences; false on length
/// mismatch.
pub fn equal_sequences(xs: &[RValue], ys: &[RValue], cfg: &NumericConfig) -> bool {
    if xs.len() != ys.len() {
        return false;
    }
    xs.iter().zip(ys).all(|(x, y)| equals(*x, *y, cfg))
}

/// Multiplication by the imaginary unit without a full complex multiply.
pub fn times_i(z: CValue) -> CValue {
    CValue::new(-z.im, z.re)
}

/// Builds `z1 + i·z2` from two real numbers.
pub fn make_z(z1: RValue, z2: RValue) -> CValue {
    CValue::new(z1, z2)
}

/// Builds `z1 + i·z2` from two complex numbers.
pub fn make_zc(z1: CValue, z2: CValue) -> CValue {
    CValue::new(z1.re - z2.im, z1.im + z2.re)
}

/// Builds `z1 − i·z2` from two real numbers.
pub fn make_zbar(z1: RValue, z2: RValue) -> CValue {
    CValue::new(z1, -z2)
}

/// Builds `z1 − i·z2` from two complex numbers.
pub fn make_zbar_c(z1: CValue, z2: CValue) -> CValue {
    CValue::new(z1.re + z2.im, z1.im - z2.re)
}

/// Signed square root: a negative radicand yields a negative-magnitude
/// root rather than an error. Legacy branch-cut convention.
pub fn sgn_sqrt(x: RValue) -> RValue {
    if x < 0.0 { -(-x).sqrt() } else { x.sqrt() }
}

/// Signed square, the inverse convention of [`sgn_sqrt`].
pub fn sgn_sq(x: RValue) -> RValue {
    if x < 0.0 { -x * x } else { x * x }
}
