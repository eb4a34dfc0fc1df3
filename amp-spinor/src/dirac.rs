//! Dirac algebra in the Pauli basis
//!
//! Explicit gamma matrices in the standard (Pauli/Dirac) representation:
//! `γ⁰ = diag(1,1,−1,−1)`, `γⁱ = [[0, σⁱ], [−σⁱ, 0]]`. The recursion
//! kernels and the algebraic-identity tests both contract against these
//! matrices, so the representation must stay consistent with the spinor
//! sign tables in [`crate::massive`].

use amp_core::momentum::Momentum;
use amp_core::spacetime::DIM;
use amp_core::CValue;
use num_complex::Complex;

/// 4×4 complex matrix acting on spinor indices.
pub type SpinMatrix = [[CValue; 4]; 4];

fn z(re: f64, im: f64) -> CValue {
    Complex::new(re, im)
}

/// Gamma matrix `γ^μ`.
pub fn gamma(mu: usize) -> SpinMatrix {
    let o = z(0.0, 0.0);
    let one = z(1.0, 0.0);
    let i = z(0.0, 1.0);
    match mu {
        0 => [
            [one, o, o, o],
            [o, one, o, o],
            [o, o, -one, o],
            [o, o, o, -one],
        ],
        1 => [
            [o, o, o, one],
            [o, o, one, o],
            [o, -one, o, o],
            [-one, o, o, o],
        ],
        2 => [
            [o, o, o, -i],
            [o, o, i, o],
            [o, i, o, o],
            [-i, o, o, o],
        ],
        3 => [
            [o, o, one, o],
            [o, o, o, -one],
            [-one, o, o, o],
            [o, one, o, o],
        ],
        _ => panic!("gamma index {mu} out of range"),
    }
}

/// Contraction `γ_μ v^μ = γ⁰v⁰ − γ¹v¹ − γ²v² − γ³v³` of a complex Lorentz
/// vector with upper indices.
pub fn slash(v: &[CValue]) -> SpinMatrix {
    debug_assert!(v.len() >= DIM);
    let o = CValue::new(0.0, 0.0);
    let vt = v[1] - CValue::new(-v[2].im, v[2].re);
    let vt_bar = v[1] + CValue::new(-v[2].im, v[2].re);
    [
        [v[0], o, -v[3], -vt],
        [o, v[0], -vt_bar, v[3]],
        [v[3], vt, -v[0], o],
        [vt_bar, -v[3], o, -v[0]],
    ]
}

/// `p̸` for a real momentum.
pub fn feynman_slash(p: &Momentum) -> SpinMatrix {
    let v: Vec<CValue> = p.as_slice().iter().map(|&x| CValue::new(x, 0.0)).collect();
    slash(&v)
}

/// Matrix times column spinor.
pub fn mul_column(m: &SpinMatrix, s: &[CValue]) -> [CValue; 4] {
    let mut out = [CValue::new(0.0, 0.0); 4];
    for a in 0..4 {
        for b in 0..4 {
            out[a] += m[a][b] * s[b];
        }
    }
    out
}

/// Row spinor times matrix.
pub fn mul_row(s: &[CValue], m: &SpinMatrix) -> [CValue; 4] {
    let mut out = [CValue::new(0.0, 0.0); 4];
    for b in 0..4 {
        for a in 0..4 {
            out[b] += s[a] * m[a][b];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use amp_core::prelude::*;

    #[test]
    fn test_anticommutator_is_twice_metric() {
        let cfg = NumericConfig::f64();
        for mu in 0..DIM {
            for nu in 0..DIM {
                let gm = gamma(mu);
                let gn = gamma(nu);
                for a in 0..4 {
                    for b in 0..4 {
                        let mut acc = CValue::new(0.0, 0.0);
                        for k in 0..4 {
                            acc += gm[a][k] * gn[k][b] + gn[a][k] * gm[k][b];
                        }
                        let expected = if mu == nu && a == b {
                            2.0 * Minkowski::metric(mu)
                        } else {
                            0.0
                        };
                        assert!(
                            equals_c(acc, CValue::new(expected, 0.0), &cfg),
                            "{{γ^{mu},γ^{nu}}}[{a}][{b}]"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_slash_matches_gamma_contraction() {
        let cfg = NumericConfig::f64();
        let v = [
            CValue::new(2.0, 1.0),
            CValue::new(-1.0, 0.5),
            CValue::new(0.25, -2.0),
            CValue::new(3.0, 0.0),
        ];
        let direct = slash(&v);
        for a in 0..4 {
            for b in 0..4 {
                let mut acc = CValue::new(0.0, 0.0);
                for mu in 0..DIM {
                    acc += Minkowski::metric(mu) * gamma(mu)[a][b] * v[mu];
                }
                assert!(equals_c(direct[a][b], acc, &cfg), "slash[{a}][{b}]");
            }
        }
    }
}
