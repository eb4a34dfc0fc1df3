//! Integrated tests for amp-vertex

use crate::dispatch::{EvalArgs, VertexKind};
use crate::{sss, symtvv, vff};
use amp_core::prelude::*;
use amp_spinor::massive;
use num_complex::Complex;

fn cvec(parts: &[(f64, f64)]) -> Vec<CValue> {
    parts.iter().map(|&(re, im)| Complex::new(re, im)).collect()
}

fn vec_a() -> Vec<CValue> {
    cvec(&[(1.0, 0.5), (-2.0, 0.0), (0.25, 1.0), (3.0, -1.0)])
}

fn vec_b() -> Vec<CValue> {
    cvec(&[(0.5, 0.0), (1.0, -1.0), (2.0, 0.5), (-0.75, 0.25)])
}

#[test]
fn test_symtvv_tensor_leg_values() {
    let cfg = NumericConfig::f64();
    let factor = CValue::new(0.5, 0.25);
    let c0 = CValue::new(2.0, -1.0);
    let a1 = vec_a();
    let a2 = vec_b();

    let mut t = TensorSlot::new(DIM * DIM);
    symtvv::first(factor, &[c0], &mut t, &a1, &a2);

    for mu in 0..DIM {
        for nu in 0..DIM {
            let base = factor * c0 * (a1[mu] * a2[nu] + a2[mu] * a1[nu]);
            // The symmetrised write pass touches diagonal components from
            // both index orders, so they carry twice the base value.
            let expected = if mu == nu { base + base } else { base };
            assert!(
                equals_c(t.at(mu * DIM + nu), expected, &cfg),
                "component ({mu},{nu})"
            );
        }
    }
}

#[test]
fn test_symtvv_tensor_leg_is_symmetric() {
    let cfg = NumericConfig::f64();
    let mut t = TensorSlot::new(DIM * DIM);
    symtvv::first(CValue::new(1.0, 0.0), &[CValue::new(1.0, 0.0)], &mut t, &vec_a(), &vec_b());
    for mu in 0..DIM {
        for nu in 0..DIM {
            assert!(equals_c(t.at(mu * DIM + nu), t.at(nu * DIM + mu), &cfg));
        }
    }
}

#[test]
fn test_symtvv_vector_legs_contract_rows() {
    let cfg = NumericConfig::f64();
    let factor = CValue::new(1.0, 0.0);
    let c0 = CValue::new(0.5, 0.5);
    let a2 = vec_b();

    // A generic rank-2 tensor on leg 0.
    let mut tensor = Vec::with_capacity(DIM * DIM);
    for k in 0..DIM * DIM {
        tensor.push(CValue::new(k as RValue * 0.1 - 0.3, 0.2 * (k % 3) as RValue));
    }

    let mut v = TensorSlot::new(DIM);
    symtvv::second(factor, &[c0], &mut v, &tensor, &a2);
    for mu in 0..DIM {
        let dot = Minkowski::dot(&tensor[mu * DIM..(mu + 1) * DIM], &a2);
        assert!(equals_c(v.at(mu), 2.0 * factor * c0 * dot, &cfg));
    }

    let mut w = TensorSlot::new(DIM);
    symtvv::third(factor, &[c0], &mut w, &tensor, &a2);
    assert_eq!(v, w);
}

#[test]
fn test_accumulation_is_order_independent() {
    let cfg = NumericConfig::f64();
    let factor = CValue::new(1.0, 0.0);
    let c0 = [CValue::new(1.0, 2.0)];
    let x1 = vec_a();
    let x2 = vec_b();
    let y1 = cvec(&[(0.1, 0.9), (4.0, 0.0), (-1.5, 0.5), (0.0, 2.0)]);
    let y2 = cvec(&[(1.0, 1.0), (0.0, -3.0), (2.5, 0.0), (0.5, 0.5)]);

    let mut ab = TensorSlot::new(DIM * DIM);
    symtvv::first(factor, &c0, &mut ab, &x1, &x2);
    symtvv::first(factor, &c0, &mut ab, &y1, &y2);

    let mut ba = TensorSlot::new(DIM * DIM);
    symtvv::first(factor, &c0, &mut ba, &y1, &y2);
    symtvv::first(factor, &c0, &mut ba, &x1, &x2);

    for k in 0..DIM * DIM {
        assert!(equals_c(ab.at(k), ba.at(k), &cfg), "component {k}");
    }
}

#[test]
fn test_sss_kernels() {
    let cfg = NumericConfig::f64();
    let factor = CValue::new(2.0, 0.0);
    let c0 = [CValue::new(0.0, 1.0)];
    let phi1 = [CValue::new(3.0, -1.0)];
    let phi2 = [CValue::new(-0.5, 0.5)];

    let mut out = TensorSlot::new(1);
    sss::first(factor, &c0, &mut out, &phi1, &phi2);
    assert!(equals_c(out.at(0), factor * c0[0] * phi1[0] * phi2[0], &cfg));

    let mut out2 = TensorSlot::new(1);
    sss::second(factor, &c0, &mut out2, &phi1, &phi2);
    assert_eq!(out.at(0), out2.at(0));
}

#[test]
fn test_vff_vector_current_is_twice_momentum() {
    // ū(p) γ^μ u(p) = 2 p^μ in this normalization.
    let cfg = NumericConfig::f64();
    let p = Momentum::new(10.0, 0.0, 0.0, 8.0);
    let m = 6.0;

    let mut u = TensorSlot::new(4);
    massive::u_plus(&mut u, 0, Some(&p), Some(&m)).unwrap();
    let mut ubar = TensorSlot::new(4);
    massive::u_plus_bar(&mut ubar, 0, Some(&p), Some(&m)).unwrap();

    let unit = CValue::new(1.0, 0.0);
    let mut current = TensorSlot::new(DIM);
    vff::first(unit, &[unit], &mut current, ubar.as_slice(), u.as_slice());

    for mu in 0..DIM {
        assert!(
            equals_c(current.at(mu), CValue::new(2.0 * p[mu], 0.0), &cfg),
            "current component {mu}"
        );
    }
}

#[test]
fn test_vff_spinor_legs_are_adjoint_consistent() {
    // Contracting the row-leg output with ψ̄ equals contracting the
    // column-leg output with ψ.
    let cfg = NumericConfig::f64();
    let p = Momentum::from_spatial(2.5, 1.0, -2.0, 0.5);
    let m = 2.5;
    let v = vec_a();
    let unit = CValue::new(1.0, 0.0);

    let mut u = TensorSlot::new(4);
    massive::u_minus(&mut u, 0, Some(&p), Some(&m)).unwrap();
    let mut ubar = TensorSlot::new(4);
    massive::u_minus_bar(&mut ubar, 0, Some(&p), Some(&m)).unwrap();

    let mut row_out = TensorSlot::new(4);
    vff::second(unit, &[unit], &mut row_out, &v, u.as_slice());
    let mut col_out = TensorSlot::new(4);
    vff::third(unit, &[unit], &mut col_out, &v, ubar.as_slice());

    let lhs: CValue = (0..4).map(|a| ubar.at(a) * row_out.at(a)).sum();
    let rhs: CValue = (0..4).map(|b| col_out.at(b) * u.at(b)).sum();
    assert!(equals_c(lhs, rhs, &cfg));
}

#[test]
fn test_registry_descriptors_validate() {
    for kind in VertexKind::ALL {
        let d = kind.resolve().unwrap();
        assert_eq!(d.rank, 3);
        assert_eq!(
            d.tensor_size,
            d.sizes.iter().filter(|&&s| s != 0).product::<usize>()
        );
    }
    assert!(VertexKind::Vff.descriptor().fermionic);
    assert!(!VertexKind::SymTvv.descriptor().fermionic);
}

#[test]
fn test_dispatch_matches_direct_kernel_call() {
    let factor = CValue::new(0.5, 0.0);
    let c0 = [CValue::new(1.0, 1.0)];
    let tensor: Vec<CValue> = (0..DIM * DIM)
        .map(|k| CValue::new(k as RValue, -(k as RValue)))
        .collect();
    let a2 = vec_b();

    let mut direct = TensorSlot::new(DIM);
    symtvv::second(factor, &c0, &mut direct, &tensor, &a2);

    let mut target = TensorSlot::new(DIM);
    let others = [tensor.as_slice(), a2.as_slice()];
    let mut args = EvalArgs {
        factor,
        couplings: &c0,
        target: &mut target,
        others: &others,
    };
    VertexKind::SymTvv.evaluate(1, &mut args);
    assert_eq!(direct, target);
}

#[test]
fn test_zero_size_leg_is_noop() {
    let c0 = [CValue::new(1.0, 0.0)];
    let a = vec_a();
    let b = vec_b();
    let mut target = TensorSlot::new(DIM);
    target.add(0, CValue::new(7.0, 0.0));
    let others = [a.as_slice(), b.as_slice()];
    let mut args = EvalArgs {
        factor: CValue::new(1.0, 0.0),
        couplings: &c0,
        target: &mut target,
        others: &others,
    };
    VertexKind::SymTvv.evaluate(3, &mut args);
    assert_eq!(target.at(0), CValue::new(7.0, 0.0));
    assert_eq!(target.at(1), CValue::new(0.0, 0.0));
}
