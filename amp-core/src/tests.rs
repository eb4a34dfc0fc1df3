//! Integrated tests for amp-core

use crate::prelude::*;

fn write_token(x: RValue) -> String {
    let mut buf = Vec::new();
    safe_write(&mut buf, x).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_equals_reflexive_and_symmetric() {
    let cfg = NumericConfig::f64();
    for &a in &[0.0, 1.0, -3.5, 1.0e-20, 7.2e11] {
        assert!(equals(a, a, &cfg));
    }
    let (a, b) = (2.0, 2.0 + 1.0e-12);
    assert_eq!(equals(a, b, &cfg), equals(b, a, &cfg));
    assert!(equals(a, b, &cfg));
}

#[test]
fn test_comparison_trichotomy() {
    let cfg = NumericConfig::f64();
    let pairs = [(1.0, 2.0), (-4.0, -3.999), (0.0, 1.0e-30), (5.0, 5.0)];
    for &(a, b) in &pairs {
        let n = [equals(a, b, &cfg), smaller(a, b, &cfg), larger(a, b, &cfg)]
            .iter()
            .filter(|&&x| x)
            .count();
        assert_eq!(n, 1, "exactly one relation must hold for ({a}, {b})");
    }
}

#[test]
fn test_relative_tolerance_scales() {
    let cfg = NumericConfig::f64();
    // Far outside absolute tolerance, inside relative tolerance.
    assert!(equals(1.0e12, 1.0e12 + 10.0, &cfg));
    assert!(smaller(1.0e12, 2.0e12, &cfg));
}

#[test]
fn test_safe_write_specials() {
    assert_eq!(write_token(RValue::NAN), "N");
    assert_eq!(write_token(RValue::NEG_INFINITY), "M");
    assert_eq!(write_token(RValue::INFINITY), "P");
    assert_eq!(write_token(3.14159), "3.14159");
}

#[test]
fn test_safe_round_trip() {
    // NaN survives despite self-inequality.
    let nan = safe_parse(&write_token(RValue::NAN)).unwrap();
    assert!(nan.is_nan());

    // Signed infinities stay distinguished.
    assert_eq!(
        safe_parse(&write_token(RValue::NEG_INFINITY)).unwrap(),
        RValue::NEG_INFINITY
    );
    assert_eq!(
        safe_parse(&write_token(RValue::INFINITY)).unwrap(),
        RValue::INFINITY
    );

    // Finite values reproduce exactly.
    assert_eq!(safe_parse(&write_token(3.14159)).unwrap(), 3.14159);

    // Negative zero keeps its sign bit.
    let z = safe_parse(&write_token(-0.0)).unwrap();
    assert_eq!(z, 0.0);
    assert!(z.is_sign_negative());
}

#[test]
fn test_safe_parse_rejects_garbage() {
    assert!(safe_parse("banana").is_err());
    assert!(safe_parse("").is_err());
}

#[test]
fn test_signed_sqrt_branches() {
    assert_eq!(sgn_sqrt(64.0), 8.0);
    // Negative radicand yields a negative-magnitude root, not an error.
    assert_eq!(sgn_sqrt(-64.0), -8.0);
    assert_eq!(sgn_sq(-3.0), -9.0);
    assert_eq!(sgn_sq(sgn_sqrt(-2.0)), -2.0);
}

#[test]
fn test_times_i() {
    let z = CValue::new(2.0, -3.0);
    assert_eq!(times_i(z), CValue::new(3.0, 2.0));
    assert_eq!(times_i(times_i(z)), -z);
}

#[test]
fn test_make_z_family() {
    assert_eq!(crate::make_z(1.0, 2.0), CValue::new(1.0, 2.0));
    assert_eq!(crate::make_zbar(1.0, 2.0), CValue::new(1.0, -2.0));
    let z1 = CValue::new(1.0, 2.0);
    let z2 = CValue::new(3.0, 4.0);
    assert_eq!(crate::make_zc(z1, z2), z1 + times_i(z2));
    assert_eq!(crate::make_zbar_c(z1, z2), z1 - times_i(z2));
}

#[test]
fn test_equal_sequences() {
    let cfg = NumericConfig::f64();
    assert!(equal_sequences(&[1.0, 2.0], &[1.0, 2.0 + 1.0e-12], &cfg));
    assert!(!equal_sequences(&[1.0, 2.0], &[1.0, 2.1], &cfg));
    assert!(!equal_sequences(&[1.0], &[1.0, 1.0], &cfg));
}

#[test]
fn test_numeric_config_serde_round_trip() {
    let cfg = NumericConfig::f32();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: NumericConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, back);
}

#[test]
fn test_momentum_serde_round_trip() {
    let p = Momentum::new(10.0, 0.0, 0.0, 8.0);
    let json = serde_json::to_string(&p).unwrap();
    let back: Momentum = serde_json::from_str(&json).unwrap();
    assert_eq!(p, back);
}
