//! # Recursion Kernel Benchmarks
//!
//! Measures the per-node cost of the vertex kernels.
//!
//! Run: `cargo bench --bench vertex_bench`

use amp_core::prelude::*;
use amp_vertex::symtvv;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_symtvv(c: &mut Criterion) {
    let mut group = c.benchmark_group("symtvv");
    let factor = CValue::new(1.0, 0.0);
    let couplings = [CValue::new(0.5, -0.5)];
    let a1: Vec<CValue> = (0..DIM).map(|k| CValue::new(k as RValue, 1.0)).collect();
    let a2: Vec<CValue> = (0..DIM).map(|k| CValue::new(1.0, -(k as RValue))).collect();
    let tensor: Vec<CValue> = (0..DIM * DIM)
        .map(|k| CValue::new(0.1 * k as RValue, 0.0))
        .collect();

    group.bench_function("tensor_leg", |b| {
        let mut slot = TensorSlot::new(DIM * DIM);
        b.iter(|| {
            slot.reset();
            symtvv::first(black_box(factor), &couplings, &mut slot, &a1, &a2)
        })
    });

    group.bench_function("vector_leg", |b| {
        let mut slot = TensorSlot::new(DIM);
        b.iter(|| {
            slot.reset();
            symtvv::second(black_box(factor), &couplings, &mut slot, &tensor, &a2)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_symtvv);
criterion_main!(benches);
