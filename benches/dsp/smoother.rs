use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use smart_tremolo::OnePoleSmoother;

use crate::BLOCK_SIZES;

pub fn bench_smoother(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/smoother");

    for &size in BLOCK_SIZES {
        let mut smoother = OnePoleSmoother::new();
        smoother.set_sample_rate(48_000.0);
        smoother.set_time_constant(0.01);

        group.bench_with_input(BenchmarkId::new("step_toggle", size), &size, |b, &size| {
            let mut target = 0.0f32;
            b.iter(|| {
                target = 1.0 - target;
                let mut acc = 0.0;
                for _ in 0..size {
                    acc += smoother.process(black_box(target));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
