use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use smart_tremolo::{FeatureAccumulator, FRAME_SIZE};

use crate::BLOCK_SIZES;

pub fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/features");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.07).sin()).collect();
        let mut acc = FeatureAccumulator::new();

        group.bench_with_input(BenchmarkId::new("push", size), &size, |b, _| {
            b.iter(|| {
                for &s in &input {
                    acc.push_sample(black_box(s), black_box(-s));
                }
            })
        });
    }

    // Feature extraction over one full frame
    let mut full = FeatureAccumulator::new();
    for i in 0..FRAME_SIZE {
        let s = (i as f32 * 0.07).sin();
        full.push_sample(s, s);
    }
    group.bench_function("rms_zcr_frame", |b| b.iter(|| black_box(full.features())));

    group.finish();
}
