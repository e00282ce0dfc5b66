//! Benchmarks for the tremolo engine's per-block processing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use smart_tremolo::{LfoShape, TremoloParams};

use crate::BLOCK_SIZES;

pub fn bench_tremolo(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/tremolo");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size * 2).map(|i| (i as f32 * 0.05).sin()).collect();
        let mut buffer = input.clone();

        // Stereo, sine, in-phase
        let mut trem = TremoloParams::default().build(48_000.0);
        group.bench_with_input(BenchmarkId::new("stereo_sine", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                trem.process(black_box(&mut buffer), 2);
            })
        });

        // Stereo, soft square, 90 degree spread (tanh per channel)
        let mut trem = TremoloParams {
            stereo_phase_deg: 90.0,
            shape: LfoShape::SquareSoft,
            ..TremoloParams::default()
        }
        .build(48_000.0);
        group.bench_with_input(BenchmarkId::new("stereo_square_soft", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                trem.process(black_box(&mut buffer), 2);
            })
        });

        // Mono
        let mono_input = &input[..size];
        let mut mono = mono_input.to_vec();
        let mut trem = TremoloParams::default().build(48_000.0);
        group.bench_with_input(BenchmarkId::new("mono_sine", size), &size, |b, _| {
            b.iter(|| {
                mono.copy_from_slice(mono_input);
                trem.process(black_box(&mut mono), 1);
            })
        });
    }

    group.finish();
}
