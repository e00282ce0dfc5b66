//! Benchmarks for a complete session block.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use smart_tremolo::{control::LoudnessFollower, Session, TremoloParams};

use crate::BLOCK_SIZES;

pub fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/session");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size * 2)
            .map(|i| 0.5 * (i as f32 * 0.03).sin())
            .collect();
        let mut buffer = input.clone();

        // No controller: analysis cost on top of the engine
        let mut plain = Session::new(TremoloParams::default().build(48_000.0), 2);
        group.bench_with_input(BenchmarkId::new("no_controller", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                plain.process_block(black_box(&mut buffer));
            })
        });

        // Loudness follower rewriting depth once per frame
        let mut adaptive = Session::with_controller(
            TremoloParams::default().build(48_000.0),
            2,
            LoudnessFollower::default(),
        );
        group.bench_with_input(BenchmarkId::new("loudness_follower", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                adaptive.process_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
