use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use smart_tremolo::LfoShape;

use crate::BLOCK_SIZES;

pub fn bench_lfo(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/lfo");
    let shapes = [
        LfoShape::Sine,
        LfoShape::Triangle,
        LfoShape::Square,
        LfoShape::SquareSoft,
    ];

    for &size in BLOCK_SIZES {
        let phases: Vec<f32> = (0..size).map(|i| i as f32 / size as f32).collect();

        for shape in shapes {
            group.bench_with_input(BenchmarkId::new(shape.name(), size), &size, |b, _| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for &p in &phases {
                        acc += shape.value_at(black_box(p));
                    }
                    black_box(acc)
                })
            });
        }
    }

    group.finish();
}
