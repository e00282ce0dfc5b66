//! Benchmarks for low-level DSP primitives.

mod features;
mod lfo;
mod smoother;
mod tremolo;

pub use features::bench_features;
pub use lfo::bench_lfo;
pub use smoother::bench_smoother;
pub use tremolo::bench_tremolo;
