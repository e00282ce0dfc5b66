//! Real-world scenario benchmarks.
//!
//! These model the offline driver: every block is analyzed, controlled and
//! rendered.

mod session;

pub use session::bench_session;
