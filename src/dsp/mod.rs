//! Low-level DSP primitives behind the tremolo.
//!
//! These components are allocation-free and realtime-safe. They stay focused
//! on the signal-processing math; the `runtime` module layers the analysis
//! and control loop on top.

/// Shape generators and phase helpers for the modulation oscillator.
pub mod lfo;
/// Wet/dry blending and output clamping.
pub mod mix;
/// One-pole exponential parameter smoothing.
pub mod smoother;
/// The amplitude-modulation engine.
pub mod tremolo;

pub use lfo::LfoShape;
pub use smoother::OnePoleSmoother;
pub use tremolo::{Tremolo, TremoloParams};

/// Tiny offset added before multiplies so recursive state never decays into
/// subnormal floats.
pub const DENORMAL_GUARD: f32 = 1e-20;
