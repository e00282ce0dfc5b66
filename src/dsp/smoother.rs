//! One-pole parameter smoothing.

use crate::{dsp::DENORMAL_GUARD, DEFAULT_SAMPLE_RATE, DEFAULT_SMOOTHING_TIME, MIN_TIME};

/*
Parameter Smoothing
===================

When a control value jumps (a knob is turned, a controller rewrites the
depth), applying the new value instantly to the audio produces a step in the
gain curve. Steps are heard as clicks or "zipper noise". A smoother turns
every jump into a short exponential glide.

Vocabulary
----------

  target        The value the parameter should end up at.

  state (y)     The value actually used this sample. It chases the target.

  tau           Time constant in seconds. After one tau the state has
                covered ~63% of the distance to the target, after five tau
                ~99.3%.

  coefficient   Per-sample retention factor `a`, derived from tau and the
                sample rate. Recomputed whenever either changes.


The Math
--------

    a = exp(-1 / (tau * sample_rate))
    y = a * y + (1 - a) * target

With tau = 10 ms at 48 kHz, `a` ≈ 0.99792: each sample keeps 99.8% of the
old state and takes 0.2% of the target.

    Value
      1.0 ┤              ___________________
          │         __---
          │      _--
          │    _-
          │  /
      0.0 ┼/────────────────────────────────→ Time
          0    1τ    2τ    3τ    4τ    5τ


Denormals
---------

As `y` decays towards zero it eventually becomes a subnormal float. Many
CPUs take a slow path for subnormal arithmetic, which can stall an audio
callback. Adding a tiny constant (1e-20) to the state before the multiply
keeps it in the normal range without changing anything audible:

    y = a * (y + 1e-20) + (1 - a) * target
*/

/// Single-pole exponential smoother for one scalar control value.
#[derive(Debug, Clone)]
pub struct OnePoleSmoother {
    sample_rate: f64,
    tau: f32,   // seconds
    coeff: f32, // a = exp(-1 / (tau * fs))
    value: f32, // current output
}

impl OnePoleSmoother {
    pub fn new() -> Self {
        let mut smoother = Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            tau: DEFAULT_SMOOTHING_TIME,
            coeff: 0.0,
            value: 0.0,
        };
        smoother.update_coeff();
        smoother
    }

    /// Set the sample rate. Non-positive (or NaN) rates fall back to 48 kHz.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = if sample_rate > 0.0 {
            sample_rate
        } else {
            DEFAULT_SAMPLE_RATE
        };
        self.update_coeff();
    }

    /// Set the time constant in seconds, floored at 1 µs.
    ///
    /// 5-20 ms is the usual range for click-free control changes.
    pub fn set_time_constant(&mut self, tau_seconds: f32) {
        self.tau = if tau_seconds > MIN_TIME {
            tau_seconds
        } else {
            MIN_TIME
        };
        self.update_coeff();
    }

    /// Jump straight to `value` with no glide.
    pub fn reset(&mut self, value: f32) {
        self.value = value;
    }

    /// Advance one sample towards `target` and return the smoothed value.
    #[inline]
    pub fn process(&mut self, target: f32) -> f32 {
        self.value = self.coeff * (self.value + DENORMAL_GUARD) + (1.0 - self.coeff) * target;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn coefficient(&self) -> f32 {
        self.coeff
    }

    pub fn time_constant(&self) -> f32 {
        self.tau
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn update_coeff(&mut self) {
        self.coeff = (-1.0 / (f64::from(self.tau) * self.sample_rate)).exp() as f32;
    }
}

impl Default for OnePoleSmoother {
    fn default() -> Self {
        Self::new()
    }
}
