use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FRAME_SIZE;

/*
Frame Features
==============

Two cheap descriptors, computed once per 1024-sample frame (~21 ms at
48 kHz, ~23 ms at 44.1 kHz), which is fine enough for a controller to
follow the music without reacting to every waveform wiggle.

Vocabulary
----------

  mid         Mono fold of a stereo frame: 0.5 × (L + R).

  RMS         Root-mean-square, sqrt(mean(x²)). A loudness estimate.
              A full-scale sine has RMS 1/√2 ≈ 0.707.

  ZCR         Zero-crossing rate: the fraction of adjacent sample pairs
              whose sign differs. A sine at f Hz crosses zero 2f times a
              second, so ZCR ≈ 2f / sample_rate. Noise scores high, bass
              scores low.

  crossing    A pair (a, b) with a ≥ 0 and b < 0, or a < 0 and b ≥ 0.
              Exact zeros count as non-negative.


Window Behaviour
----------------

The window is FIFO with capacity N = 1024: once full, each new sample
evicts the oldest one. `ready()` is true only when it holds EXACTLY N
samples. The driver reads the features and calls `reset()`, so frames do
not overlap and a partially refilled window is never reported.
*/

/// Features of one completed analysis frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameFeatures {
    pub rms: f32,
    pub zcr: f32,
}

pub struct FeatureAccumulator {
    window: VecDeque<f32>,
}

impl FeatureAccumulator {
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(FRAME_SIZE),
        }
    }

    /// Fold a stereo pair to mid and append it, evicting the oldest sample when full.
    ///
    /// For mono input pass the same sample twice.
    #[inline]
    pub fn push_sample(&mut self, left: f32, right: f32) {
        if self.window.len() == FRAME_SIZE {
            self.window.pop_front();
        }
        self.window.push_back(0.5 * (left + right));
    }

    /// True once exactly `FRAME_SIZE` samples are buffered.
    pub fn ready(&self) -> bool {
        self.window.len() == FRAME_SIZE
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Root-mean-square of the window; 0 when empty.
    pub fn rms(&self) -> f32 {
        if self.window.is_empty() {
            return 0.0;
        }
        // Accumulate in f64: 1024 squares in f32 lose low bits on quiet input.
        let sum: f64 = self
            .window
            .iter()
            .map(|&x| f64::from(x) * f64::from(x))
            .sum();
        (sum / self.window.len() as f64).sqrt() as f32
    }

    /// Fraction of adjacent pairs that change sign; 0 for fewer than two samples.
    pub fn zcr(&self) -> f32 {
        if self.window.len() < 2 {
            return 0.0;
        }
        let crossings = self
            .window
            .iter()
            .zip(self.window.iter().skip(1))
            .filter(|&(&a, &b)| (a >= 0.0) != (b >= 0.0))
            .count();
        crossings as f32 / (self.window.len() - 1) as f32
    }

    pub fn features(&self) -> FrameFeatures {
        FrameFeatures {
            rms: self.rms(),
            zcr: self.zcr(),
        }
    }
}

impl Default for FeatureAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
