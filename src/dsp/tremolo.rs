//! LFO-driven amplitude modulation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{
        lfo::{offset_phase, wrap_phase, LfoShape},
        mix::{blend_dry_wet, clamp_output, clamp_unit},
        smoother::OnePoleSmoother,
        DENORMAL_GUARD,
    },
    DEFAULT_SAMPLE_RATE, DEFAULT_SMOOTHING_TIME, MIN_RATE_HZ,
};

/*
Tremolo Engine
==============

Per audio frame the engine runs these steps:

  1. rate  ← rate smoother (target rate)       increment = rate / fs
  2. depth ← depth smoother (target depth)
  3. left phase = phase, right phase = (phase + stereo offset) mod 1
  4. lfo = shape(phase) per channel, in [0, 1]
  5. gain = 1 - depth × lfo
  6. out = clamp((1 - wet) × in + wet × in × gain)
  7. phase += increment, wrapped into [0, 1)

There is ONE phase accumulator. The stereo offset is applied only when the
right channel reads it, so both channels always run at exactly the same
rate and can never drift apart.

    depth = 0.0   gain ≡ 1, audio untouched
    depth = 1.0   gain swings all the way to 0 at the LFO peak

Rate and depth go through 10 ms smoothers, so a controller rewriting them
once per analysis frame produces glides, not steps. Wet, stereo offset and
shape apply immediately.


In-Place Contract
-----------------

`process` reads and overwrites the caller's interleaved buffer. That is the
primary mode of operation: the same memory is input and output, and nothing
is allocated. Frames are `channels` values wide (L then R for stereo); only
the first two channels of a frame are modulated.


Threading
---------

The engine holds plain fields and does no synchronization. Setters and
`process` must run on the same thread, or parameter changes must be handed
over with an explicit happens-before (see `control::message` for a
single-producer ring buffer that does that).
*/

const MIN_PHASE_INCREMENT: f32 = 1e-9;
const MAX_STEREO_PHASE_DEG: f32 = 180.0;

/// Plain-data snapshot of the user-facing tremolo parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TremoloParams {
    pub rate_hz: f32,
    pub depth: f32,
    pub wet: f32,
    pub stereo_phase_deg: f32,
    pub shape: LfoShape,
}

impl Default for TremoloParams {
    fn default() -> Self {
        Self {
            rate_hz: 5.0,
            depth: 0.6,
            wet: 1.0,
            stereo_phase_deg: 0.0,
            shape: LfoShape::Sine,
        }
    }
}

impl TremoloParams {
    /// Push every parameter through the engine's setters.
    pub fn apply(&self, tremolo: &mut Tremolo) {
        tremolo.set_rate_hz(self.rate_hz);
        tremolo.set_depth(self.depth);
        tremolo.set_wet(self.wet);
        tremolo.set_stereo_phase_deg(self.stereo_phase_deg);
        tremolo.set_shape(self.shape);
    }

    /// Build an engine at `sample_rate` whose smoothers already sit on these values.
    pub fn build(&self, sample_rate: f64) -> Tremolo {
        let mut tremolo = Tremolo::new();
        self.apply(&mut tremolo);
        tremolo.set_sample_rate(sample_rate);
        tremolo
    }
}

pub struct Tremolo {
    sample_rate: f64,

    // Targets (set by the user or a controller)
    rate_hz: f32,
    depth: f32,
    wet: f32,
    stereo_offset: f32, // fraction of a cycle, 0.0 - 0.5
    shape: LfoShape,

    // Runtime state
    phase: f32, // 0.0 - 1.0
    rate_smoother: OnePoleSmoother,
    depth_smoother: OnePoleSmoother,
}

impl Tremolo {
    pub fn new() -> Self {
        let defaults = TremoloParams::default();
        let mut tremolo = Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            rate_hz: defaults.rate_hz,
            depth: defaults.depth,
            wet: defaults.wet,
            stereo_offset: defaults.stereo_phase_deg / 360.0,
            shape: defaults.shape,
            phase: 0.0,
            rate_smoother: OnePoleSmoother::new(),
            depth_smoother: OnePoleSmoother::new(),
        };
        tremolo.set_sample_rate(DEFAULT_SAMPLE_RATE);
        tremolo
    }

    /// Set the sample rate (non-positive falls back to 48 kHz).
    ///
    /// Re-seeds both smoothers: 10 ms time constant, starting on the current
    /// targets so reconfiguring never causes a ramp.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = if sample_rate > 0.0 {
            sample_rate
        } else {
            DEFAULT_SAMPLE_RATE
        };

        for (smoother, target) in [
            (&mut self.rate_smoother, self.rate_hz),
            (&mut self.depth_smoother, self.depth),
        ] {
            smoother.set_sample_rate(self.sample_rate);
            smoother.set_time_constant(DEFAULT_SMOOTHING_TIME);
            smoother.reset(target);
        }
    }

    /// Modulation depth, clamped to [0, 1]. NaN is ignored.
    pub fn set_depth(&mut self, depth: f32) {
        if depth.is_nan() {
            return;
        }
        self.depth = clamp_unit(depth);
    }

    /// LFO rate in Hz, floored at `MIN_RATE_HZ`. NaN and +∞ are ignored.
    pub fn set_rate_hz(&mut self, rate_hz: f32) {
        if rate_hz.is_nan() || rate_hz == f32::INFINITY {
            return;
        }
        self.rate_hz = rate_hz.max(MIN_RATE_HZ);
    }

    /// Wet/dry balance, clamped to [0, 1]. NaN is ignored.
    pub fn set_wet(&mut self, wet: f32) {
        if wet.is_nan() {
            return;
        }
        self.wet = clamp_unit(wet);
    }

    /// Right-channel phase lead in degrees, clamped to [0, 180]. NaN is ignored.
    pub fn set_stereo_phase_deg(&mut self, degrees: f32) {
        if degrees.is_nan() {
            return;
        }
        self.stereo_offset = degrees.clamp(0.0, MAX_STEREO_PHASE_DEG) / 360.0;
    }

    pub fn set_shape(&mut self, shape: LfoShape) {
        self.shape = shape;
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn rate_hz(&self) -> f32 {
        self.rate_hz
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn wet(&self) -> f32 {
        self.wet
    }

    pub fn stereo_phase_deg(&self) -> f32 {
        self.stereo_offset * 360.0
    }

    /// Right-channel offset as a fraction of a cycle (0.0 - 0.5).
    pub fn stereo_offset(&self) -> f32 {
        self.stereo_offset
    }

    pub fn shape(&self) -> LfoShape {
        self.shape
    }

    /// Current oscillator phase, always in [0, 1).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Snapshot of the current targets.
    pub fn params(&self) -> TremoloParams {
        TremoloParams {
            rate_hz: self.rate_hz,
            depth: self.depth,
            wet: self.wet,
            stereo_phase_deg: self.stereo_phase_deg(),
            shape: self.shape,
        }
    }

    /// Modulate `channels`-wide interleaved frames in place.
    ///
    /// Mono uses the left gain only. For two or more channels the first two
    /// values of each frame are modulated as L/R and any further channels
    /// pass through. A trailing partial frame is left untouched, and
    /// `channels == 0` is a no-op.
    pub fn process(&mut self, interleaved: &mut [f32], channels: usize) {
        match channels {
            0 => {}
            1 => {
                for sample in interleaved.iter_mut() {
                    let (gain, _) = self.next_gains();
                    *sample = self.modulate(*sample, gain);
                }
            }
            _ => {
                for frame in interleaved.chunks_exact_mut(channels) {
                    let (gain_l, gain_r) = self.next_gains();
                    frame[0] = self.modulate(frame[0], gain_l);
                    frame[1] = self.modulate(frame[1], gain_r);
                }
            }
        }
    }

    /// Steps 1-5 and 7: smooth, evaluate both channels, advance the phase.
    #[inline]
    fn next_gains(&mut self) -> (f32, f32) {
        let rate = self.rate_smoother.process(self.rate_hz);
        let increment = ((f64::from(rate) / self.sample_rate) as f32).max(MIN_PHASE_INCREMENT);
        let depth = self.depth_smoother.process(self.depth);

        let lfo_l = self.shape.value_at(self.phase);
        let lfo_r = self
            .shape
            .value_at(offset_phase(self.phase, self.stereo_offset));

        self.phase = wrap_phase(self.phase + increment);

        (1.0 - depth * lfo_l, 1.0 - depth * lfo_r)
    }

    #[inline]
    fn modulate(&self, input: f32, gain: f32) -> f32 {
        let x = input + DENORMAL_GUARD;
        clamp_output(blend_dry_wet(x, x * gain, self.wet))
    }
}

impl Default for Tremolo {
    fn default() -> Self {
        Self::new()
    }
}
