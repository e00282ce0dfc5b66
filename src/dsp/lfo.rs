//! Modulation oscillator shapes.

use std::{convert::Infallible, f32::consts::TAU, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Tremolo LFO Shapes
==================

The tremolo's oscillator runs at control rate (typically 0.5-15 Hz) and
drives the gain of the audio. Every shape here is UNIPOLAR: it outputs a
value in [0.0, 1.0], which the engine turns into a gain with

    gain = 1 - depth * lfo

so lfo = 0 leaves the audio untouched and lfo = 1 pulls it down by `depth`.

Vocabulary
----------

  phase       Position within one cycle, in [0.0, 1.0). 0.25 is a quarter of
              the way through, independent of the LFO rate.

  increment   How far the phase moves per sample: rate_hz / sample_rate.
              At 5 Hz and 48 kHz that is ~0.000104 per sample.

  wrap        Once the phase reaches 1.0 it starts over at 0.0.

  unipolar    Output only in [0.0, 1.0]. Convert from a bipolar [-1, +1]
              signal with (x + 1) * 0.5.


Shapes
------

SINE
    0.5 * (1 + sin(2π·phase))
    Smooth, the classic amp tremolo.

TRIANGLE
    Linear ramp -1 → +1 over the first half cycle, back down over the
    second, rescaled to [0, 1]. Constant rate of change, a little more
    "mechanical" than sine.

SQUARE
    1 while sin(2π·phase) ≥ 0, otherwise 0. Hard on/off chopping.

SQUARE-SOFT
    0.5 * (1 + tanh(3 · sin(2π·phase)))
    tanh squashes the sine towards ±1, giving a square with rounded edges.
    Keeps the choppy character without the clicks of a hard square.

    Level
      1.0 ┤  ╭────╮        ╭────╮
          │ ╱      ╲      ╱      ╲
      0.0 ┼╯────────╰────╯────────╰──→ phase
          0        0.5   1


Stereo Offset
-------------

The right channel reads the same oscillator at (phase + offset) mod 1.
An offset of 0.5 (180°) puts the right channel's peak on the left
channel's trough, so the sound appears to bounce between speakers.
*/

/// Waveform selection for the tremolo oscillator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LfoShape {
    #[default]
    Sine,
    Triangle,
    Square,
    SquareSoft,
}

impl LfoShape {
    /// Case-insensitive name lookup. Unknown names give `Sine`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sine" => Self::Sine,
            "triangle" => Self::Triangle,
            "square" => Self::Square,
            "square-soft" => Self::SquareSoft,
            _ => Self::Sine,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::SquareSoft => "square-soft",
        }
    }

    /// Unipolar oscillator value at `phase`.
    #[inline]
    pub fn value_at(self, phase: f32) -> f32 {
        match self {
            Self::Sine => sine(phase),
            Self::Triangle => triangle(phase),
            Self::Square => square(phase),
            Self::SquareSoft => square_soft(phase),
        }
    }
}

impl FromStr for LfoShape {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for LfoShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
pub fn sine(phase: f32) -> f32 {
    bipolar_to_unipolar((TAU * phase).sin())
}

#[inline]
pub fn triangle(phase: f32) -> f32 {
    let t = phase % 1.0;
    let tri = if t < 0.5 { t * 4.0 - 1.0 } else { 3.0 - t * 4.0 };
    bipolar_to_unipolar(tri)
}

#[inline]
pub fn square(phase: f32) -> f32 {
    if (TAU * phase).sin() >= 0.0 {
        1.0
    } else {
        0.0
    }
}

#[inline]
pub fn square_soft(phase: f32) -> f32 {
    bipolar_to_unipolar((3.0 * (TAU * phase).sin()).tanh())
}

/// Convert bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

/// Bring a non-negative phase back into [0.0, 1.0).
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    if phase >= 1.0 {
        phase - phase.floor()
    } else {
        phase
    }
}

/// Read the oscillator `offset` cycles ahead of `phase`, wrapped into [0.0, 1.0).
#[inline]
pub fn offset_phase(phase: f32, offset: f32) -> f32 {
    (phase + offset) % 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: [LfoShape; 4] = [
        LfoShape::Sine,
        LfoShape::Triangle,
        LfoShape::Square,
        LfoShape::SquareSoft,
    ];

    fn sweep() -> impl Iterator<Item = f32> {
        (0..4096).map(|i| i as f32 / 4096.0)
    }

    #[test]
    fn test_shapes_stay_unipolar() {
        for shape in SHAPES {
            for phase in sweep() {
                let v = shape.value_at(phase);
                assert!(
                    (0.0..=1.0).contains(&v),
                    "{} produced {} at phase {}",
                    shape,
                    v,
                    phase
                );
            }
        }
    }

    #[test]
    fn test_square_is_binary() {
        for phase in sweep() {
            let v = square(phase);
            assert!(v == 0.0 || v == 1.0, "square gave {} at {}", v, phase);
        }
    }

    #[test]
    fn test_sine_landmarks() {
        assert!((sine(0.0) - 0.5).abs() < 1e-6);
        assert!((sine(0.25) - 1.0).abs() < 1e-6);
        assert!((sine(0.75) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_landmarks() {
        assert!((triangle(0.0) - 0.0).abs() < 1e-6);
        assert!((triangle(0.25) - 0.5).abs() < 1e-6);
        assert!((triangle(0.5) - 1.0).abs() < 1e-6);
        assert!((triangle(0.75) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_square_soft_is_rounded_square() {
        // Near the peak it saturates close to 1, at the crossings it is 0.5.
        assert!(square_soft(0.25) > 0.99);
        assert!(square_soft(0.75) < 0.01);
        assert!((square_soft(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(LfoShape::parse("SINE"), LfoShape::Sine);
        assert_eq!(LfoShape::parse("Triangle"), LfoShape::Triangle);
        assert_eq!(LfoShape::parse("square"), LfoShape::Square);
        assert_eq!(LfoShape::parse("sQuare-soft"), LfoShape::SquareSoft);
    }

    #[test]
    fn test_parse_unknown_defaults_to_sine() {
        assert_eq!(LfoShape::parse("foo"), LfoShape::Sine);
        assert_eq!(LfoShape::parse(""), LfoShape::Sine);
        assert_eq!("saw".parse::<LfoShape>(), Ok(LfoShape::Sine));
    }

    #[test]
    fn test_name_roundtrips_through_parse() {
        for shape in SHAPES {
            assert_eq!(LfoShape::parse(shape.name()), shape);
        }
    }

    #[test]
    fn test_wrap_phase() {
        assert_eq!(wrap_phase(0.3), 0.3);
        assert_eq!(wrap_phase(1.0), 0.0);
        assert!((wrap_phase(1.25) - 0.25).abs() < 1e-6);
        assert!((wrap_phase(3.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_offset_phase_wraps() {
        assert!((offset_phase(0.75, 0.5) - 0.25).abs() < 1e-6);
        assert_eq!(offset_phase(0.3, 0.0), 0.3);
    }
}
