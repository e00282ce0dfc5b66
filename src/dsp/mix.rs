//! Wet/dry blending and output clamping.

/*
Wet/Dry Mixing
==============

An effect's output is a blend of the untouched input (dry) and the processed
signal (wet):

    output = dry × (1 - wet) + processed × wet

  wet = 0.0  →  input passes through unchanged
  wet = 0.5  →  half-strength effect
  wet = 1.0  →  fully processed

For a tremolo, processed = input × gain, so the blend simplifies to

    output = input × (1 - wet + wet × gain)

which means wet also scales the effective depth: wet = 0.5 with depth = 1.0
dips the signal to 50%, never to silence.

The weights sum to 1.0, so the mix never boosts a signal that the gain
stage did not boost. Results are still clamped to [-1.0, +1.0] before they
are written back, because the INPUT is not required to be in range.
*/

/// Blend dry and wet samples using a linear crossfade.
///
/// output = (dry × (1-mix)) + (wet × mix)
#[inline]
pub fn blend_dry_wet(dry: f32, wet: f32, mix: f32) -> f32 {
    dry * (1.0 - mix) + wet * mix
}

/// Clamp a sample to the normalized [-1.0, +1.0] range.
#[inline]
pub fn clamp_output(sample: f32) -> f32 {
    sample.clamp(-1.0, 1.0)
}

/// Clamp a control value to [0.0, 1.0].
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
