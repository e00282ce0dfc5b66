// Purpose - external interfaces, file formats

pub mod wav;

pub use wav::{read_wav, write_wav};

/// Interleaved, normalized audio plus the format needed to interpret it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioData {
    pub sample_rate: u32,
    pub channels: u16,
    /// Interleaved samples, conventionally in [-1.0, 1.0]
    pub samples: Vec<f32>,
}

impl AudioData {
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels,
            samples,
        }
    }

    /// Number of complete frames.
    pub fn frames(&self) -> usize {
        match self.channels {
            0 => 0,
            ch => self.samples.len() / usize::from(ch),
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / f64::from(self.sample_rate)
    }

    /// A short stereo test signal: a quiet 220/330 Hz dyad under a
    /// raised-cosine swell. Used when no input file exists.
    pub fn test_pad(seconds: f32, sample_rate: u32) -> Self {
        const LEFT_HZ: f32 = 220.0;
        const RIGHT_HZ: f32 = 330.0;
        const LEVEL: f32 = 0.2;

        let sr = sample_rate.max(1) as f32;
        let frames = ((seconds * sr) as usize).max(1);
        let mut samples = Vec::with_capacity(frames * 2);

        for i in 0..frames {
            let t = i as f32 / sr;
            let swell = 0.5 * (1.0 - (std::f32::consts::TAU * (t / seconds).min(1.0)).cos());
            samples.push(LEVEL * swell * (std::f32::consts::TAU * LEFT_HZ * t).sin());
            samples.push(LEVEL * swell * (std::f32::consts::TAU * RIGHT_HZ * t).sin());
        }

        Self::new(sample_rate, 2, samples)
    }
}
