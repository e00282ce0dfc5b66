use smart_tremolo::FrameFeatures;
use tracing::info;

/// Per-second averages of the analysis frames, for `--analyze`.
#[derive(Debug, Default)]
pub(crate) struct SecondReport {
    last_second: u64,
    rms_sum: f64,
    zcr_sum: f64,
    count: u32,
}

/// One closed reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowAverage {
    pub from: u64,
    pub to: u64,
    pub rms: f64,
    pub zcr: f64,
    pub frames: u32,
}

impl SecondReport {
    pub(crate) fn record(&mut self, features: &FrameFeatures) {
        self.rms_sum += f64::from(features.rms);
        self.zcr_sum += f64::from(features.zcr);
        self.count += 1;
    }

    /// Close the window once `elapsed` has crossed into a new second.
    pub(crate) fn tick(&mut self, elapsed: f64) -> Option<WindowAverage> {
        let second = elapsed.floor() as u64;
        if second == self.last_second {
            return None;
        }
        let avg = (self.count > 0).then(|| WindowAverage {
            from: self.last_second,
            to: second,
            rms: self.rms_sum / f64::from(self.count),
            zcr: self.zcr_sum / f64::from(self.count),
            frames: self.count,
        });
        *self = Self {
            last_second: second,
            ..Self::default()
        };
        avg
    }

    /// `tick` and log the closed window, if any.
    pub(crate) fn log_tick(&mut self, elapsed: f64) {
        if let Some(w) = self.tick(elapsed) {
            info!(
                "analyze t={}s..{}s avg RMS={:.4} avg ZCR={:.4} ({} frames)",
                w.from, w.to, w.rms, w.zcr, w.frames
            );
        }
    }
}
