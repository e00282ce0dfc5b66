/// Scripted depth ramp used by `--demo`.
///
/// Inside the window depth rises from 20% to 100% of `base`. The first
/// query past the window restores `base` once; before and after that,
/// depth is left to the controller.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepthRamp {
    base: f32,
    start: f64,
    end: f64,
    restored: bool,
}

impl DepthRamp {
    pub(crate) const START_SECONDS: f64 = 5.0;
    pub(crate) const END_SECONDS: f64 = 8.0;

    pub(crate) fn new(base: f32) -> Self {
        Self {
            base,
            start: Self::START_SECONDS,
            end: Self::END_SECONDS,
            restored: false,
        }
    }

    /// Depth to apply at `time`, or `None` when the ramp has nothing to say.
    pub(crate) fn depth_at(&mut self, time: f64) -> Option<f32> {
        if time < self.start {
            None
        } else if time <= self.end {
            let t = ((time - self.start) / (self.end - self.start)) as f32;
            Some(self.base * (0.2 + 0.8 * t))
        } else if !self.restored {
            self.restored = true;
            Some(self.base)
        } else {
            None
        }
    }
}
