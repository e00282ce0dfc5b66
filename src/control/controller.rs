use crate::dsp::mix::clamp_unit;

/// Adaptive control hook, invoked once per completed analysis frame.
///
/// `rate_hz` and `depth` arrive holding the engine's current targets. Any
/// value left in them afterwards is applied through the engine's setters,
/// so out-of-range results are clamped like user input and NaN is ignored.
///
/// Runs on the processing thread: implementations must not block and
/// should not allocate.
pub trait Controller {
    fn update(
        &mut self,
        time_seconds: f64,
        rms: f32,
        zcr: f32,
        rate_hz: &mut f32,
        depth: &mut f32,
    );
}

/// Leaves both parameters untouched. The default when no controller is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpController;

impl Controller for NoOpController {
    fn update(
        &mut self,
        _time_seconds: f64,
        _rms: f32,
        _zcr: f32,
        _rate_hz: &mut f32,
        _depth: &mut f32,
    ) {
    }
}

/// Allow boxed controllers to be chosen at runtime
impl<C: Controller + ?Sized> Controller for Box<C> {
    fn update(
        &mut self,
        time_seconds: f64,
        rms: f32,
        zcr: f32,
        rate_hz: &mut f32,
        depth: &mut f32,
    ) {
        (**self).update(time_seconds, rms, zcr, rate_hz, depth)
    }
}

/// Closure adapter, see [`from_fn`].
pub struct FnController<F>(F);

/// Wrap a closure `(time, rms, zcr, &mut rate, &mut depth)` as a controller.
pub fn from_fn<F>(f: F) -> FnController<F>
where
    F: FnMut(f64, f32, f32, &mut f32, &mut f32),
{
    FnController(f)
}

impl<F> Controller for FnController<F>
where
    F: FnMut(f64, f32, f32, &mut f32, &mut f32),
{
    fn update(
        &mut self,
        time_seconds: f64,
        rms: f32,
        zcr: f32,
        rate_hz: &mut f32,
        depth: &mut f32,
    ) {
        (self.0)(time_seconds, rms, zcr, rate_hz, depth)
    }
}

/// Deepens the tremolo as the music gets louder.
///
/// depth = clamp(base + gain × rms, 0, 1). The rate is left alone.
#[derive(Debug, Clone, Copy)]
pub struct LoudnessFollower {
    pub base: f32,
    pub gain: f32,
}

impl LoudnessFollower {
    pub fn new(base: f32, gain: f32) -> Self {
        Self { base, gain }
    }
}

impl Default for LoudnessFollower {
    fn default() -> Self {
        Self::new(0.2, 1.5)
    }
}

impl Controller for LoudnessFollower {
    fn update(
        &mut self,
        _time_seconds: f64,
        rms: f32,
        _zcr: f32,
        _rate_hz: &mut f32,
        depth: &mut f32,
    ) {
        *depth = clamp_unit(self.base + self.gain * rms);
    }
}
