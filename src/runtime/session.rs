use tracing::{debug, trace};

use crate::{
    analysis::{FeatureAccumulator, FrameFeatures},
    control::{Controller, NoOpController, ParamReceiver},
    dsp::Tremolo,
    BLOCK_FRAMES,
};

/// One processing run: engine, analysis window, controller and frame clock.
pub struct Session<C: Controller = NoOpController> {
    tremolo: Tremolo,
    features: FeatureAccumulator,
    controller: C,
    channels: usize,
    frames_analyzed: u64,
    frames_reported: u64,
}

impl Session<NoOpController> {
    pub fn new(tremolo: Tremolo, channels: usize) -> Self {
        Self::with_controller(tremolo, channels, NoOpController)
    }
}

impl<C: Controller> Session<C> {
    pub fn with_controller(tremolo: Tremolo, channels: usize, controller: C) -> Self {
        debug!(
            channels,
            sample_rate = tremolo.sample_rate(),
            "session started"
        );
        Self {
            tremolo,
            features: FeatureAccumulator::new(),
            controller,
            channels,
            frames_analyzed: 0,
            frames_reported: 0,
        }
    }

    /// Feed the dry block to the analysis window and run the controller on
    /// every frame that completes.
    ///
    /// Mono blocks are pushed as (x, x); wider blocks use their first two
    /// channels. `on_frame` receives the elapsed time and the features of
    /// each completed frame, after the controller has been applied.
    pub fn analyze_block<F>(&mut self, block: &[f32], mut on_frame: F)
    where
        F: FnMut(f64, &FrameFeatures),
    {
        if self.channels == 0 {
            return;
        }
        let dt = 1.0 / self.tremolo.sample_rate();

        for frame in block.chunks_exact(self.channels) {
            let left = frame[0];
            let right = if self.channels == 1 { left } else { frame[1] };
            self.features.push_sample(left, right);

            if self.features.ready() {
                let time = self.frames_analyzed as f64 * dt;
                let features = self.features.features();
                self.run_controller(time, &features);
                self.features.reset();
                self.frames_reported += 1;
                on_frame(time, &features);
            }

            self.frames_analyzed += 1;
        }
    }

    fn run_controller(&mut self, time: f64, features: &FrameFeatures) {
        let mut rate_hz = self.tremolo.rate_hz();
        let mut depth = self.tremolo.depth();
        self.controller
            .update(time, features.rms, features.zcr, &mut rate_hz, &mut depth);
        self.tremolo.set_rate_hz(rate_hz);
        self.tremolo.set_depth(depth);

        trace!(
            time,
            rms = features.rms,
            zcr = features.zcr,
            rate_hz = self.tremolo.rate_hz(),
            depth = self.tremolo.depth(),
            "analysis frame"
        );
    }

    /// Run the engine over the block in place.
    pub fn render_block(&mut self, block: &mut [f32]) {
        self.tremolo.process(block, self.channels);
    }

    /// Analyze the dry block, then render it.
    pub fn process_block(&mut self, block: &mut [f32]) {
        self.analyze_block(block, |_, _| {});
        self.render_block(block);
    }

    /// Walk a whole interleaved buffer in `BLOCK_FRAMES`-frame blocks.
    pub fn process_buffer(&mut self, interleaved: &mut [f32]) {
        if self.channels == 0 {
            return;
        }
        for block in interleaved.chunks_mut(BLOCK_FRAMES * self.channels) {
            self.process_block(block);
        }
        debug!(
            frames = self.frames_analyzed,
            analysis_frames = self.frames_reported,
            "buffer processed"
        );
    }

    /// Apply every pending parameter message. Call between blocks.
    pub fn apply_messages<R: ParamReceiver + ?Sized>(&mut self, receiver: &mut R) -> usize {
        receiver.drain_into(&mut self.tremolo)
    }

    /// Seconds of audio analyzed so far.
    pub fn elapsed_seconds(&self) -> f64 {
        self.frames_analyzed as f64 / self.tremolo.sample_rate()
    }

    /// Number of analysis frames that have reached the controller.
    pub fn analysis_frames(&self) -> u64 {
        self.frames_reported
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn tremolo(&self) -> &Tremolo {
        &self.tremolo
    }

    pub fn tremolo_mut(&mut self) -> &mut Tremolo {
        &mut self.tremolo
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }
}
