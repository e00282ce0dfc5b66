#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::dsp::{LfoShape, Tremolo};

/// A single parameter change, applied between processing blocks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParamMessage {
    RateHz(f32),
    Depth(f32),
    Wet(f32),
    StereoPhaseDeg(f32),
    Shape(LfoShape),
}

impl ParamMessage {
    /// Route the change through the matching (clamping) setter.
    pub fn apply(self, tremolo: &mut Tremolo) {
        match self {
            ParamMessage::RateHz(hz) => tremolo.set_rate_hz(hz),
            ParamMessage::Depth(depth) => tremolo.set_depth(depth),
            ParamMessage::Wet(wet) => tremolo.set_wet(wet),
            ParamMessage::StereoPhaseDeg(deg) => tremolo.set_stereo_phase_deg(deg),
            ParamMessage::Shape(shape) => tremolo.set_shape(shape),
        }
    }
}

pub trait ParamReceiver {
    fn pop(&mut self) -> Option<ParamMessage>;

    /// Apply every pending message in arrival order. Returns how many were applied.
    fn drain_into(&mut self, tremolo: &mut Tremolo) -> usize {
        let mut applied = 0;
        while let Some(msg) = self.pop() {
            msg.apply(tremolo);
            applied += 1;
        }
        applied
    }
}

#[cfg(feature = "rtrb")]
impl ParamReceiver for Consumer<ParamMessage> {
    fn pop(&mut self) -> Option<ParamMessage> {
        Consumer::pop(self).ok()
    }
}

/// Wait-free single-producer/single-consumer channel for parameter changes.
///
/// Keep the producer on the control thread and drain the consumer on the
/// processing thread before each block.
#[cfg(feature = "rtrb")]
pub fn param_channel(capacity: usize) -> (Producer<ParamMessage>, Consumer<ParamMessage>) {
    RingBuffer::new(capacity)
}
