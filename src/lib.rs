pub mod analysis; // Frame-based loudness / zero-crossing features
pub mod control; // Controller contract and parameter messages
pub mod dsp;
pub mod error;
pub mod io;
pub mod runtime; // Block driver tying features, controller and engine together
pub mod sequencing; // Tempo sync

pub use analysis::{FeatureAccumulator, FrameFeatures};
pub use control::{Controller, NoOpController};
pub use dsp::{LfoShape, OnePoleSmoother, Tremolo, TremoloParams};
pub use runtime::Session;

/// Fallback sample rate for any non-positive rate handed to a setter.
pub const DEFAULT_SAMPLE_RATE: f64 = 48_000.0;
/// Time constant (seconds) the engine uses for rate and depth smoothing.
pub const DEFAULT_SMOOTHING_TIME: f32 = 0.01;
/// Samples per analysis frame.
pub const FRAME_SIZE: usize = 1024;
/// Frames per block when a session walks a whole buffer.
pub const BLOCK_FRAMES: usize = 512;
/// Lowest LFO rate a setter will accept.
pub const MIN_RATE_HZ: f32 = 1e-4;
pub(crate) const MIN_TIME: f32 = 1e-6;
