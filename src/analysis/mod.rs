//! Per-frame signal features for the control loop.
//!
//! The accumulator folds stereo input to mono and, once a full analysis
//! frame has arrived, reports loudness (RMS) and zero-crossing rate.

/// Sliding-window RMS and zero-crossing rate.
pub mod features;

pub use features::{FeatureAccumulator, FrameFeatures};
