//! External control of the tremolo.
//!
//! A [`Controller`] is offered the features of every completed analysis
//! frame and may rewrite the target rate and depth. [`ParamMessage`]s carry
//! parameter changes from another thread into the one that runs the engine.

/// The per-frame controller contract and stock controllers.
pub mod controller;
/// Parameter change messages and their receivers.
pub mod message;

pub use controller::{from_fn, Controller, FnController, LoudnessFollower, NoOpController};
#[cfg(feature = "rtrb")]
pub use message::param_channel;
pub use message::{ParamMessage, ParamReceiver};
