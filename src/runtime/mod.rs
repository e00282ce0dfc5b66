//! Block driver for offline and real-time use.
//!
//! A [`Session`] owns the engine, the feature accumulator and a controller,
//! and runs the analysis/control/render cycle one block at a time.
//!
//! # Example
//!
//! ```
//! use smart_tremolo::{control::LoudnessFollower, Session, TremoloParams};
//!
//! let tremolo = TremoloParams::default().build(44_100.0);
//! let mut session = Session::with_controller(tremolo, 2, LoudnessFollower::default());
//!
//! let mut audio = vec![0.25_f32; 2 * 4096];
//! session.process_buffer(&mut audio);
//! assert!(session.elapsed_seconds() > 0.09);
//! ```

mod session;

pub use session::Session;
