//! Error types for the fallible collaborators around the engine.
//!
//! The DSP core never fails; only file I/O and tempo-sync parsing do.

use std::io;
use thiserror::Error;

/// WAV read/write error
#[derive(Error, Debug)]
pub enum WavError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed container or truncated data
    #[error("WAV decode error: {0}")]
    Decode(#[source] hound::Error),

    /// Sample encoding other than integer PCM or 32-bit float
    #[error("Unsupported WAV encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Unsupported bit depth: {0} bits")]
    UnsupportedBitDepth(u16),

    /// Only mono and stereo are processed
    #[error("Unsupported channel count: {0} (expected 1 or 2)")]
    UnsupportedChannels(u16),

    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),
}

// hound folds I/O failures and unsupported encodings into its own error;
// split them back out so callers can tell a missing file from a bad one.
impl From<hound::Error> for WavError {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(io) => WavError::Io(io),
            hound::Error::Unsupported => {
                WavError::UnsupportedEncoding("not PCM or IEEE float".to_string())
            }
            other => WavError::Decode(other),
        }
    }
}

/// Result type for WAV operations
pub type Result<T, E = WavError> = std::result::Result<T, E>;

/// Error parsing a tempo-sync setting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    /// Text did not look like `bpm:<tempo>,div:<division>`
    #[error("Bad rate-sync format {0:?}, expected bpm:120,div:1/8")]
    Format(String),

    #[error("Invalid tempo: {0} BPM")]
    InvalidTempo(f32),

    /// Division outside 1, 1/2, 1/4, 1/8, 1/16
    #[error("Unsupported division: {0}")]
    UnsupportedDivision(String),
}
