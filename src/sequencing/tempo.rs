use std::fmt;
use std::str::FromStr;

use super::NoteDivision;
use crate::error::SyncError;

/// An LFO rate locked to a tempo: one cycle per `division` at `bpm`.
///
/// Parses from `bpm:<tempo>,div:<division>`, e.g. `bpm:120,div:1/8`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoSync {
    pub bpm: f32,
    pub division: NoteDivision,
}

impl TempoSync {
    pub fn new(bpm: f32, division: NoteDivision) -> Result<Self, SyncError> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(SyncError::InvalidTempo(bpm));
        }
        Ok(Self { bpm, division })
    }

    /// Cycles per second: (bpm / 60) / beats per cycle.
    pub fn rate_hz(&self) -> f32 {
        (self.bpm / 60.0) / self.division.beats_per_cycle()
    }
}

impl FromStr for TempoSync {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || SyncError::Format(s.to_string());

        let rest = s.strip_prefix("bpm:").ok_or_else(format_err)?;
        let (bpm, div) = rest.split_once(",div:").ok_or_else(format_err)?;
        let bpm: f32 = bpm.trim().parse().map_err(|_| format_err())?;

        Self::new(bpm, NoteDivision::parse(div.trim())?)
    }
}

impl fmt::Display for TempoSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bpm:{},div:{}", self.bpm, self.division)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eighths_at_120() {
        let sync: TempoSync = "bpm:120,div:1/8".parse().unwrap();
        assert_eq!(sync.bpm, 120.0);
        assert_eq!(sync.division, NoteDivision::EIGHTH);
        assert!((sync.rate_hz() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_rate_per_division() {
        let cases = [
            ("1", 0.5),
            ("1/2", 1.0),
            ("1/4", 2.0),
            ("1/16", 8.0),
        ];
        for (div, hz) in cases {
            let sync: TempoSync = format!("bpm:120,div:{div}").parse().unwrap();
            assert!((sync.rate_hz() - hz).abs() < 1e-6, "div {div}");
        }
    }

    #[test]
    fn test_fractional_tempo() {
        let sync: TempoSync = "bpm:90.5,div:1/4".parse().unwrap();
        assert!((sync.rate_hz() - 90.5 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_bad_format() {
        for s in ["", "120,1/8", "bpm:120", "div:1/8,bpm:120", "bpm:fast,div:1/8"] {
            assert_eq!(
                s.parse::<TempoSync>(),
                Err(SyncError::Format(s.to_string())),
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_unsupported_division() {
        assert_eq!(
            "bpm:120,div:1/3".parse::<TempoSync>(),
            Err(SyncError::UnsupportedDivision("1/3".to_string()))
        );
    }

    #[test]
    fn test_invalid_tempo() {
        assert_eq!(
            "bpm:0,div:1/4".parse::<TempoSync>(),
            Err(SyncError::InvalidTempo(0.0))
        );
        assert!(matches!(
            "bpm:-30,div:1/4".parse::<TempoSync>(),
            Err(SyncError::InvalidTempo(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        let sync = TempoSync::new(128.0, NoteDivision::SIXTEENTH).unwrap();
        assert_eq!(sync.to_string(), "bpm:128,div:1/16");
        assert_eq!(sync.to_string().parse::<TempoSync>(), Ok(sync));
    }
}
