use std::fmt;

use crate::error::SyncError;

/// Length of one LFO cycle as a rational fraction of a whole note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteDivision {
    pub numerator: u32,
    /// 4 = quarter, 8 = eighth, etc.
    pub denominator: u32,
}

impl NoteDivision {
    pub const WHOLE: NoteDivision = NoteDivision::new(1, 1);
    pub const HALF: NoteDivision = NoteDivision::new(1, 2);
    pub const QUARTER: NoteDivision = NoteDivision::new(1, 4);
    pub const EIGHTH: NoteDivision = NoteDivision::new(1, 8);
    pub const SIXTEENTH: NoteDivision = NoteDivision::new(1, 16);

    const SUPPORTED: [(&'static str, NoteDivision); 5] = [
        ("1", NoteDivision::WHOLE),
        ("1/2", NoteDivision::HALF),
        ("1/4", NoteDivision::QUARTER),
        ("1/8", NoteDivision::EIGHTH),
        ("1/16", NoteDivision::SIXTEENTH),
    ];

    pub const fn new(numerator: u32, denominator: u32) -> Self {
        NoteDivision {
            numerator,
            denominator,
        }
    }

    /// Quarter-note beats in one cycle: a whole note is 4, a sixteenth 0.25.
    pub fn beats_per_cycle(&self) -> f32 {
        4.0 * self.numerator as f32 / self.denominator as f32
    }

    /// Accepts exactly `1`, `1/2`, `1/4`, `1/8` or `1/16`.
    pub fn parse(s: &str) -> Result<Self, SyncError> {
        Self::SUPPORTED
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, division)| division)
            .ok_or_else(|| SyncError::UnsupportedDivision(s.to_string()))
    }
}

impl fmt::Display for NoteDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_per_cycle() {
        assert_eq!(NoteDivision::WHOLE.beats_per_cycle(), 4.0);
        assert_eq!(NoteDivision::HALF.beats_per_cycle(), 2.0);
        assert_eq!(NoteDivision::QUARTER.beats_per_cycle(), 1.0);
        assert_eq!(NoteDivision::EIGHTH.beats_per_cycle(), 0.5);
        assert_eq!(NoteDivision::SIXTEENTH.beats_per_cycle(), 0.25);
    }

    #[test]
    fn test_parse_supported() {
        assert_eq!(NoteDivision::parse("1"), Ok(NoteDivision::WHOLE));
        assert_eq!(NoteDivision::parse("1/8"), Ok(NoteDivision::EIGHTH));
        assert_eq!(NoteDivision::parse("1/16"), Ok(NoteDivision::SIXTEENTH));
    }

    #[test]
    fn test_parse_rejects_others() {
        for s in ["1/3", "2/4", "1/32", "", " 1/8", "quarter"] {
            assert_eq!(
                NoteDivision::parse(s),
                Err(SyncError::UnsupportedDivision(s.to_string())),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_names() {
        for (name, division) in NoteDivision::SUPPORTED {
            assert_eq!(division.to_string(), name);
        }
    }
}
