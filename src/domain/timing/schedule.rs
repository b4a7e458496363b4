//! Per-token durations and pulse shaping

use std::fmt;
use std::time::Duration as StdDuration;

use crate::domain::morse::MorseToken;

use super::unit_duration::UnitDuration;

/// Units a dot is held on
pub const DOT_UNITS: u32 = 1;
/// Units a dash is held on
pub const DASH_UNITS: u32 = 3;
/// Units of silence for a word gap
pub const WORD_GAP_UNITS: u32 = 5;
/// Default units of silence between letters
pub const DEFAULT_LETTER_GAP_UNITS: u32 = 1;

/// How a mark is rendered on the output device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PulseShape {
    /// Held on for the whole mark (audio)
    #[default]
    Steady,
    /// On for the first half, off for the second half (light)
    Blink,
}

impl PulseShape {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Steady => "steady",
            Self::Blink => "blink",
        }
    }
}

impl fmt::Display for PulseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Timing table derived from a unit duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub unit: UnitDuration,
    pub letter_gap_units: u32,
}

impl Timing {
    /// Timing with the default letter gap
    pub const fn new(unit: UnitDuration) -> Self {
        Self {
            unit,
            letter_gap_units: DEFAULT_LETTER_GAP_UNITS,
        }
    }

    /// Override the letter gap length
    pub const fn with_letter_gap_units(mut self, units: u32) -> Self {
        self.letter_gap_units = units;
        self
    }

    /// How long a token occupies the timeline
    pub const fn duration_of(&self, token: MorseToken) -> StdDuration {
        let units = match token {
            MorseToken::Dot => DOT_UNITS,
            MorseToken::Dash => DASH_UNITS,
            MorseToken::LetterGap => self.letter_gap_units,
            MorseToken::WordGap => WORD_GAP_UNITS,
        };
        self.unit.times(units)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(UnitDuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> StdDuration {
        StdDuration::from_millis(n)
    }

    #[test]
    fn default_durations() {
        let timing = Timing::default();
        assert_eq!(timing.duration_of(MorseToken::Dot), ms(200));
        assert_eq!(timing.duration_of(MorseToken::Dash), ms(600));
        assert_eq!(timing.duration_of(MorseToken::LetterGap), ms(200));
        assert_eq!(timing.duration_of(MorseToken::WordGap), ms(1000));
    }

    #[test]
    fn letter_gap_is_configurable() {
        let timing = Timing::default().with_letter_gap_units(3);
        assert_eq!(timing.duration_of(MorseToken::LetterGap), ms(600));
        assert_eq!(timing.duration_of(MorseToken::Dot), ms(200));
    }

    #[test]
    fn scales_with_unit() {
        let unit = UnitDuration::from_millis(50).unwrap();
        let timing = Timing::new(unit);
        assert_eq!(timing.duration_of(MorseToken::Dash), ms(150));
        assert_eq!(timing.duration_of(MorseToken::WordGap), ms(250));
    }

    #[test]
    fn word_gap_of_huge_unit_does_not_overflow() {
        let unit = UnitDuration::from_millis(4_000_000_000_000_000_000).unwrap();
        let timing = Timing::new(unit);
        assert_eq!(timing.duration_of(MorseToken::WordGap), ms(u64::MAX));
    }

    #[test]
    fn pulse_shape_display() {
        assert_eq!(PulseShape::Steady.to_string(), "steady");
        assert_eq!(PulseShape::Blink.to_string(), "blink");
        assert_eq!(PulseShape::default(), PulseShape::Steady);
    }
}
