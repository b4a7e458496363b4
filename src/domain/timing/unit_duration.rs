//! Unit duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::UnitParseError;

/// Default unit duration (200 milliseconds)
pub const DEFAULT_UNIT_MS: u64 = 200;

/// Base time unit all symbol durations are derived from.
/// Immutable and validated on creation; never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitDuration {
    milliseconds: u64,
}

impl UnitDuration {
    /// Create a unit from milliseconds. Returns None for zero.
    pub const fn from_millis(ms: u64) -> Option<Self> {
        if ms == 0 {
            None
        } else {
            Some(Self { milliseconds: ms })
        }
    }

    /// Default unit (200ms)
    pub const fn default_unit() -> Self {
        Self {
            milliseconds: DEFAULT_UNIT_MS,
        }
    }

    /// Get the unit in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// The unit multiplied by a whole number of units.
    /// Saturates instead of overflowing for absurdly long units.
    pub const fn times(&self, units: u32) -> StdDuration {
        StdDuration::from_millis(self.milliseconds.saturating_mul(units as u64))
    }
}

impl FromStr for UnitDuration {
    type Err = UnitParseError;

    /// Parse a unit string.
    /// Supported formats: "200", "200ms", "1s", "1s500ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || UnitParseError { input: s.to_string() };
        let input = s.trim().to_lowercase();

        // Bare number means milliseconds
        if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
            let ms: u64 = input.parse().map_err(|_| err())?;
            return Self::from_millis(ms).ok_or_else(err);
        }

        let mut total_ms: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;
        let mut seen_ms = false;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }
            if current_num.is_empty() || seen_ms {
                return Err(err());
            }

            let value: u64 = current_num.parse().map_err(|_| err())?;
            current_num.clear();

            match ch {
                's' if !found_any => {
                    total_ms = value.checked_mul(1000).ok_or_else(err)?;
                }
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    total_ms = total_ms.checked_add(value).ok_or_else(err)?;
                    seen_ms = true;
                }
                _ => return Err(err()),
            }
            found_any = true;
        }

        // Leftover digits after a suffix (e.g. "1s5")
        if !current_num.is_empty() || !found_any {
            return Err(err());
        }

        Self::from_millis(total_ms).ok_or_else(err)
    }
}

impl fmt::Display for UnitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.milliseconds / 1000;
        let ms = self.milliseconds % 1000;

        if secs == 0 {
            write!(f, "{}ms", ms)
        } else if ms == 0 {
            write!(f, "{}s", secs)
        } else {
            write!(f, "{}s{}ms", secs, ms)
        }
    }
}

impl Default for UnitDuration {
    fn default() -> Self {
        Self::default_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_number_as_millis() {
        let u: UnitDuration = "200".parse().unwrap();
        assert_eq!(u.as_millis(), 200);
    }

    #[test]
    fn parse_millis_suffix() {
        let u: UnitDuration = "120ms".parse().unwrap();
        assert_eq!(u.as_millis(), 120);
    }

    #[test]
    fn parse_seconds() {
        let u: UnitDuration = "1s".parse().unwrap();
        assert_eq!(u.as_millis(), 1000);
    }

    #[test]
    fn parse_seconds_and_millis() {
        let u: UnitDuration = "1s500ms".parse().unwrap();
        assert_eq!(u.as_millis(), 1500);
    }

    #[test]
    fn parse_case_and_whitespace() {
        let u: UnitDuration = "  80MS ".parse().unwrap();
        assert_eq!(u.as_millis(), 80);
    }

    #[test]
    fn parse_invalid() {
        for input in ["", "0", "0ms", "ms", "fast", "10m", "1s5", "5ms1s", "1s1s", "-5"] {
            assert!(input.parse::<UnitDuration>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn display_forms() {
        assert_eq!(UnitDuration::from_millis(200).unwrap().to_string(), "200ms");
        assert_eq!(UnitDuration::from_millis(2000).unwrap().to_string(), "2s");
        assert_eq!(UnitDuration::from_millis(1250).unwrap().to_string(), "1s250ms");
    }

    #[test]
    fn display_parses_back() {
        for ms in [1, 200, 1000, 1250] {
            let u = UnitDuration::from_millis(ms).unwrap();
            assert_eq!(u.to_string().parse::<UnitDuration>().unwrap(), u);
        }
    }

    #[test]
    fn zero_is_rejected() {
        assert!(UnitDuration::from_millis(0).is_none());
    }

    #[test]
    fn multiples() {
        let u = UnitDuration::default();
        assert_eq!(u.as_millis(), 200);
        assert_eq!(u.times(3), StdDuration::from_millis(600));
    }

    #[test]
    fn huge_unit_saturates() {
        let u: UnitDuration = "4000000000000000000".parse().unwrap();
        assert_eq!(u.times(1), StdDuration::from_millis(4_000_000_000_000_000_000));
        assert_eq!(u.times(5), StdDuration::from_millis(u64::MAX));
    }
}
