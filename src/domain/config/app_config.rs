//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::playback::DeviceKind;
use crate::domain::timing::{UnitDuration, DEFAULT_LETTER_GAP_UNITS};

/// Default beep frequency in Hz
pub const DEFAULT_TONE_HZ: u32 = 700;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub unit: Option<String>,
    pub device: Option<String>,
    pub tone_hz: Option<u32>,
    pub letter_gap_units: Option<u32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            unit: Some(UnitDuration::default().to_string()),
            device: Some(DeviceKind::default().to_string()),
            tone_hz: Some(DEFAULT_TONE_HZ),
            letter_gap_units: Some(DEFAULT_LETTER_GAP_UNITS),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            unit: other.unit.or(self.unit),
            device: other.device.or(self.device),
            tone_hz: other.tone_hz.or(self.tone_hz),
            letter_gap_units: other.letter_gap_units.or(self.letter_gap_units),
        }
    }

    /// Get tone frequency, or 700Hz if not set or zero
    pub fn tone_hz_or_default(&self) -> u32 {
        self.tone_hz.filter(|hz| *hz > 0).unwrap_or(DEFAULT_TONE_HZ)
    }

    /// Get letter gap length in units, or 1 if not set
    pub fn letter_gap_units_or_default(&self) -> u32 {
        self.letter_gap_units.unwrap_or(DEFAULT_LETTER_GAP_UNITS)
    }
}
