//! Output device selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidDeviceError;
use crate::domain::timing::PulseShape;

/// All available output devices
pub const ALL_DEVICES: &[DeviceKind] = &[DeviceKind::Beep, DeviceKind::Light, DeviceKind::Silent];

/// Kinds of output device that can render Morse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceKind {
    /// Sine tone through the default audio output
    #[default]
    Beep,
    /// Flashing block in the terminal
    Light,
    /// Keeps time without producing output
    Silent,
}

impl DeviceKind {
    /// Get the human-readable label for this device
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beep => "Audio beep",
            Self::Light => "Terminal light",
            Self::Silent => "Silent",
        }
    }

    /// Pulse shape that keeps this device's marks perceptible
    pub const fn pulse_shape(&self) -> PulseShape {
        match self {
            Self::Light => PulseShape::Blink,
            Self::Beep | Self::Silent => PulseShape::Steady,
        }
    }

    /// Get the string identifier for this device
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beep => "beep",
            Self::Light => "light",
            Self::Silent => "silent",
        }
    }
}

impl FromStr for DeviceKind {
    type Err = InvalidDeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beep" => Ok(Self::Beep),
            "light" => Ok(Self::Light),
            "silent" => Ok(Self::Silent),
            _ => Err(InvalidDeviceError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_devices() {
        for device in ALL_DEVICES {
            assert_eq!(device.as_str().parse::<DeviceKind>().unwrap(), *device);
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("LIGHT".parse::<DeviceKind>().unwrap(), DeviceKind::Light);
        assert_eq!(" Beep ".parse::<DeviceKind>().unwrap(), DeviceKind::Beep);
    }

    #[test]
    fn parse_invalid() {
        let err = "torch".parse::<DeviceKind>().unwrap_err();
        assert_eq!(err.input, "torch");
    }

    #[test]
    fn light_blinks_beep_holds() {
        assert_eq!(DeviceKind::Light.pulse_shape(), PulseShape::Blink);
        assert_eq!(DeviceKind::Beep.pulse_shape(), PulseShape::Steady);
        assert_eq!(DeviceKind::Silent.pulse_shape(), PulseShape::Steady);
    }

    #[test]
    fn default_is_beep() {
        assert_eq!(DeviceKind::default(), DeviceKind::Beep);
    }
}
