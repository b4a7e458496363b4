//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::morse::MorseString;
use crate::domain::playback::DeviceKind;
use crate::domain::timing::Timing;

/// Morse Signal - translate text to and from Morse code and play it
#[derive(Parser, Debug)]
#[command(name = "morse-signal")]
#[command(version)]
#[command(about = "Translate text to and from Morse code and play it as beeps or flashes")]
#[command(long_about = None)]
pub struct Cli {
    /// Log filter (e.g. warn, debug, morse_signal=trace)
    #[arg(long, global = true, env = "MORSE_SIGNAL_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode text into Morse code
    Encode {
        /// Text to encode (reads stdin when omitted)
        text: Option<String>,
    },
    /// Decode Morse code into text
    Decode {
        /// Morse code using '.', '-', ' ' and '/' (reads stdin when omitted)
        morse: Option<String>,
    },
    /// Play text or Morse code on an output device
    Play(PlayArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the play command
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Text to play (reads stdin when omitted)
    pub text: Option<String>,

    /// Treat the input as Morse code instead of text
    #[arg(short = 'm', long)]
    pub morse: bool,

    /// Unit duration (e.g., 200, 120ms, 1s)
    #[arg(short = 'u', long, value_name = "TIME")]
    pub unit: Option<String>,

    /// Output device
    #[arg(short = 'D', long, value_name = "DEVICE")]
    pub device: Option<DeviceArg>,

    /// Beep frequency in Hz
    #[arg(long, value_name = "HZ")]
    pub tone: Option<u32>,

    /// Silence between letters, in units
    #[arg(long, value_name = "UNITS")]
    pub letter_gap: Option<u32>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Device argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeviceArg {
    Beep,
    Light,
    Silent,
}

impl From<DeviceArg> for DeviceKind {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Beep => DeviceKind::Beep,
            DeviceArg::Light => DeviceKind::Light,
            DeviceArg::Silent => DeviceKind::Silent,
        }
    }
}

/// Resolved play options
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub morse: MorseString,
    pub timing: Timing,
    pub device: DeviceKind,
    pub tone_hz: u32,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["unit", "device", "tone_hz", "letter_gap_units"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
