//! Domain error types

use thiserror::Error;

/// Error when parsing a unit duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid unit duration: \"{input}\". Expected milliseconds or <number>s/<number>ms (e.g., 200, 120ms, 1s, 1s500ms)")]
pub struct UnitParseError {
    pub input: String,
}

/// Error when an invalid output device name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid device: \"{input}\". Valid devices are: beep, light, silent")]
pub struct InvalidDeviceError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
