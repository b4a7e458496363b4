//! Output device port interface

use thiserror::Error;

/// Output device errors
#[derive(Debug, Clone, Error)]
pub enum DeviceError {
    #[error("Output device not available: {0}")]
    Unavailable(String),

    #[error("Output device I/O error: {0}")]
    Io(String),

    #[error("Output device fault: {0}")]
    Fault(String),
}

/// Port for a binary output (tone, lamp, ...) that Morse is keyed onto.
///
/// Both calls must return promptly; timing is owned by the caller.
pub trait OutputDevice: Send + Sync {
    /// Turn the output on
    fn on(&self) -> Result<(), DeviceError>;

    /// Turn the output off. Must be safe to call when already off.
    fn off(&self) -> Result<(), DeviceError>;
}

/// Blanket implementation for boxed device types
impl OutputDevice for Box<dyn OutputDevice> {
    fn on(&self) -> Result<(), DeviceError> {
        self.as_ref().on()
    }

    fn off(&self) -> Result<(), DeviceError> {
        self.as_ref().off()
    }
}

impl<D: OutputDevice + ?Sized> OutputDevice for std::sync::Arc<D> {
    fn on(&self) -> Result<(), DeviceError> {
        self.as_ref().on()
    }

    fn off(&self) -> Result<(), DeviceError> {
        self.as_ref().off()
    }
}
