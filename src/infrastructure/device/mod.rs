//! Output device adapters
//!
//! Beep through the audio output, flash in the terminal, or stay silent.

mod beeper;
mod silent;
mod terminal;

pub use beeper::RodioBeeper;
pub use silent::SilentDevice;
pub use terminal::TerminalLamp;

use crate::application::ports::{DeviceError, OutputDevice};
use crate::domain::playback::DeviceKind;

/// Create an output device adapter for the selected kind.
///
/// Opening the beeper blocks on the audio backend.
pub fn create_output_device(
    kind: DeviceKind,
    tone_hz: u32,
) -> Result<Box<dyn OutputDevice>, DeviceError> {
    match kind {
        DeviceKind::Beep => Ok(Box::new(RodioBeeper::new(tone_hz)?)),
        DeviceKind::Light => Ok(Box::new(TerminalLamp::stdout())),
        DeviceKind::Silent => Ok(Box::new(SilentDevice::new())),
    }
}
