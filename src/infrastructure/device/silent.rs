//! Silent output adapter
//!
//! Keeps the on/off state without producing any output. Used for dry runs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::application::ports::{DeviceError, OutputDevice};

/// Output device that only tracks its state
#[derive(Debug, Default)]
pub struct SilentDevice {
    lit: AtomicBool,
    pulses: AtomicUsize,
}

impl SilentDevice {
    /// Create a new silent device
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the output is currently on
    pub fn is_on(&self) -> bool {
        self.lit.load(Ordering::SeqCst)
    }

    /// Number of times the output was switched on
    pub fn pulses(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }
}

impl OutputDevice for SilentDevice {
    fn on(&self) -> Result<(), DeviceError> {
        self.pulses.fetch_add(1, Ordering::SeqCst);
        self.lit.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn off(&self) -> Result<(), DeviceError> {
        self.lit.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_state() {
        let device = SilentDevice::new();
        assert!(!device.is_on());

        device.on().unwrap();
        assert!(device.is_on());

        device.off().unwrap();
        device.off().unwrap();
        assert!(!device.is_on());
        assert_eq!(device.pulses(), 1);
    }
}
