//! Terminal lamp adapter
//!
//! Stands in for a torch: draws a lit block while the output is on and
//! blanks it while off, rewriting the same line each time.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

use crate::application::ports::{DeviceError, OutputDevice};

const LAMP: &str = "██████";
const BLANK: &str = "      ";

/// Light output device rendered as a block of text
pub struct TerminalLamp {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalLamp {
    /// Lamp drawn on stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Lamp drawn into any writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn draw(&self, frame: &str) -> Result<(), DeviceError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| DeviceError::Fault("lamp writer poisoned".to_string()))?;
        write!(out, "\r{}", frame).map_err(|e| DeviceError::Io(e.to_string()))?;
        out.flush().map_err(|e| DeviceError::Io(e.to_string()))
    }
}

impl OutputDevice for TerminalLamp {
    fn on(&self) -> Result<(), DeviceError> {
        self.draw(&LAMP.yellow().to_string())
    }

    fn off(&self) -> Result<(), DeviceError> {
        self.draw(BLANK)
    }
}
