//! Rodio-based beep adapter
//!
//! Keys a continuous sine tone by pausing and resuming a sink.

use std::sync::mpsc;
use std::thread;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::application::ports::{DeviceError, OutputDevice};

/// Softer amplitude for a pleasant tone
const AMP: f32 = 0.3;

/// Audio output device that beeps at a fixed frequency
pub struct RodioBeeper {
    sink: Sink,
    tone_hz: u32,
    // Dropping this ends the thread that owns the output stream
    _stream_guard: mpsc::Sender<()>,
}

impl RodioBeeper {
    /// Open the default audio output and prepare a paused tone.
    ///
    /// Blocks while the audio device is opened; call from
    /// `spawn_blocking` inside async code.
    pub fn new(tone_hz: u32) -> Result<Self, DeviceError> {
        let (sink_tx, sink_rx) = mpsc::channel();
        let (guard_tx, guard_rx) = mpsc::channel::<()>();

        // OutputStream is not Send, so it lives on its own thread
        thread::Builder::new()
            .name("morse-audio".to_string())
            .spawn(move || {
                let opened = OutputStream::try_default()
                    .map_err(|e| DeviceError::Unavailable(e.to_string()))
                    .and_then(|(stream, handle)| {
                        Sink::try_new(&handle)
                            .map(|sink| (stream, sink))
                            .map_err(|e| DeviceError::Unavailable(e.to_string()))
                    });

                match opened {
                    Ok((stream, sink)) => {
                        if sink_tx.send(Ok(sink)).is_ok() {
                            // Returns once the beeper is dropped
                            let _ = guard_rx.recv();
                        }
                        drop(stream);
                    }
                    Err(e) => {
                        let _ = sink_tx.send(Err(e));
                    }
                }
            })
            .map_err(|e| DeviceError::Unavailable(format!("Failed to spawn audio thread: {}", e)))?;

        let sink = sink_rx
            .recv()
            .map_err(|e| DeviceError::Unavailable(format!("Audio thread exited: {}", e)))??;

        sink.pause();
        sink.append(SineWave::new(tone_hz as f32).amplify(AMP));

        Ok(Self {
            sink,
            tone_hz,
            _stream_guard: guard_tx,
        })
    }

    /// Tone frequency in Hz
    pub fn tone_hz(&self) -> u32 {
        self.tone_hz
    }
}

impl OutputDevice for RodioBeeper {
    fn on(&self) -> Result<(), DeviceError> {
        if self.sink.empty() {
            return Err(DeviceError::Fault("tone source exhausted".to_string()));
        }
        self.sink.play();
        Ok(())
    }

    fn off(&self) -> Result<(), DeviceError> {
        self.sink.pause();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests require audio hardware and may not work in CI
    // They are marked as ignored by default

    #[test]
    #[ignore = "Requires audio hardware"]
    fn can_open_default_output() {
        let beeper = RodioBeeper::new(700).unwrap();
        assert_eq!(beeper.tone_hz(), 700);
    }

    #[test]
    #[ignore = "Requires audio hardware"]
    fn can_key_tone() {
        let beeper = RodioBeeper::new(700).unwrap();
        assert!(beeper.on().is_ok());
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(beeper.off().is_ok());
    }
}
