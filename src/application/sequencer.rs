//! Timed Morse playback
//!
//! Walks a Morse string token by token and keys an [`OutputDevice`] with
//! durations taken from a [`Timing`] table. Cancellation is cooperative:
//! [`Sequencer::stop`] clears the running flag and forces the device off at
//! once, and the run notices the cleared flag at its next token boundary.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::morse::{MorseString, MorseToken};
use crate::domain::playback::{PlaybackOutcome, PlaybackSession, PlaybackState};
use crate::domain::timing::{PulseShape, Timing};

use super::ports::{Clock, DeviceError, OutputDevice};

/// Progress callback type for reporting playback progress.
/// Parameters: (tokens_emitted, tokens_total)
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackReport {
    pub outcome: PlaybackOutcome,
    /// Tokens fully emitted before the run ended
    pub emitted: usize,
    /// Tokens in the Morse string
    pub total: usize,
}

/// Morse playback engine for one output device
pub struct Sequencer<D, C>
where
    D: OutputDevice,
    C: Clock,
{
    device: D,
    clock: C,
    timing: Timing,
    shape: PulseShape,
    running: AtomicBool,
    generation: AtomicU64,
    lane: Mutex<()>,
}

impl<D, C> Sequencer<D, C>
where
    D: OutputDevice,
    C: Clock,
{
    /// Create a new idle sequencer
    pub fn new(device: D, clock: C, timing: Timing, shape: PulseShape) -> Self {
        Self {
            device,
            clock,
            timing,
            shape,
            running: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            lane: Mutex::new(()),
        }
    }

    /// Timing table in use
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Pulse shape in use
    pub fn pulse_shape(&self) -> PulseShape {
        self.shape
    }

    /// The output device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Check if a run is in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        if self.is_running() {
            PlaybackState::Running
        } else {
            PlaybackState::Idle
        }
    }

    /// Play a Morse string to completion, cancellation or device fault.
    pub async fn run(&self, morse: &MorseString) -> PlaybackReport {
        self.run_with_progress(morse, None).await
    }

    /// Play a Morse string, reporting progress after every token.
    ///
    /// Starting a run supersedes any run already in progress on this
    /// sequencer. The new run waits until the old one has released the
    /// device, so their pulses never overlap.
    pub async fn run_with_progress(
        &self,
        morse: &MorseString,
        on_progress: Option<ProgressCallback>,
    ) -> PlaybackReport {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let lane = self.lane.lock().await;

        let mut session = PlaybackSession::new(generation, morse.token_count());

        // Superseded or stopped while waiting for the previous run
        if !self.is_current(generation) {
            return report(&session);
        }

        self.running.store(true, Ordering::SeqCst);
        let mut guard = RunGuard {
            sequencer: self,
            settled: false,
            _lane: lane,
        };

        if let Err(e) = session.start() {
            tracing::debug!(generation, error = %e, "playback session already started");
        }
        tracing::debug!(
            generation,
            tokens = session.total(),
            unit_ms = self.timing.unit.as_millis(),
            shape = %self.shape,
            "playback started"
        );

        let mut outcome = PlaybackOutcome::Completed;
        for token in morse.tokens() {
            if !self.should_continue(generation) {
                outcome = PlaybackOutcome::Cancelled;
                break;
            }

            if let Err(e) = self.emit(token).await {
                tracing::warn!(
                    generation,
                    position = session.position(),
                    error = %e,
                    "output device fault, stopping playback"
                );
                outcome = PlaybackOutcome::Faulted;
                break;
            }

            if let Err(e) = session.advance() {
                tracing::debug!(generation, error = %e, "playback session not running");
            }
            if let Some(ref callback) = on_progress {
                callback(session.position(), session.total());
            }
        }

        // Marks always end with the device off unless a fault cut them short
        guard.settled = outcome != PlaybackOutcome::Faulted;

        if let Err(e) = session.finish(outcome) {
            tracing::debug!(generation, error = %e, "playback session already finished");
        }
        tracing::debug!(
            generation = session.generation(),
            outcome = %outcome,
            emitted = session.position(),
            "playback finished"
        );

        report(&session)
    }

    /// Cancel the current run and force the device off.
    ///
    /// Safe to call while idle. The run stops at its next token boundary;
    /// the device is commanded off immediately.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.force_off();
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn should_continue(&self, generation: u64) -> bool {
        self.running.load(Ordering::SeqCst) && self.is_current(generation)
    }

    fn force_off(&self) {
        if let Err(e) = self.device.off() {
            tracing::warn!(error = %e, "failed to switch output device off");
        }
    }

    /// Emit one token. Returns with the device off unless the device errors.
    async fn emit(&self, token: MorseToken) -> Result<(), DeviceError> {
        let duration = self.timing.duration_of(token);

        if !token.is_mark() {
            self.clock.sleep(duration).await;
            return Ok(());
        }

        match self.shape {
            PulseShape::Steady => {
                self.device.on()?;
                self.clock.sleep(duration).await;
                self.device.off()?;
            }
            PulseShape::Blink => {
                let lit = duration / 2;
                self.device.on()?;
                self.clock.sleep(lit).await;
                self.device.off()?;
                self.clock.sleep(duration - lit).await;
            }
        }

        Ok(())
    }
}

/// A session that never started counts as cancelled
fn report(session: &PlaybackSession) -> PlaybackReport {
    PlaybackReport {
        outcome: session.outcome().unwrap_or(PlaybackOutcome::Cancelled),
        emitted: session.position(),
        total: session.total(),
    }
}

/// Clears the running flag when a run ends, however it ends.
///
/// Also forces the device off unless the run settled cleanly, which covers
/// device faults and runs whose future was dropped mid-pulse. The lane is
/// released only after the flag is cleared, so the next run cannot have
/// set it yet.
struct RunGuard<'a, D, C>
where
    D: OutputDevice,
    C: Clock,
{
    sequencer: &'a Sequencer<D, C>,
    settled: bool,
    _lane: MutexGuard<'a, ()>,
}

impl<D, C> Drop for RunGuard<'_, D, C>
where
    D: OutputDevice,
    C: Clock,
{
    fn drop(&mut self) {
        if !self.settled {
            self.sequencer.force_off();
        }
        self.sequencer.running.store(false, Ordering::SeqCst);
    }
}
