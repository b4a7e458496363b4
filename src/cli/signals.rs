//! Ctrl+C handling during playback

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::Colorize;
use tokio::task::JoinHandle;

use crate::application::ports::{Clock, OutputDevice};
use crate::application::Sequencer;

/// Stops a sequencer when the user presses Ctrl+C.
///
/// The listener is aborted when this handle is dropped.
pub struct InterruptGuard {
    interrupted: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl InterruptGuard {
    /// Start listening for Ctrl+C
    pub fn install<D, C>(sequencer: Arc<Sequencer<D, C>>) -> Self
    where
        D: OutputDevice + 'static,
        C: Clock + 'static,
    {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);

        let task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\n{} Received Ctrl+C (stopping)", "↓".cyan());
                flag.store(true, Ordering::SeqCst);
                sequencer.stop();
            }
        });

        Self { interrupted, task }
    }

    /// Check if Ctrl+C was received
    pub fn was_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}
