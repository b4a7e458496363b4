//! Application layer - Playback engine and port interfaces
//!
//! Contains the Morse sequencer and the trait definitions
//! for external system interactions.

pub mod ports;
pub mod sequencer;

// Re-export the engine
pub use sequencer::{PlaybackReport, ProgressCallback, Sequencer};
