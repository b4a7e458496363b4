//! Domain layer - Core business logic
//!
//! Contains the Morse symbol table and codec, timing value objects,
//! playback session state and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod morse;
pub mod playback;
pub mod timing;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use morse::{decode, encode, MorseString, MorseToken, SymbolTable};
pub use playback::{DeviceKind, PlaybackOutcome, PlaybackSession, PlaybackState};
pub use timing::{PulseShape, Timing, UnitDuration};
