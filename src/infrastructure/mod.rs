//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! audio and terminal output devices, the tokio clock and the
//! XDG config store.

pub mod clock;
pub mod config;
pub mod device;

// Re-export adapters
pub use clock::TokioClock;
pub use config::XdgConfigStore;
pub use device::{create_output_device, RodioBeeper, SilentDevice, TerminalLamp};
