//! Playback domain module

mod device_kind;
mod session;

pub use device_kind::{DeviceKind, ALL_DEVICES};
pub use session::{InvalidStateTransition, PlaybackOutcome, PlaybackSession, PlaybackState};
