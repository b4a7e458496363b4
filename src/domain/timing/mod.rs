//! Timing domain module

mod schedule;
mod unit_duration;

pub use schedule::{
    PulseShape, Timing, DASH_UNITS, DEFAULT_LETTER_GAP_UNITS, DOT_UNITS, WORD_GAP_UNITS,
};
pub use unit_duration::{UnitDuration, DEFAULT_UNIT_MS};
