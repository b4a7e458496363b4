//! Morse Signal - Morse code translator and player
//!
//! This crate converts text to and from Morse code and plays Morse as
//! timed pulses on an output device such as an audio beep or a light.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Symbol table, codec, timing and playback value objects, errors
//! - **Application**: The playback sequencer and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rodio beeper, terminal lamp, config store)
//! - **CLI**: Command-line interface, argument parsing, and Ctrl+C handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
