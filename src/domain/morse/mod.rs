//! Morse domain module

pub mod codec;
mod symbol_table;
mod token;

pub use codec::{decode, encode};
pub use symbol_table::{SymbolTable, SYMBOLS, WORD_SEPARATOR};
pub use token::{MorseString, MorseToken};
