//! Character to Morse pattern table
//!
//! International Morse plus the punctuation set used by most amateur
//! keyers. The word separator `/` stands in for the space character so
//! that words survive a round trip through the codec.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Pattern emitted for the space character
pub const WORD_SEPARATOR: &str = "/";

/// Every supported character and its pattern.
/// Letters are stored lower-case; lookups lower-case their input first.
pub const SYMBOLS: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (' ', WORD_SEPARATOR),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    ('¿', "..-.-"),
    ('¡', "--...-"),
    ('\n', ".-.-"),
];

static STANDARD: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::from_pairs(SYMBOLS));

/// Bidirectional lookup between characters and Morse patterns.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    forward: HashMap<char, &'static str>,
    inverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// The shared standard table
    pub fn standard() -> &'static SymbolTable {
        &STANDARD
    }

    /// Build a table from (character, pattern) pairs.
    ///
    /// When a pattern repeats, the first character wins in the inverse map.
    pub fn from_pairs(pairs: &[(char, &'static str)]) -> Self {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut inverse = HashMap::with_capacity(pairs.len());

        for &(ch, pattern) in pairs {
            forward.insert(ch, pattern);
            inverse.entry(pattern).or_insert(ch);
        }

        Self { forward, inverse }
    }

    /// Pattern for a character. Case-sensitive; callers lower-case first.
    pub fn pattern(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Character for a pattern
    pub fn character(&self, pattern: &str) -> Option<char> {
        self.inverse.get(pattern).copied()
    }

    /// Whether the character (in any case) has a pattern
    pub fn is_supported(&self, ch: char) -> bool {
        ch.to_lowercase().all(|lower| self.forward.contains_key(&lower))
    }

    /// Number of supported characters
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
