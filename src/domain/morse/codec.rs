//! Text to Morse conversion

use super::symbol_table::SymbolTable;

/// Separator written after every encoded character
pub const LETTER_SEPARATOR: char = ' ';

/// Encode text into a Morse string.
///
/// Every input character contributes its pattern followed by one space.
/// Unsupported characters contribute only the space.
pub fn encode(text: &str) -> String {
    encode_with(SymbolTable::standard(), text)
}

/// Decode a Morse string into text.
///
/// Runs of spaces count as a single separator. Unknown patterns are dropped.
pub fn decode(morse: &str) -> String {
    decode_with(SymbolTable::standard(), morse)
}

/// Encode using a specific table
pub fn encode_with(table: &SymbolTable, text: &str) -> String {
    let lower = text.to_lowercase();
    let mut morse = String::with_capacity(lower.len() * 5);

    for ch in lower.chars() {
        if let Some(pattern) = table.pattern(ch) {
            morse.push_str(pattern);
        }
        morse.push(LETTER_SEPARATOR);
    }

    morse
}

/// Decode using a specific table
pub fn decode_with(table: &SymbolTable, morse: &str) -> String {
    morse
        .split(LETTER_SEPARATOR)
        .filter(|token| !token.is_empty())
        .filter_map(|token| table.character(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::morse::symbol_table::SYMBOLS;

    #[test]
    fn empty_input() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn encode_word_gap() {
        assert_eq!(encode("a b"), ".- / -... ");
    }

    #[test]
    fn encode_is_case_insensitive() {
        assert_eq!(encode("SOS"), encode("sos"));
        assert_eq!(encode("SOS"), "... --- ... ");
    }

    #[test]
    fn encode_unsupported_leaves_only_separator() {
        assert_eq!(encode("#"), " ");
        assert_eq!(encode("a🙂b"), ".-  -... ");
    }

    #[test]
    fn unsupported_characters_drop_on_round_trip() {
        assert_eq!(decode(&encode("a🙂b")), "ab");
    }

    #[test]
    fn decode_collapses_repeated_spaces() {
        assert_eq!(decode(".-  -..."), "ab");
        assert_eq!(decode(".- -..."), "ab");
        assert_eq!(decode("   .-     -...   "), "ab");
    }

    #[test]
    fn decode_word_separator_is_literal_space() {
        assert_eq!(decode(".- / -..."), "a b");
        assert_eq!(decode("/"), " ");
    }

    #[test]
    fn decode_drops_unknown_tokens() {
        assert_eq!(decode(".- ........ -..."), "ab");
        assert_eq!(decode("x y z"), "");
    }

    #[test]
    fn decode_newline_pattern() {
        assert_eq!(decode(".... .. .-.- -... -.--"), "hi\nby");
    }

    #[test]
    fn every_symbol_round_trips() {
        for &(ch, _) in SYMBOLS {
            let text = ch.to_string();
            assert_eq!(decode(&encode(&text)), text, "round trip of {ch:?}");
        }
    }

    #[test]
    fn upper_case_round_trips_to_lower() {
        assert_eq!(decode(&encode("Hello, World!")), "hello, world!");
    }
}
