//! Morse token stream

use std::fmt;

/// A single element of a Morse string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorseToken {
    /// Short mark (`.`)
    Dot,
    /// Long mark (`-`)
    Dash,
    /// Gap between letters (space)
    LetterGap,
    /// Gap between words (`/`)
    WordGap,
}

impl MorseToken {
    /// Parse a character into a token. Anything outside `. - space /` is not a token.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Dot),
            '-' => Some(Self::Dash),
            ' ' => Some(Self::LetterGap),
            '/' => Some(Self::WordGap),
            _ => None,
        }
    }

    /// The character this token is written as
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
            Self::LetterGap => ' ',
            Self::WordGap => '/',
        }
    }

    /// Whether the output device is keyed for this token
    pub const fn is_mark(&self) -> bool {
        matches!(self, Self::Dot | Self::Dash)
    }
}

impl fmt::Display for MorseToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A Morse string viewed as tokens.
///
/// Holds the raw text as given; characters that are not tokens are
/// skipped when iterating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MorseString {
    raw: String,
}

impl MorseString {
    /// Wrap a raw Morse string
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Encode text into a Morse string
    pub fn encode(text: &str) -> Self {
        Self::new(super::codec::encode(text))
    }

    /// Decode back to text
    pub fn decode(&self) -> String {
        super::codec::decode(&self.raw)
    }

    /// Raw string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Iterate tokens in order
    pub fn tokens(&self) -> impl Iterator<Item = MorseToken> + '_ {
        self.raw.chars().filter_map(MorseToken::from_char)
    }

    /// Number of tokens
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    /// True if there are no tokens to play
    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }
}

impl fmt::Display for MorseString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for MorseString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for MorseString {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
