use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct target symbols: 26 letters followed by 10 digits.
pub const ALPHABET_LEN: usize = 36;

/// Target symbols in index order.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A target character the operator must reproduce.
///
/// Always one of `A..=Z` or `0..=9`; the only constructors enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Symbol(u8);

impl Symbol {
    /// Maps `0..=25` to `A..=Z` and `26..=35` to `0..=9`.
    pub fn from_index(index: usize) -> Option<Self> {
        ALPHABET.get(index).copied().map(Symbol)
    }

    pub fn index(self) -> usize {
        match self.0 {
            b'A'..=b'Z' => (self.0 - b'A') as usize,
            _ => (self.0 - b'0') as usize + 26,
        }
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// True when the (already normalized) entered byte is this symbol.
    pub fn matches(self, entered: u8) -> bool {
        self.0 == entered
    }
}

impl TryFrom<char> for Symbol {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A'..='Z' | '0'..='9' => Ok(Symbol(c as u8)),
            other => Err(format!("{other:?} is not a target symbol")),
        }
    }
}

impl From<Symbol> for char {
    fn from(s: Symbol) -> char {
        s.as_char()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Folds ASCII lowercase to uppercase; every other byte is returned unchanged.
pub fn to_upper(c: u8) -> u8 {
    c.to_ascii_uppercase()
}

/// Normalizes a raw input byte. Zero means "nothing entered yet".
pub fn normalize_input(raw: u8) -> Option<u8> {
    match raw {
        0 => None,
        c => Some(to_upper(c)),
    }
}

/// Printable ASCII, space through tilde.
pub fn is_printable(c: u8) -> bool {
    c.is_ascii_graphic() || c == b' '
}
