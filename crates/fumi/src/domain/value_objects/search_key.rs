//! SearchKey - Canonical form of a typed guest name
//!
//! Whitespace (including U+3000) is dropped and hiragana is folded onto
//! katakana, so "すずき　たろう" and "スズキタロウ" compare equal.

use std::fmt;

/// Distance between a hiragana code point and its katakana counterpart
const KATAKANA_OFFSET: u32 = 0x60;

/// Normalized search key. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey(String);

impl SearchKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize raw input into a search key
pub fn normalize(input: &str) -> SearchKey {
    SearchKey(
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(to_katakana)
            .collect(),
    )
}

fn to_katakana(c: char) -> char {
    match c {
        '\u{3040}'..='\u{309F}' => char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c),
        _ => c,
    }
}
