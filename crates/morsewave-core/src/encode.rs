//! Text to Morse translation.
//!
//! The output is a fragment string over five characters: `.` and `-` from
//! the letter patterns, a space between letters of a word, `/` between
//! words, and `#` for characters the table cannot translate. `/` never
//! appears inside a letter pattern, so word boundaries survive the
//! translation unambiguously.

use crate::symbols;

/// Translates text into a Morse fragment string.
///
/// Words are split on single spaces and case-folded to uppercase before
/// each character is looked up. Characters without a translation become
/// `#`, which renders as a noise burst instead of aborting.
///
/// An empty word (from consecutive spaces) contributes an empty pattern,
/// so the surrounding `/` separators still mark its position.
pub fn encode(text: &str) -> String {
    text.split(' ')
        .map(encode_word)
        .collect::<Vec<_>>()
        .join("/")
}

fn encode_word(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(|c| symbols::pattern_for(c).unwrap_or("#"))
        .collect::<Vec<_>>()
        .join(" ")
}
