// File:    alphabet.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Letter/index conversions and text cleaning shared by all ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Helpers for working with the 26-letter Latin alphabet.

/// Number of letters in the alphabet, and the modulus of all cipher arithmetic.
pub const ALPHABET_LEN: u8 = 26;

/// Maps a letter to its alphabet index (`'A'` and `'a'` both give 0).
///
/// Returns `None` for anything outside A–Z/a–z.
#[must_use]
pub const fn letter_to_index(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a'),
        _ => None,
    }
}

/// Maps an index back to its uppercase letter. The index is taken mod 26.
#[must_use]
pub fn index_to_letter(i: u32) -> char {
    // The remainder is below 26, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let offset = (i % u32::from(ALPHABET_LEN)) as u8;
    char::from(b'A' + offset)
}

/// Removes every character that is not an ASCII letter.
#[must_use]
pub fn strip_non_alpha(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Strips non-letters and uppercases what remains.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Converts a string into alphabet indices, skipping non-letters.
#[must_use]
pub fn to_indices(s: &str) -> Vec<u8> {
    s.chars().filter_map(letter_to_index).collect()
}
