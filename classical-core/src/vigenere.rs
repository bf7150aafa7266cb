// File:    vigenere.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Vigenere polyalphabetic shift cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The Vigenère cipher.
//!
//! Letters are shifted by the matching key letter; anything else is copied
//! through untouched and does not advance the key.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::Mode;
use crate::error::CipherError;
use log::trace;

/// Encrypts or decrypts `text` with the Vigenère cipher.
///
/// Letters in the output are uppercase. Non-letters in the key are ignored.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the key contains no letters.
pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<String, CipherError> {
    let shifts = alphabet::to_indices(key);
    if shifts.is_empty() {
        return Err(CipherError::InvalidKey);
    }
    trace!("vigenere: {} key letters, {:?}", shifts.len(), mode);

    let mut key_stream = shifts.iter().cycle();
    let output = text
        .chars()
        .map(|c| match alphabet::letter_to_index(c) {
            Some(index) => {
                // The cycle over a non-empty slice never runs dry.
                let shift = key_stream.next().copied().unwrap_or_default();
                let shifted = match mode {
                    Mode::Encrypt => index + shift,
                    Mode::Decrypt => index + ALPHABET_LEN - shift,
                };
                alphabet::index_to_letter(u32::from(shifted))
            }
            None => c.to_ascii_uppercase(),
        })
        .collect();
    Ok(output)
}
