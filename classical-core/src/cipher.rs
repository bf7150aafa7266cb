// File:    cipher.rs
// Author:  apezoo
// Date:    2025-08-04
//
// Description: Entry points that route a request to the selected cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Cipher selection and the encrypt/decrypt entry points.

use crate::error::CipherError;
use crate::{hill, playfair, vigenere};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The available ciphers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Polyalphabetic shift cipher.
    #[default]
    Vigenere,
    /// Digraph substitution over a 5×5 key square.
    Playfair,
    /// Matrix block cipher mod 26.
    Hill,
}

impl CipherKind {
    /// Every cipher, in menu order.
    pub const ALL: [Self; 3] = [Self::Vigenere, Self::Playfair, Self::Hill];

    /// Lowercase name used on the command line and in JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vigenere => "vigenere",
            Self::Playfair => "playfair",
            Self::Hill => "hill",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown cipher '{s}', expected vigenere, playfair or hill"))
    }
}

/// Direction of a cipher operation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// The inputs of a single cipher invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherRequest<'a> {
    /// Plaintext when encrypting, ciphertext when decrypting.
    pub text: &'a str,
    /// The user-supplied key.
    pub key: &'a str,
    /// Whether to encrypt or decrypt.
    pub mode: Mode,
}

impl<'a> CipherRequest<'a> {
    /// Creates a request.
    #[must_use]
    pub const fn new(text: &'a str, key: &'a str, mode: Mode) -> Self {
        Self { text, key, mode }
    }
}

/// Runs a request through the chosen cipher.
///
/// # Errors
///
/// Returns [`CipherError::EmptyInput`] for empty text, and for Playfair and
/// Hill also for text without any letters, since both drop everything else.
/// Otherwise returns whatever the selected cipher reports for its key.
pub fn process(kind: CipherKind, request: &CipherRequest<'_>) -> Result<String, CipherError> {
    let letters_only = matches!(kind, CipherKind::Playfair | CipherKind::Hill);
    if request.text.is_empty()
        || (letters_only && !request.text.chars().any(|c| c.is_ascii_alphabetic()))
    {
        return Err(CipherError::EmptyInput);
    }
    debug!(
        "{:?} with {} on {} chars",
        request.mode,
        kind,
        request.text.chars().count()
    );
    match kind {
        CipherKind::Vigenere => vigenere::vigenere(request.text, request.key, request.mode),
        CipherKind::Playfair => playfair::playfair(request.text, request.key, request.mode),
        CipherKind::Hill => hill::hill(request.text, request.key, request.mode),
    }
}

/// Encrypts `plaintext` with the chosen cipher.
///
/// # Errors
///
/// See [`process`].
pub fn encrypt(kind: CipherKind, plaintext: &str, key: &str) -> Result<String, CipherError> {
    process(kind, &CipherRequest::new(plaintext, key, Mode::Encrypt))
}

/// Decrypts `ciphertext` with the chosen cipher.
///
/// # Errors
///
/// See [`process`].
pub fn decrypt(kind: CipherKind, ciphertext: &str, key: &str) -> Result<String, CipherError> {
    process(kind, &CipherRequest::new(ciphertext, key, Mode::Decrypt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("Hill".parse::<CipherKind>(), Ok(CipherKind::Hill));
        assert_eq!(" PLAYFAIR ".parse::<CipherKind>(), Ok(CipherKind::Playfair));
        assert!("caesar".parse::<CipherKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&CipherKind::Vigenere).unwrap();
        assert_eq!(json, "\"vigenere\"");
        let kind: CipherKind = serde_json::from_str("\"hill\"").unwrap();
        assert_eq!(kind, CipherKind::Hill);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        for kind in CipherKind::ALL {
            assert_eq!(encrypt(kind, "", "LEMONLEMONLEMON"), Err(CipherError::EmptyInput));
        }
    }

    #[test]
    fn test_text_without_letters() {
        for kind in [CipherKind::Playfair, CipherKind::Hill] {
            assert_eq!(encrypt(kind, "123 !", "GYBNQKURP"), Err(CipherError::EmptyInput));
            assert_eq!(decrypt(kind, "\n", "GYBNQKURP"), Err(CipherError::EmptyInput));
        }
        // Vigenere copies non-letters through, so such text is still valid.
        assert_eq!(
            encrypt(CipherKind::Vigenere, "123 !", "LEMON").unwrap(),
            "123 !"
        );
    }

    #[test]
    fn test_process_matches_direct_calls() {
        let request = CipherRequest::new("ATTACKATDAWN", "LEMON", Mode::Encrypt);
        assert_eq!(
            process(CipherKind::Vigenere, &request),
            vigenere::vigenere("ATTACKATDAWN", "LEMON", Mode::Encrypt)
        );
    }
}
