// File:    error.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Error type shared by every cipher operation in the core library.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors produced by the cipher operations.
///
/// Every error is local to a single call and recoverable; the caller decides
/// how to report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The key holds no letters the cipher can use.
    #[error("Key must contain at least one letter A-Z")]
    InvalidKey,

    /// The Hill key length is not a perfect square.
    #[error("Hill key length must be a perfect square, got {length} letters")]
    InvalidKeyLength {
        /// Number of letters in the cleaned key.
        length: usize,
    },

    /// The Hill key matrix has no inverse modulo 26.
    #[error("Hill key matrix is not invertible mod 26 (determinant {determinant})")]
    SingularKeyMatrix {
        /// Determinant of the key matrix, reduced mod 26.
        determinant: u32,
    },

    /// A requested key length is larger than supported.
    #[error("Key length must be at most {max} letters, got {length}")]
    KeyLengthOutOfRange {
        /// The requested number of letters.
        length: usize,
        /// The largest accepted number of letters.
        max: usize,
    },

    /// The text or a required key was empty.
    #[error("Input must not be empty")]
    EmptyInput,

    /// The key is shorter than the configured minimum.
    #[error("Key must be at least {min} characters, got {actual}")]
    KeyTooShort {
        /// Minimum accepted key length in characters.
        min: usize,
        /// Length of the rejected key in characters.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_length() {
        let err = CipherError::InvalidKeyLength { length: 7 };
        assert_eq!(
            err.to_string(),
            "Hill key length must be a perfect square, got 7 letters"
        );
    }

    #[test]
    fn test_display_key_too_short() {
        let err = CipherError::KeyTooShort { min: 12, actual: 5 };
        assert_eq!(err.to_string(), "Key must be at least 12 characters, got 5");
    }

    #[test]
    fn test_display_key_length_out_of_range() {
        let err = CipherError::KeyLengthOutOfRange {
            length: 70_000,
            max: 65_535,
        };
        assert_eq!(
            err.to_string(),
            "Key length must be at most 65535 letters, got 70000"
        );
    }

    #[test]
    fn test_display_singular_matrix() {
        let err = CipherError::SingularKeyMatrix { determinant: 24 };
        assert!(err.to_string().contains("determinant 24"));
    }
}
