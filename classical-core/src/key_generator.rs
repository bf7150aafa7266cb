// File:    key_generator.rs
// Author:  apezoo
// Date:    2025-08-05
//
// Description: Generates random keys suited to each cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::CipherKind;
use crate::error::CipherError;
use crate::hill::KeyMatrix;
use log::debug;
use rand::Rng;

/// Largest key length, in letters, that can be generated.
pub const MAX_GENERATED_KEY_LENGTH: usize = u16::MAX as usize;

/// Generates a random key for the given cipher.
///
/// Vigenère and Playfair keys are `length` random letters. Hill keys are
/// rounded up to the next perfect square (at least 2×2) and redrawn until the
/// matrix is invertible mod 26, so they always decrypt what they encrypt.
///
/// # Arguments
///
/// * `kind` - The cipher the key is meant for.
/// * `length` - The requested number of letters.
/// * `rng` - The random source.
///
/// # Errors
///
/// Returns [`CipherError::EmptyInput`] if `length` is zero and
/// [`CipherError::KeyLengthOutOfRange`] if it exceeds
/// [`MAX_GENERATED_KEY_LENGTH`].
pub fn generate_key<R: Rng>(
    kind: CipherKind,
    length: usize,
    rng: &mut R,
) -> Result<String, CipherError> {
    if length == 0 {
        return Err(CipherError::EmptyInput);
    }
    let out_of_range = CipherError::KeyLengthOutOfRange {
        length,
        max: MAX_GENERATED_KEY_LENGTH,
    };
    if length > MAX_GENERATED_KEY_LENGTH {
        return Err(out_of_range);
    }
    match kind {
        CipherKind::Vigenere | CipherKind::Playfair => Ok(random_letters(length, rng)),
        CipherKind::Hill => {
            let side = hill_side(length);
            let letters = side.checked_mul(side).ok_or(out_of_range)?;
            let mut attempts = 0_u32;
            loop {
                attempts += 1;
                let key = random_letters(letters, rng);
                if KeyMatrix::from_key(&key)?.is_invertible() {
                    debug!("hill key of side {side} found after {attempts} attempt(s)");
                    return Ok(key);
                }
            }
        }
    }
}

/// Smallest matrix side `n >= 2` with `n * n >= length`.
fn hill_side(length: usize) -> usize {
    let side = length.isqrt();
    let side = if side * side < length { side + 1 } else { side };
    side.max(2)
}

fn random_letters<R: Rng>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| alphabet::index_to_letter(u32::from(rng.random_range(0..ALPHABET_LEN))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_hill_side_rounds_up() {
        assert_eq!(hill_side(1), 2);
        assert_eq!(hill_side(4), 2);
        assert_eq!(hill_side(5), 3);
        assert_eq!(hill_side(12), 4);
        assert_eq!(hill_side(16), 4);
    }

    #[test]
    fn test_letter_keys_have_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let key = generate_key(CipherKind::Vigenere, 12, &mut rng).unwrap();
        assert_eq!(key.len(), 12);
        assert!(key.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hill_keys_are_invertible() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let key = generate_key(CipherKind::Hill, 12, &mut rng).unwrap();
            assert_eq!(key.len(), 16);
            assert!(KeyMatrix::from_key(&key).unwrap().is_invertible());
        }
    }

    #[test]
    fn test_oversized_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in CipherKind::ALL {
            for length in [MAX_GENERATED_KEY_LENGTH + 1, usize::MAX] {
                assert_eq!(
                    generate_key(kind, length, &mut rng),
                    Err(CipherError::KeyLengthOutOfRange {
                        length,
                        max: MAX_GENERATED_KEY_LENGTH,
                    })
                );
            }
        }
    }

    #[test]
    fn test_hill_side_at_the_length_cap() {
        assert_eq!(hill_side(MAX_GENERATED_KEY_LENGTH), 256);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_key(CipherKind::Playfair, 0, &mut rng),
            Err(CipherError::EmptyInput)
        );
    }
}
