// File:    hill.rs
// Author:  apezoo
// Date:    2025-08-04
//
// Description: Hill block cipher using matrix multiplication mod 26.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The Hill cipher.
//!
//! A key of `n * n` letters becomes an `n × n` matrix. The text is split into
//! blocks of `n` letters and each block, read as a vector, is multiplied by
//! the matrix mod 26. Decryption multiplies by the inverse matrix, which only
//! exists when the determinant is coprime with 26.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::Mode;
use crate::error::CipherError;
use log::debug;

/// Letter index appended to the text until it fills a whole number of blocks.
const PADDING_INDEX: u32 = 23; // 'X'

const MODULUS: u32 = ALPHABET_LEN as u32;

/// The two prime factors of 26. Inverting mod each and recombining gives the
/// inverse mod 26.
const LOW_PRIME: u32 = 2;
const HIGH_PRIME: u32 = 13;

/// A square matrix of letter values in `0..26`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl KeyMatrix {
    /// Builds a matrix from a key, filling rows with successive letter values.
    ///
    /// Non-letters in the key are dropped first.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyInput`] if the key holds no letters, and
    /// [`CipherError::InvalidKeyLength`] if the number of letters is not a
    /// perfect square.
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        let values: Vec<u32> = alphabet::to_indices(key)
            .into_iter()
            .map(u32::from)
            .collect();
        Self::from_values(&values)
    }

    /// Builds a matrix from raw row-major values, each reduced mod 26.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyInput`] for an empty slice and
    /// [`CipherError::InvalidKeyLength`] if the length is not a perfect square.
    pub fn from_values(values: &[u32]) -> Result<Self, CipherError> {
        if values.is_empty() {
            return Err(CipherError::EmptyInput);
        }
        let size = values.len().isqrt();
        if size * size != values.len() {
            return Err(CipherError::InvalidKeyLength {
                length: values.len(),
            });
        }
        Ok(Self {
            size,
            cells: values.iter().map(|v| v % MODULUS).collect(),
        })
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.cells
    }

    /// Multiplies the matrix by a block vector, mod 26.
    ///
    /// `block` must hold exactly [`size`](Self::size) values; debug builds
    /// panic otherwise.
    #[must_use]
    pub fn apply(&self, block: &[u32]) -> Vec<u32> {
        debug_assert_eq!(
            block.len(),
            self.size,
            "block length must match the key matrix size"
        );
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .zip(block)
                    .map(|(m, v)| m * v)
                    .sum::<u32>()
                    % MODULUS
            })
            .collect()
    }

    /// The determinant, reduced mod 26.
    #[must_use]
    pub fn determinant(&self) -> u32 {
        let (low, _) = self.reduce(LOW_PRIME);
        let (high, _) = self.reduce(HIGH_PRIME);
        combine_residues(low, high)
    }

    /// The inverse matrix mod 26.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::SingularKeyMatrix`] when the determinant shares
    /// a factor with 26.
    pub fn inverse(&self) -> Result<Self, CipherError> {
        let (low_det, low_inverse) = self.reduce(LOW_PRIME);
        let (high_det, high_inverse) = self.reduce(HIGH_PRIME);
        match (low_inverse, high_inverse) {
            (Some(low), Some(high)) => Ok(Self {
                size: self.size,
                cells: low
                    .into_iter()
                    .zip(high)
                    .map(|(l, h)| combine_residues(l, h))
                    .collect(),
            }),
            _ => Err(CipherError::SingularKeyMatrix {
                determinant: combine_residues(low_det, high_det),
            }),
        }
    }

    /// Whether the matrix can be inverted mod 26.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.inverse().is_ok()
    }

    /// Gauss-Jordan elimination mod a prime.
    ///
    /// Returns the determinant mod `prime` and, when it is non-zero, the
    /// inverse mod `prime` in row-major order.
    fn reduce(&self, prime: u32) -> (u32, Option<Vec<u32>>) {
        let n = self.size;
        let mut rows: Vec<Vec<u32>> = self
            .cells
            .chunks(n)
            .enumerate()
            .map(|(r, row)| {
                let mut augmented: Vec<u32> = row.iter().map(|v| v % prime).collect();
                augmented.extend((0..n).map(|c| u32::from(c == r)));
                augmented
            })
            .collect();

        let mut det = 1;
        for col in 0..n {
            let Some(pivot) = (col..n).find(|&r| rows[r][col] != 0) else {
                return (0, None);
            };
            if pivot != col {
                rows.swap(pivot, col);
                det = (prime - det) % prime;
            }

            let pivot_value = rows[col][col];
            det = det * pivot_value % prime;
            let scale = inverse_mod_prime(pivot_value, prime);
            for v in &mut rows[col] {
                *v = *v * scale % prime;
            }

            let pivot_row = rows[col].clone();
            for (r, row) in rows.iter_mut().enumerate() {
                let factor = row[col];
                if r == col || factor == 0 {
                    continue;
                }
                for (v, p) in row.iter_mut().zip(&pivot_row) {
                    *v = (*v + prime - factor * p % prime) % prime;
                }
            }
        }

        let inverse = rows.into_iter().flat_map(|row| row.into_iter().skip(n)).collect();
        (det, Some(inverse))
    }
}

/// Encrypts or decrypts `text` with the Hill cipher.
///
/// Non-letters are dropped from text and key. The text is padded with `X`
/// to a multiple of the block size; decryption keeps that padding.
///
/// # Errors
///
/// Fails with [`CipherError::EmptyInput`] or
/// [`CipherError::InvalidKeyLength`] for a bad key, and with
/// [`CipherError::SingularKeyMatrix`] when decrypting with a key that has no
/// inverse mod 26.
pub fn hill(text: &str, key: &str, mode: Mode) -> Result<String, CipherError> {
    let key_matrix = KeyMatrix::from_key(key)?;
    let matrix = match mode {
        Mode::Encrypt => key_matrix,
        Mode::Decrypt => key_matrix.inverse()?,
    };
    let size = matrix.size();

    let mut vector: Vec<u32> = alphabet::to_indices(text)
        .into_iter()
        .map(u32::from)
        .collect();
    while vector.len() % size != 0 {
        vector.push(PADDING_INDEX);
    }
    debug!(
        "hill: {}x{} key, {} blocks, {:?}",
        size,
        size,
        vector.len() / size,
        mode
    );

    Ok(vector
        .chunks(size)
        .flat_map(|block| matrix.apply(block))
        .map(alphabet::index_to_letter)
        .collect())
}

fn inverse_mod_prime(value: u32, prime: u32) -> u32 {
    (1..prime).find(|x| value * x % prime == 1).unwrap_or(0)
}

/// Chinese remainder combination of residues mod 2 and mod 13 into mod 26.
const fn combine_residues(low: u32, high: u32) -> u32 {
    // 13 is 1 mod 2 and 0 mod 13; 14 is 0 mod 2 and 1 mod 13.
    (13 * low + 14 * high) % MODULUS
}
