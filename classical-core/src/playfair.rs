// File:    playfair.rs
// Author:  apezoo
// Date:    2025-08-03
//
// Description: Playfair digraph substitution cipher over a 5x5 key square.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The Playfair cipher.
//!
//! The key fills a 5×5 square of letters (I and J share a cell). The text is
//! cut into pairs of letters and each pair is replaced according to where its
//! two letters sit in the square.

use crate::alphabet;
use crate::cipher::Mode;
use crate::error::CipherError;
use log::trace;

/// Side length of the key square.
pub const SQUARE_SIDE: usize = 5;

/// Letters appended to the key when building the square. J is folded into I.
const FALLBACK_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Letter used to break up doubled letters and to pad an odd-length text.
const FILLER: char = 'X';

/// Filler used when the letter being padded is itself the usual filler.
const ALTERNATE_FILLER: char = 'Q';

/// A 5×5 grid holding the 25 letters A–Z without J, each exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [char; SQUARE_SIDE * SQUARE_SIDE],
    positions: [Option<(usize, usize)>; 26],
}

impl KeySquare {
    /// Builds the square from a key.
    ///
    /// Non-letters in the key are dropped and J is read as I. The key's
    /// letters come first, in order of first appearance, followed by the rest
    /// of the alphabet.
    #[must_use]
    pub fn new(key: &str) -> Self {
        let mut cells = ['\0'; SQUARE_SIDE * SQUARE_SIDE];
        let mut positions = [None; 26];
        let mut filled = 0;

        for letter in alphabet::normalize(key)
            .chars()
            .chain(FALLBACK_ALPHABET.chars())
            .map(fold_j)
        {
            let Some(index) = alphabet::letter_to_index(letter) else {
                continue;
            };
            let slot = &mut positions[usize::from(index)];
            if slot.is_some() {
                continue;
            }
            *slot = Some((filled / SQUARE_SIDE, filled % SQUARE_SIDE));
            cells[filled] = letter;
            filled += 1;
            if filled == cells.len() {
                break;
            }
        }

        Self { cells, positions }
    }

    /// Returns the letter at `(row, col)`. Both coordinates wrap mod 5.
    #[must_use]
    pub const fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % SQUARE_SIDE) * SQUARE_SIDE + col % SQUARE_SIDE]
    }

    /// Returns the `(row, col)` of a letter, reading J as I.
    #[must_use]
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        let index = alphabet::letter_to_index(fold_j(letter.to_ascii_uppercase()))?;
        self.positions[usize::from(index)]
    }

    /// The square's letters in row-major order.
    #[must_use]
    pub fn letters(&self) -> String {
        self.cells.iter().collect()
    }

    /// The square as five rows of five letters.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(SQUARE_SIDE)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Substitutes one digraph.
    fn substitute(&self, digraph: Digraph, mode: Mode) -> Digraph {
        let (row_a, col_a) = self.locate(digraph.first);
        let (row_b, col_b) = self.locate(digraph.second);
        // Moving back one step is the same as moving forward four.
        let step = match mode {
            Mode::Encrypt => 1,
            Mode::Decrypt => SQUARE_SIDE - 1,
        };

        if row_a == row_b {
            Digraph::new(self.at(row_a, col_a + step), self.at(row_b, col_b + step))
        } else if col_a == col_b {
            Digraph::new(self.at(row_a + step, col_a), self.at(row_b + step, col_b))
        } else {
            Digraph::new(self.at(row_a, col_b), self.at(row_b, col_a))
        }
    }

    fn locate(&self, letter: char) -> (usize, usize) {
        // Digraphs only ever hold normalized letters with J folded, all of
        // which have a cell.
        self.position(letter).unwrap_or((0, 0))
    }
}

/// An ordered pair of letters processed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph {
    /// The first letter of the pair.
    pub first: char,
    /// The second letter of the pair.
    pub second: char,
}

impl Digraph {
    /// Creates a digraph from two letters.
    #[must_use]
    pub const fn new(first: char, second: char) -> Self {
        Self { first, second }
    }
}

impl std::fmt::Display for Digraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Cuts text into digraphs.
///
/// The text is normalized and J is read as I. A doubled letter is never
/// paired with itself: the first copy gets a filler and the second starts
/// the next pair. A lone trailing letter is padded with a filler.
#[must_use]
pub fn digraphs(text: &str) -> Vec<Digraph> {
    let letters: Vec<char> = alphabet::normalize(text).chars().map(fold_j).collect();
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;

    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push(Digraph::new(first, second));
                i += 2;
            }
            _ => {
                pairs.push(Digraph::new(first, filler_for(first)));
                i += 1;
            }
        }
    }

    pairs
}

/// Encrypts or decrypts `text` with the Playfair cipher.
///
/// Non-letters are dropped from both text and key before use. The output is
/// uppercase and always has even length; decryption keeps filler letters.
///
/// # Errors
///
/// Playfair accepts every key, so this currently never fails. The `Result`
/// keeps its signature in line with the other ciphers.
pub fn playfair(text: &str, key: &str, mode: Mode) -> Result<String, CipherError> {
    let square = KeySquare::new(key);
    let pairs = digraphs(text);
    trace!("playfair: {} digraphs, {:?}", pairs.len(), mode);

    let mut output = String::with_capacity(pairs.len() * 2);
    for pair in pairs {
        let substituted = square.substitute(pair, mode);
        output.push(substituted.first);
        output.push(substituted.second);
    }
    Ok(output)
}

const fn fold_j(c: char) -> char {
    if c == 'J' { 'I' } else { c }
}

const fn filler_for(letter: char) -> char {
    if letter == FILLER { ALTERNATE_FILLER } else { FILLER }
}
