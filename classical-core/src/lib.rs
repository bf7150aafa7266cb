// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for classical-core, exposing the Vigenere, Playfair and Hill ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Classical Core Library
//!
//! Three classical ciphers over the 26-letter Latin alphabet, each usable on
//! its own or through [`encrypt`] and [`decrypt`]:
//!
//! ```
//! use classical_core::{CipherKind, decrypt, encrypt};
//!
//! let ciphertext = encrypt(CipherKind::Vigenere, "ATTACK AT DAWN", "LEMON").unwrap();
//! assert_eq!(ciphertext, "LXFOPV EF RNHR");
//! assert_eq!(
//!     decrypt(CipherKind::Vigenere, &ciphertext, "LEMON").unwrap(),
//!     "ATTACK AT DAWN"
//! );
//! ```
//!
//! These ciphers are historical and offer no real security.

/// Letter/index conversions and text cleaning.
pub mod alphabet;
/// Cipher selection and the encrypt/decrypt entry points.
pub mod cipher;
/// The error type returned by cipher operations.
pub mod error;
/// The Hill matrix cipher.
pub mod hill;
/// Random key generation for each cipher.
pub mod key_generator;
/// Sidecar metadata for ciphertext files.
pub mod metadata;
/// The Playfair digraph cipher.
pub mod playfair;
/// Settings such as the minimum key length, stored as JSON.
pub mod settings;
/// The Vigenère shift cipher.
pub mod vigenere;

pub use cipher::{CipherKind, CipherRequest, Mode, decrypt, encrypt, process};
pub use error::CipherError;
