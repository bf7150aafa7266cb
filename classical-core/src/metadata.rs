// File:    metadata.rs
// Author:  apezoo
// Date:    2025-08-06
//
// Description: Sidecar metadata written next to a ciphertext file.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::cipher::CipherKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Metadata stored alongside the ciphertext to enable correct decryption.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CiphertextMetadata {
    /// The cipher that produced the ciphertext.
    pub cipher: CipherKind,
    /// Length of the ciphertext in characters.
    pub length: usize,
    /// Lowercase hex SHA-256 digest of the ciphertext.
    pub ciphertext_hash: String,
}

impl CiphertextMetadata {
    /// Describes a freshly produced ciphertext.
    #[must_use]
    pub fn new(cipher: CipherKind, ciphertext: &str) -> Self {
        Self {
            cipher,
            length: ciphertext.chars().count(),
            ciphertext_hash: digest(ciphertext),
        }
    }

    /// Checks that `ciphertext` is the one this metadata was made for.
    #[must_use]
    pub fn verify(&self, ciphertext: &str) -> bool {
        digest(ciphertext) == self.ciphertext_hash
    }

    /// Reads metadata from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> io::Result<Self> {
        let metadata_str = fs::read_to_string(path)?;
        serde_json::from_str(&metadata_str).map_err(io::Error::other)
    }

    /// Writes metadata as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be serialized or written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let metadata_str = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, metadata_str)
    }
}

/// Lowercase hex SHA-256 of a string.
#[must_use]
pub fn digest(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

/// The sidecar path for an output file: `<output>.metadata.json`.
#[must_use]
pub fn sidecar_path(output: &Path) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(".metadata.json");
    PathBuf::from(path)
}
