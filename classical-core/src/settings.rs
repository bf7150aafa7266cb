// File:    settings.rs
// Author:  apezoo
// Date:    2025-08-05
//
// Description: User settings, including the minimum key length policy, stored as JSON.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::cipher::CipherKind;
use crate::error::CipherError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Minimum key length enforced when no settings file overrides it.
pub const DEFAULT_MIN_KEY_LENGTH: usize = 12;

/// Settings shared by the front ends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Keys shorter than this many characters are refused.
    pub min_key_length: usize,
    /// Cipher used when none is given explicitly.
    pub default_cipher: CipherKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_key_length: DEFAULT_MIN_KEY_LENGTH,
            default_cipher: CipherKind::default(),
        }
    }
}

impl Settings {
    /// Checks a key against the minimum length policy.
    ///
    /// The length counts every character, letters or not.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::KeyTooShort`] if the key is too short.
    pub fn check_key(&self, key: &str) -> Result<(), CipherError> {
        let actual = key.chars().count();
        if actual < self.min_key_length {
            return Err(CipherError::KeyTooShort {
                min: self.min_key_length,
                actual,
            });
        }
        Ok(())
    }
}

/// Loads settings from a JSON file, falling back to defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings(path: &Path) -> io::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let settings_str = fs::read_to_string(path)?;
    serde_json::from_str(&settings_str).map_err(io::Error::other)
}

/// Saves settings to a JSON file.
///
/// # Errors
///
/// Returns an error if the settings cannot be serialized or written.
pub fn save_settings(path: &Path, settings: &Settings) -> io::Result<()> {
    let settings_str = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;
    fs::write(path, settings_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.min_key_length, 12);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            min_key_length: 4,
            default_cipher: CipherKind::Hill,
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"default_cipher":"playfair"}"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.default_cipher, CipherKind::Playfair);
        assert_eq!(settings.min_key_length, DEFAULT_MIN_KEY_LENGTH);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_settings(&path).is_err());
    }

    #[test]
    fn test_check_key_counts_all_characters() {
        let settings = Settings::default();
        assert!(settings.check_key("LEMON LEMON!").is_ok());
        assert_eq!(
            settings.check_key("LEMON"),
            Err(CipherError::KeyTooShort { min: 12, actual: 5 })
        );
    }
}
