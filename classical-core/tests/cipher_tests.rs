#![allow(missing_docs)]
use classical_core::hill::KeyMatrix;
use classical_core::metadata::CiphertextMetadata;
use classical_core::playfair::{Digraph, KeySquare};
use classical_core::settings::Settings;
use classical_core::{CipherError, CipherKind, CipherRequest, decrypt, encrypt};

const KEY: &str = "MONARCHYMONARCHY";

#[test]
fn test_vigenere_known_vector() {
    let ciphertext = encrypt(CipherKind::Vigenere, "ATTACKATDAWN", "LEMON").unwrap();
    assert_eq!(ciphertext, "LXFOPVEFRNHR");
}

#[test]
fn test_vigenere_preserves_non_letters_in_place() {
    let plaintext = "Meet me at 10:30, by the old oak tree!";
    let ciphertext = encrypt(CipherKind::Vigenere, plaintext, KEY).unwrap();
    assert_eq!(ciphertext.len(), plaintext.len());
    for (p, c) in plaintext.chars().zip(ciphertext.chars()) {
        if p.is_ascii_alphabetic() {
            assert!(c.is_ascii_uppercase());
        } else {
            assert_eq!(p, c);
        }
    }
    let decrypted = decrypt(CipherKind::Vigenere, &ciphertext, KEY).unwrap();
    assert_eq!(decrypted, plaintext.to_ascii_uppercase());
}

#[test]
fn test_playfair_wikipedia_vector() {
    let ciphertext = encrypt(
        CipherKind::Playfair,
        "hide the gold in the tree stump",
        "playfair example",
    )
    .unwrap();
    assert_eq!(ciphertext, "BMODZBXDNABEKUDMUIXMMOUVIF");
    let plaintext = decrypt(CipherKind::Playfair, &ciphertext, "playfair example").unwrap();
    assert_eq!(plaintext, "HIDETHEGOLDINTHETREXESTUMP");
}

#[test]
fn test_playfair_output_length_is_even() {
    for text in ["A", "HELLO", "BALLOON", "XXX", "odd one out", "Jazz"] {
        let ciphertext = encrypt(CipherKind::Playfair, text, KEY).unwrap();
        assert_eq!(ciphertext.len() % 2, 0, "odd output for {text:?}");
        assert!(!ciphertext.contains('J'));
    }
}

#[test]
fn test_playfair_key_square_is_a_permutation() {
    for key in ["", "MONARCHY", "JJJJJJJJJJJJ", "the quick brown fox jumps over the lazy dog"] {
        let square = KeySquare::new(key);
        let mut letters: Vec<char> = square.letters().chars().collect();
        letters.sort_unstable();
        let expected: Vec<char> = ('A'..='Z').filter(|&c| c != 'J').collect();
        assert_eq!(letters, expected, "bad square for key {key:?}");
    }
}

#[test]
fn test_hill_example_matrix() {
    assert_eq!(encrypt(CipherKind::Hill, "AB", "BCDE").unwrap(), "CE");
}

#[test]
fn test_hill_key_length_is_checked() {
    for length in 1..=20_usize {
        let key = "B".repeat(length);
        let result = encrypt(CipherKind::Hill, "HELLOWORLD", &key);
        let is_square = length.isqrt().pow(2) == length;
        match result {
            Ok(_) => assert!(is_square, "length {length} should fail"),
            Err(e) => {
                assert!(!is_square, "length {length} should succeed");
                assert_eq!(e, CipherError::InvalidKeyLength { length });
            }
        }
    }
}

#[test]
fn test_hill_decrypt_needs_invertible_key() {
    assert_eq!(
        decrypt(CipherKind::Hill, "CE", "BCDE"),
        Err(CipherError::SingularKeyMatrix { determinant: 24 })
    );
}

#[test]
fn test_roundtrip_letters_only() {
    let cases = [
        (CipherKind::Vigenere, "THEQUICKBROWNFOX", KEY),
        (CipherKind::Vigenere, "ATTACKATDAWN", "LEMON"),
        (CipherKind::Playfair, "CRYPTOGRAPHY", KEY),
        (CipherKind::Playfair, "MEETMEATNOON", "PLAYFAIREXAMPLE"),
        (CipherKind::Hill, "ATTACKATDAWN", "GYBNQKURP"),
        (CipherKind::Hill, "SHORTEXAMPLE", "HILL"),
    ];
    for (kind, plaintext, key) in cases {
        let ciphertext = encrypt(kind, plaintext, key).unwrap();
        assert_ne!(ciphertext, plaintext, "{kind} left the text unchanged");
        let decrypted = decrypt(kind, &ciphertext, key).unwrap();
        assert_eq!(decrypted, plaintext, "{kind} roundtrip failed");
    }
}

#[test]
fn test_calls_are_independent() {
    let first = encrypt(CipherKind::Playfair, "HELLO", "MONARCHY").unwrap();
    let _ = encrypt(CipherKind::Playfair, "SOMETHING ELSE", "ANOTHER KEY").unwrap();
    let second = encrypt(CipherKind::Playfair, "HELLO", "MONARCHY").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KeySquare>();
    assert_send_sync::<KeyMatrix>();
    assert_send_sync::<Digraph>();
    assert_send_sync::<CipherRequest<'static>>();
    assert_send_sync::<CipherError>();
    assert_send_sync::<Settings>();
    assert_send_sync::<CiphertextMetadata>();
}
