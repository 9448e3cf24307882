//! # Hill Cipher
//!
//! Block encryption by multiplying letter-index vectors against a key matrix modulo the
//! alphabet size, and decryption against the key's modular inverse.

pub mod key;
pub mod params;

pub use key::KeyMatrix;
pub use params::HillParams;

use crate::errors::HillCipherError;

/// Encrypts `plaintext` with `key`, using blocks as wide as the key.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::{KeyMatrix, encrypt};
/// let key = KeyMatrix::from_keyword("GYBNQKURP").unwrap();
/// assert_eq!(encrypt("act", &key).unwrap(), "POH");
/// ```
pub fn encrypt(plaintext: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    HillParams::for_key(key).encrypt(key, plaintext)
}

/// Decrypts `ciphertext` with `key`, failing if `key` is not invertible modulo 26.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::{KeyMatrix, decrypt};
/// let key = KeyMatrix::from_keyword("GYBNQKURP").unwrap();
/// assert_eq!(decrypt("POH", &key).unwrap(), "ACT");
/// ```
pub fn decrypt(ciphertext: &str, key: &KeyMatrix) -> Result<String, HillCipherError> {
    HillParams::for_key(key).decrypt(key, ciphertext)
}
