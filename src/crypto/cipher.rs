//! AES-256-GCM encryption/decryption
//!
//! Authenticated encryption with no associated data. The 16-byte GCM tag is
//! appended to the ciphertext, so `seal` output is always plaintext length
//! plus [`TAG_SIZE`].

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};

use crate::crypto::key_derivation::DerivedKey;
use crate::error::{ShroudError, ShroudResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Encrypt plaintext under the given key and nonce
///
/// The caller is responsible for nonce uniqueness: sealing two different
/// plaintexts under the same (key, nonce) pair breaks GCM.
pub fn seal(key: &DerivedKey, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> ShroudResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| ShroudError::Cipher(format!("Encryption failed: {}", e)))
}

/// Decrypt and authenticate ciphertext‖tag under the given key and nonce
///
/// Fails with [`ShroudError::Authentication`] when the tag does not verify.
/// That single error covers both a wrong password (wrong derived key) and
/// any tampering with nonce, ciphertext, or tag; the two causes are
/// indistinguishable and the error intentionally does not say which occurred.
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_SIZE],
    ciphertext_and_tag: &[u8],
) -> ShroudResult<Vec<u8>> {
    if ciphertext_and_tag.len() < TAG_SIZE {
        return Err(ShroudError::Format(format!(
            "Ciphertext too short: {} bytes, need at least {} for the tag",
            ciphertext_and_tag.len(),
            TAG_SIZE
        )));
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext_and_tag)
        .map_err(|_| ShroudError::Authentication)
}
