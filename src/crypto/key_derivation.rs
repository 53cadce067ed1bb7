//! Key derivation using Argon2id
//!
//! Stretches a password and a 16-byte salt into a 32-byte AES-256 key using
//! Argon2id, a memory-hard key derivation function resistant to GPU/ASIC
//! attacks.
//!
//! The Argon2 parameters are fixed protocol constants, not configuration:
//! the salt travels inside the encrypted blob with no parameter record, so
//! decryption must be able to reproduce the exact same derivation.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ShroudError, ShroudResult};

/// Size of the key derivation salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of the derived AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Argon2id memory cost in KiB (64 MiB)
const MEMORY_COST_KIB: u32 = 64 * 1024;

/// Argon2id time cost (iterations)
const TIME_COST: u32 = 1;

/// Argon2id parallelism degree
const PARALLELISM: u32 = 4;

/// A derived encryption key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}

/// Derive an AES-256 key from a password and salt
///
/// Deterministic: the same password and salt always produce the same key.
/// The only plausible failure is resource exhaustion inside Argon2; there is
/// no fallback to weaker parameters.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE]) -> ShroudResult<DerivedKey> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, Some(KEY_SIZE))
        .map_err(|e| ShroudError::KeyDerivation(format!("Invalid Argon2 parameters: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_SIZE];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| ShroudError::KeyDerivation(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey { key })
}
