//! Encrypted blob layout
//!
//! A blob is `nonce ‖ ciphertext ‖ tag ‖ salt`: the first 12 bytes are the
//! AES-GCM nonce, the last 16 bytes are the key derivation salt, and
//! everything in between is the ciphertext with its 16-byte tag. Everything
//! needed to re-derive the key and re-run the AEAD travels inside the blob;
//! there is no separate header or metadata file.
//!
//! The layout carries no version or length fields, so the minimum-length
//! check is the only structural validation. This matches the existing
//! on-disk format exactly.

use crate::crypto::{NONCE_SIZE, SALT_SIZE, TAG_SIZE};
use crate::error::{ShroudError, ShroudResult};

/// Smallest structurally valid blob: nonce + tag (empty plaintext) + salt
pub const MIN_BLOB_SIZE: usize = NONCE_SIZE + TAG_SIZE + SALT_SIZE;

/// Borrowed view of a decoded blob
#[derive(Debug, PartialEq, Eq)]
pub struct BlobParts<'a> {
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext_and_tag: &'a [u8],
    pub salt: [u8; SALT_SIZE],
}

/// Assemble a blob from its parts
pub fn encode(
    nonce: &[u8; NONCE_SIZE],
    ciphertext_and_tag: &[u8],
    salt: &[u8; SALT_SIZE],
) -> Vec<u8> {
    let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext_and_tag.len() + SALT_SIZE);
    blob.extend_from_slice(nonce);
    blob.extend_from_slice(ciphertext_and_tag);
    blob.extend_from_slice(salt);
    blob
}

/// Split a blob back into nonce, ciphertext‖tag, and salt
///
/// Fails with a format error when the input is shorter than
/// [`MIN_BLOB_SIZE`]; such input cannot contain all three parts.
pub fn decode(blob: &[u8]) -> ShroudResult<BlobParts<'_>> {
    if blob.len() < MIN_BLOB_SIZE {
        return Err(ShroudError::Format(format!(
            "Encrypted blob too short: {} bytes, minimum is {}",
            blob.len(),
            MIN_BLOB_SIZE
        )));
    }

    let (body, salt_bytes) = blob.split_at(blob.len() - SALT_SIZE);
    let (nonce_bytes, ciphertext_and_tag) = body.split_at(NONCE_SIZE);

    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(nonce_bytes);
    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(salt_bytes);

    Ok(BlobParts {
        nonce,
        ciphertext_and_tag,
        salt,
    })
}
