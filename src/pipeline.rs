//! Encrypt/decrypt orchestration
//!
//! Composes key derivation, the AEAD cipher, and the blob codec into the two
//! top-level operations. Byte-level functions are pure given their inputs;
//! the file-level wrappers add password prompting and whole-file I/O.
//!
//! Every failure is final for the call: cryptographic steps are never
//! retried, and retrying with fresh randomness would silently change
//! behavior, so a caller who wants another attempt makes another call.

use std::path::Path;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::crypto::{derive_key, open, seal, NONCE_SIZE, SALT_SIZE};
use crate::error::{ShroudError, ShroudResult};
use crate::format;
use crate::io;
use crate::password::{Password, PasswordReader};

/// Encrypt plaintext under a password, producing a self-contained blob
///
/// Generates a fresh random salt and nonce from the OS CSPRNG on every call,
/// so encrypting the same plaintext twice yields different blobs.
pub fn encrypt_bytes(plaintext: &[u8], password: &Password) -> ShroudResult<Vec<u8>> {
    let mut salt = [0u8; SALT_SIZE];
    fill_random(&mut salt)?;

    let mut nonce = [0u8; NONCE_SIZE];
    fill_random(&mut nonce)?;

    let key = derive_key(password.as_bytes(), &salt)?;
    let ciphertext_and_tag = seal(&key, &nonce, plaintext)?;

    Ok(format::encode(&nonce, &ciphertext_and_tag, &salt))
}

/// Decrypt a blob under a password, recovering the original plaintext
///
/// Fails with a format error on a structurally invalid blob, and with an
/// authentication failure when the password is wrong or the blob was altered.
pub fn decrypt_bytes(blob: &[u8], password: &Password) -> ShroudResult<Vec<u8>> {
    let parts = format::decode(blob)?;

    let key = derive_key(password.as_bytes(), &parts.salt)?;
    open(&key, &parts.nonce, parts.ciphertext_and_tag)
}

/// Encrypt a plaintext file to an encrypted output file
///
/// Prompts for the password through `reader`, naming the input file. The
/// output is written atomically; nothing is written when any step fails.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    reader: &dyn PasswordReader,
) -> ShroudResult<()> {
    let password = prompt_for(input.as_ref(), reader)?;
    let plaintext = io::read_bytes(&input)?;

    let blob = encrypt_bytes(&plaintext, &password)?;
    io::write_bytes_atomic(&output, &blob)
}

/// Decrypt an encrypted file to a plaintext output file
///
/// Prompts for the password through `reader`, naming the input file. The
/// output is written atomically; nothing is written when any step fails.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    reader: &dyn PasswordReader,
) -> ShroudResult<()> {
    let password = prompt_for(input.as_ref(), reader)?;
    let blob = io::read_bytes(&input)?;

    let plaintext = decrypt_bytes(&blob, &password)?;
    io::write_bytes_atomic(&output, &plaintext)
}

fn prompt_for(input: &Path, reader: &dyn PasswordReader) -> ShroudResult<Password> {
    reader.read_password(&format!("Enter password for {}: ", input.display()))
}

fn fill_random(buf: &mut [u8]) -> ShroudResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| ShroudError::Randomness(format!("Secure random source failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::TAG_SIZE;
    use crate::format::MIN_BLOB_SIZE;
    use crate::password::FixedPasswordReader;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() {
        let password = Password::from("correct-horse-battery-staple");
        let plaintext = b"hello world";

        let blob = encrypt_bytes(plaintext, &password).unwrap();
        assert_eq!(blob.len(), NONCE_SIZE + plaintext.len() + TAG_SIZE + SALT_SIZE);

        let recovered = decrypt_bytes(&blob, &password).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_round_trip_empty_plaintext() {
        let password = Password::from("pw");

        let blob = encrypt_bytes(b"", &password).unwrap();
        assert_eq!(blob.len(), MIN_BLOB_SIZE);

        let recovered = decrypt_bytes(&blob, &password).unwrap();
        assert!(recovered.is_empty());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let blob = encrypt_bytes(b"secret data", &Password::from("right")).unwrap();

        let result = decrypt_bytes(&blob, &Password::from("wrong"));
        assert!(matches!(result, Err(ShroudError::Authentication)));
    }

    #[test]
    fn test_encryption_is_nondeterministic() {
        let password = Password::from("same password");
        let plaintext = b"same plaintext";

        let blob1 = encrypt_bytes(plaintext, &password).unwrap();
        let blob2 = encrypt_bytes(plaintext, &password).unwrap();

        assert_ne!(blob1, blob2);
        // Fresh salt and nonce each time, not just different ciphertext.
        assert_ne!(&blob1[..NONCE_SIZE], &blob2[..NONCE_SIZE]);
        assert_ne!(
            &blob1[blob1.len() - SALT_SIZE..],
            &blob2[blob2.len() - SALT_SIZE..]
        );
    }

    #[test]
    fn test_short_input_rejected_without_panic() {
        let password = Password::from("pw");
        for len in 0..MIN_BLOB_SIZE {
            let result = decrypt_bytes(&vec![0u8; len], &password);
            assert!(
                matches!(result, Err(ShroudError::Format(_))),
                "{} byte input should be a format error",
                len
            );
        }
    }

    #[test]
    fn test_salt_tamper_rejected() {
        // Flipping the last byte (salt) changes the derived key at decrypt
        // time, which surfaces as an authentication failure.
        let password = Password::from("correct-horse-battery-staple");
        let mut blob = encrypt_bytes(b"hello world", &password).unwrap();

        let last = blob.len() - 1;
        blob[last] ^= 0x01;

        let result = decrypt_bytes(&blob, &password);
        assert!(matches!(result, Err(ShroudError::Authentication)));
    }

    #[test]
    fn test_ciphertext_tamper_rejected() {
        let password = Password::from("correct-horse-battery-staple");
        let mut blob = encrypt_bytes(b"hello world", &password).unwrap();

        blob[NONCE_SIZE] ^= 0x01;

        let result = decrypt_bytes(&blob, &password);
        assert!(matches!(result, Err(ShroudError::Authentication)));
    }

    #[test]
    fn test_any_byte_tamper_rejected() {
        // One flipped bit in every byte position: nonce, ciphertext, tag,
        // and salt regions all have to trip authentication.
        let password = Password::from("pw");
        let blob = encrypt_bytes(b"hi", &password).unwrap();

        for pos in 0..blob.len() {
            let mut tampered = blob.clone();
            tampered[pos] ^= 0x80;

            let result = decrypt_bytes(&tampered, &password);
            assert!(
                matches!(result, Err(ShroudError::Authentication)),
                "flip at byte {} should fail authentication",
                pos
            );
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let enc = dir.path().join("plain.enc");
        let out = dir.path().join("recovered.txt");

        std::fs::write(&plain, b"file contents").unwrap();

        let reader = FixedPasswordReader::new(b"ThisPasswordIsOnlyForTests".to_vec());
        encrypt_file(&plain, &enc, &reader).unwrap();
        decrypt_file(&enc, &out, &reader).unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), b"file contents");
        assert_ne!(std::fs::read(&enc).unwrap(), b"file contents");
    }

    #[test]
    fn test_decrypt_failure_writes_no_output() {
        let dir = tempdir().unwrap();
        let enc = dir.path().join("plain.enc");
        let out = dir.path().join("recovered.txt");

        std::fs::write(&enc, b"not a valid blob at all, but long enough to decode").unwrap();

        let reader = FixedPasswordReader::new(b"pw".to_vec());
        let result = decrypt_file(&enc, &out, &reader);

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let reader = FixedPasswordReader::new(b"pw".to_vec());

        let result = encrypt_file(
            dir.path().join("absent.txt"),
            dir.path().join("out.enc"),
            &reader,
        );
        assert!(matches!(result, Err(ShroudError::Io(_))));
    }

    #[test]
    fn test_password_reader_error_propagates() {
        struct NoTerminal;
        impl PasswordReader for NoTerminal {
            fn read_password(&self, _prompt: &str) -> ShroudResult<Password> {
                Err(ShroudError::PasswordRead("no tty".into()))
            }
        }

        let dir = tempdir().unwrap();
        let result = encrypt_file(
            dir.path().join("in.txt"),
            dir.path().join("out.enc"),
            &NoTerminal,
        );
        assert!(matches!(result, Err(ShroudError::PasswordRead(_))));
    }
}
