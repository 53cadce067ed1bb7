//! shroud - Password-based authenticated file encryption
//!
//! Encrypts a file under a password into a single self-contained blob, and
//! decrypts that blob back to the exact original bytes — or fails loudly if
//! the password is wrong or the blob was altered. Keys are stretched from
//! the password with Argon2id; the payload is sealed with AES-256-GCM.
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `crypto`: Key derivation (Argon2id) and the AEAD cipher (AES-256-GCM)
//! - `format`: The `nonce ‖ ciphertext+tag ‖ salt` blob layout
//! - `password`: Password acquisition behind the `PasswordReader` trait
//! - `pipeline`: The encrypt/decrypt operations composing the above
//! - `io`: Whole-file reads and atomic whole-file writes
//!
//! # Example
//!
//! ```rust,ignore
//! use shroud::password::Password;
//! use shroud::pipeline::{decrypt_bytes, encrypt_bytes};
//!
//! let password = Password::from("correct-horse-battery-staple");
//! let blob = encrypt_bytes(b"hello world", &password)?;
//! let plaintext = decrypt_bytes(&blob, &password)?;
//! ```

pub mod crypto;
pub mod error;
pub mod format;
pub mod io;
pub mod password;
pub mod pipeline;

pub use error::{ShroudError, ShroudResult};
