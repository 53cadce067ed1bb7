//! Cryptographic functions for shroud
//!
//! Provides AES-256-GCM authenticated encryption with Argon2id key
//! derivation. The parameters here are protocol constants: a blob written
//! with one set of parameters can only be opened with the same set, and the
//! blob format carries no parameter metadata.

pub mod cipher;
pub mod key_derivation;

pub use cipher::{open, seal, NONCE_SIZE, TAG_SIZE};
pub use key_derivation::{derive_key, DerivedKey, KEY_SIZE, SALT_SIZE};
