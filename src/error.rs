//! Custom error types for shroud
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for shroud operations
#[derive(Error, Debug)]
pub enum ShroudError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The OS secure random source was unavailable or failed
    #[error("Random source error: {0}")]
    Randomness(String),

    /// Key derivation failed (typically resource exhaustion in Argon2)
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Authentication failed during decryption.
    ///
    /// Deliberately carries no detail: a wrong password and a tampered
    /// blob are indistinguishable at this layer, and must stay that way.
    #[error("authentication failed: wrong password or altered ciphertext")]
    Authentication,

    /// The encrypted blob is structurally invalid
    #[error("Format error: {0}")]
    Format(String),

    /// Unexpected failure inside the AEAD cipher itself
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Failed to obtain a password from the reader
    #[error("Password read error: {0}")]
    PasswordRead(String),
}

impl ShroudError {
    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Check if this is a blob format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<std::io::Error> for ShroudError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for shroud operations
pub type ShroudResult<T> = Result<T, ShroudError>;
