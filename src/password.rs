//! Password acquisition
//!
//! Encryption and decryption need a password but must not care where it
//! comes from. [`PasswordReader`] is that seam: the binary injects the
//! interactive no-echo terminal reader, tests inject a fixed one. The
//! [`Password`] container zeroes its bytes on drop and never prints them.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ShroudError, ShroudResult};

/// A password held as raw bytes, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Password {
    bytes: Vec<u8>,
}

impl Password {
    /// Wrap password bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Get the password bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the length
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.bytes.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.bytes.len())
    }
}

/// Source of password bytes for an encrypt or decrypt operation
pub trait PasswordReader {
    /// Read one password, showing `prompt` to the user where that applies
    fn read_password(&self, prompt: &str) -> ShroudResult<Password>;
}

/// Reads the password from the controlling terminal with echo disabled
pub struct TerminalPasswordReader;

impl PasswordReader for TerminalPasswordReader {
    fn read_password(&self, prompt: &str) -> ShroudResult<Password> {
        let password = rpassword::prompt_password(prompt)
            .map_err(|e| ShroudError::PasswordRead(format!("Failed to read password: {}", e)))?;
        Ok(Password::from(password))
    }
}

/// Returns a predetermined password; for tests and scripted use
pub struct FixedPasswordReader {
    password: Vec<u8>,
}

impl FixedPasswordReader {
    pub fn new(password: impl Into<Vec<u8>>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

impl PasswordReader for FixedPasswordReader {
    fn read_password(&self, _prompt: &str) -> ShroudResult<Password> {
        Ok(Password::new(self.password.clone()))
    }
}
