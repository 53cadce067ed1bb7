//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave partial output on failure.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{ShroudError, ShroudResult};

/// Read an entire file into memory
pub fn read_bytes<P: AsRef<Path>>(path: P) -> ShroudResult<Vec<u8>> {
    let path = path.as_ref();

    let mut file = File::open(path)
        .map_err(|e| ShroudError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ShroudError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(bytes)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The destination is either fully written or untouched; an interrupted
/// operation never leaves a truncated file at the target path.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> ShroudResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ShroudError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file in the same directory, so the rename stays atomic
    let temp_path = path.with_extension("shroud.tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| ShroudError::Io(format!("Failed to create temp file: {}", e)))?;

    file.write_all(bytes)
        .map_err(|e| ShroudError::Io(format!("Failed to write data: {}", e)))?;

    file.sync_all()
        .map_err(|e| ShroudError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ShroudError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
