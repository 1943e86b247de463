//! File I/O utilities with atomic writes
//!
//! Reads payload files and writes result artifacts without leaving a
//! half-written file behind on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PasscryptError;

/// Read a payload file as raw bytes
pub fn read_payload<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, PasscryptError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(PasscryptError::InvalidInput(format!(
            "File not found: {}",
            path.display()
        )));
    }

    fs::read(path)
        .map_err(|e| PasscryptError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Read a file holding a Base64 envelope
///
/// Invalid UTF-8 means the file cannot be an envelope.
pub fn read_envelope<P: AsRef<Path>>(path: P) -> Result<String, PasscryptError> {
    let path = path.as_ref();
    let bytes = read_payload(path)?;

    String::from_utf8(bytes).map_err(|_| {
        PasscryptError::MalformedEnvelope(format!("{} is not a text file", path.display()))
    })
}

/// Write bytes to a file atomically (write to temp, then rename)
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), PasscryptError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PasscryptError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let written = write_temp(temp_path, data).and_then(|()| {
        fs::rename(temp_path, path)
            .map_err(|e| PasscryptError::Io(format!("Failed to rename temp file: {}", e)))
    });

    remove_on_error(temp_path, written)
}

/// Create, fill and fsync the temp file
fn write_temp(temp_path: &Path, data: &[u8]) -> Result<(), PasscryptError> {
    let file = File::create(temp_path)
        .map_err(|e| PasscryptError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .map_err(|e| PasscryptError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| PasscryptError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PasscryptError::Io(format!("Failed to sync data: {}", e)))
}

/// Delete a leftover temp file when any step of the write failed
fn remove_on_error<T>(
    temp_path: &Path,
    result: Result<T, PasscryptError>,
) -> Result<T, PasscryptError> {
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}
