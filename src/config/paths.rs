//! Path management for passcrypt
//!
//! ## Path Resolution Order
//!
//! 1. `PASSCRYPT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/passcrypt` or `~/.config/passcrypt`
//! 3. Windows: `%APPDATA%\passcrypt`

use std::path::PathBuf;

use crate::error::PasscryptError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PASSCRYPT_DATA_DIR";

/// Manages all paths used by passcrypt
#[derive(Debug, Clone)]
pub struct PasscryptPaths {
    base_dir: PathBuf,
}

impl PasscryptPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PasscryptError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PasscryptError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PasscryptError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PasscryptError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                PasscryptError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("passcrypt"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PasscryptError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PasscryptError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("passcrypt"))
}
