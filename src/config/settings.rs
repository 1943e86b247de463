//! User settings for passcrypt
//!
//! Persisted as `config.json` in the base directory. Missing fields fall
//! back to defaults so older files keep loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PasscryptPaths;
use crate::crypto::{Codec, KeyDerivationParams, DEFAULT_ITERATIONS};
use crate::error::PasscryptError;

/// User settings for passcrypt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// PBKDF2 iteration count. Anything but 100,000 makes envelopes that
    /// other implementations of the format cannot open.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Strip surrounding whitespace from passwords and text payloads
    #[serde(default = "default_trim_input")]
    pub trim_input: bool,

    /// Directory for written artifacts (defaults to next to the input,
    /// or the working directory for text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_trim_input() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            kdf_iterations: default_kdf_iterations(),
            trim_input: default_trim_input(),
            output_dir: None,
        }
    }
}

impl Settings {
    /// Codec configured with these settings
    pub fn codec(&self) -> Codec {
        Codec::new(KeyDerivationParams::with_iterations(self.kdf_iterations))
    }

    /// Check the settings before use
    pub fn validate(&self) -> Result<(), PasscryptError> {
        if self.kdf_iterations == 0 {
            return Err(PasscryptError::Config(
                "kdf_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PasscryptPaths) -> Result<Self, PasscryptError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PasscryptError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PasscryptError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PasscryptPaths) -> Result<(), PasscryptError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PasscryptError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PasscryptError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
