//! Custom error types for passcrypt
//!
//! This module defines the error hierarchy for the library and CLI using
//! thiserror. The first five variants are the failure classes of the
//! encryption core; the rest belong to the configuration and file layers.

use thiserror::Error;

/// The main error type for passcrypt operations
#[derive(Error, Debug)]
pub enum PasscryptError {
    /// Degenerate input the core refuses to work with (bad salt length,
    /// empty password or payload at the CLI layer)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The envelope is not Base64 or is too short to hold salt and IV
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Wrong password or corrupted ciphertext.
    ///
    /// Carries no detail: padding failures and other cipher rejections must
    /// look identical to the caller.
    #[error("Decryption failed: wrong password or corrupted data")]
    Decryption,

    /// The key derivation primitive rejected its parameters
    #[error("Key derivation failed: {0}")]
    Derivation(String),

    /// The cipher primitive rejected its inputs
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl PasscryptError {
    /// Create an invalid input error for a missing or empty field
    pub fn empty(field: &str) -> Self {
        Self::InvalidInput(format!("{} must not be empty", field))
    }

    /// Check if this is a decryption failure
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }

    /// Check if this is a malformed envelope error
    pub fn is_malformed_envelope(&self) -> bool {
        matches!(self, Self::MalformedEnvelope(_))
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for PasscryptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PasscryptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for passcrypt operations
pub type PasscryptResult<T> = Result<T, PasscryptError>;
