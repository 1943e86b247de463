//! Key derivation using PBKDF2-HMAC-SHA-256
//!
//! Turns a password and a 16-byte salt into a 256-bit AES key. The default
//! work factor of 100,000 iterations is part of the envelope format: any
//! other value produces keys that existing envelopes will not open under.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{PasscryptError, PasscryptResult};

/// Salt length in bytes
pub const SALT_SIZE: usize = 16;

/// Derived key length in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// Iteration count of the interoperable envelope format
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Parameters for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivationParams {
    /// PBKDF2 iteration count
    pub iterations: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KeyDerivationParams {
    /// Create params with a custom iteration count
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Whether these params match the interoperable default
    pub fn is_default(&self) -> bool {
        self.iterations == DEFAULT_ITERATIONS
    }
}

/// A derived encryption key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an AES-256 key from a password and salt
///
/// The password may be empty; rejecting that is the caller's policy. The
/// salt must be exactly [`SALT_SIZE`] bytes.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    params: &KeyDerivationParams,
) -> PasscryptResult<DerivedKey> {
    if salt.len() != SALT_SIZE {
        return Err(PasscryptError::InvalidInput(format!(
            "Salt must be {} bytes, got {}",
            SALT_SIZE,
            salt.len()
        )));
    }

    if params.iterations == 0 {
        return Err(PasscryptError::Derivation(
            "Iteration count must be positive".to_string(),
        ));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password, salt, params.iterations, &mut key);

    Ok(DerivedKey { key })
}
