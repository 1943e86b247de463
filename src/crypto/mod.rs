//! Cryptographic core for passcrypt
//!
//! PBKDF2-HMAC-SHA-256 key derivation, AES-256-CBC encryption and the
//! `salt ‖ iv ‖ ciphertext` Base64 envelope.

pub mod codec;
pub mod envelope;
pub mod key_derivation;
pub mod secure_memory;

pub use codec::{decrypt_bytes, decrypt_text, encrypt_bytes, encrypt_text, Codec};
pub use envelope::{Envelope, HEADER_SIZE, IV_SIZE};
pub use key_derivation::{
    derive_key, DerivedKey, KeyDerivationParams, DEFAULT_ITERATIONS, KEY_SIZE, SALT_SIZE,
};
pub use secure_memory::SecureString;
