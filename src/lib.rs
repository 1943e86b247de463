//! passcrypt - password-based encryption of text and small files
//!
//! Payloads are encrypted with AES-256-CBC under a key derived from a
//! password with PBKDF2-HMAC-SHA-256 (100,000 iterations), then framed as
//! `salt(16) ‖ iv(16) ‖ ciphertext` and Base64-encoded.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, envelope framing and the codec
//! - `error`: custom error types
//! - `config`: path resolution and user settings
//! - `storage`: payload reading and artifact writing
//! - `cli`: terminal front-end commands
//!
//! # Example
//!
//! ```rust,no_run
//! let sealed = passcrypt::encrypt_text("hello world", "correct horse")?;
//! assert_eq!(passcrypt::decrypt_text(&sealed, "correct horse")?, "hello world");
//! # Ok::<(), passcrypt::PasscryptError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod storage;

pub use crypto::{decrypt_bytes, decrypt_text, encrypt_bytes, encrypt_text, Codec};
pub use error::{PasscryptError, PasscryptResult};
