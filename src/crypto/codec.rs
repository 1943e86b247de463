//! AES-256-CBC envelope encryption/decryption
//!
//! Every encryption draws a fresh salt and IV, derives the key from the
//! password, and frames the result as a Base64 envelope. Decryption parses
//! the envelope and re-derives the key from the stored salt.
//!
//! # Limitations
//!
//! CBC with PKCS#7 padding gives confidentiality only. A modified envelope
//! usually fails the padding check, but it can also decrypt to garbage
//! without an error. The format is kept as-is so that existing envelopes
//! remain readable.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{PasscryptError, PasscryptResult};

use super::envelope::{Envelope, IV_SIZE};
use super::key_derivation::{derive_key, DerivedKey, KeyDerivationParams, SALT_SIZE};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes
const BLOCK_SIZE: usize = 16;

/// Stateless envelope codec
///
/// Holds only the key derivation parameters; `Codec::default()` is the
/// interoperable format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    params: KeyDerivationParams,
}

impl Codec {
    /// Create a codec with custom key derivation parameters
    pub fn new(params: KeyDerivationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &KeyDerivationParams {
        &self.params
    }

    /// Encrypt raw bytes into a Base64 envelope using the OS random source
    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> PasscryptResult<String> {
        self.encrypt_with_rng(&mut OsRng, plaintext, password)
    }

    /// Encrypt raw bytes, drawing salt and IV from `rng`
    pub fn encrypt_with_rng<R>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        password: &str,
    ) -> PasscryptResult<String>
    where
        R: RngCore + CryptoRng,
    {
        let mut salt = [0u8; SALT_SIZE];
        let mut iv = [0u8; IV_SIZE];
        rng.fill_bytes(&mut salt);
        rng.fill_bytes(&mut iv);

        let key = derive_key(password.as_bytes(), &salt, &self.params)?;
        let ciphertext = cbc_encrypt(&key, &iv, plaintext)?;

        tracing::debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            iterations = self.params.iterations,
            "sealed envelope"
        );

        Ok(Envelope::new(salt, iv, ciphertext).to_base64())
    }

    /// Decrypt a Base64 envelope back to raw bytes
    ///
    /// The envelope is parsed before any key derivation, so malformed input
    /// fails fast with `MalformedEnvelope`.
    pub fn decrypt(&self, envelope: &str, password: &str) -> PasscryptResult<Vec<u8>> {
        let envelope = Envelope::from_base64(envelope)?;

        let key = derive_key(password.as_bytes(), envelope.salt(), &self.params)?;
        let plaintext = cbc_decrypt(&key, envelope.iv(), envelope.ciphertext())?;

        tracing::debug!(
            ciphertext_len = envelope.ciphertext().len(),
            plaintext_len = plaintext.len(),
            "opened envelope"
        );

        Ok(plaintext)
    }

    /// Encrypt a string
    pub fn encrypt_text(&self, plaintext: &str, password: &str) -> PasscryptResult<String> {
        self.encrypt(plaintext.as_bytes(), password)
    }

    /// Decrypt to a string
    ///
    /// Invalid UTF-8 sequences become U+FFFD rather than an error, so an
    /// envelope made from arbitrary bytes still opens through the text path.
    pub fn decrypt_text(&self, envelope: &str, password: &str) -> PasscryptResult<String> {
        let plaintext = self.decrypt(envelope, password)?;
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }

    /// Encrypt file content
    pub fn encrypt_bytes(&self, data: &[u8], password: &str) -> PasscryptResult<String> {
        self.encrypt(data, password)
    }

    /// Decrypt to file content
    pub fn decrypt_bytes(&self, envelope: &str, password: &str) -> PasscryptResult<Vec<u8>> {
        self.decrypt(envelope, password)
    }
}

/// Encrypt a string with the default codec
pub fn encrypt_text(plaintext: &str, password: &str) -> PasscryptResult<String> {
    Codec::default().encrypt_text(plaintext, password)
}

/// Decrypt a string with the default codec
pub fn decrypt_text(envelope: &str, password: &str) -> PasscryptResult<String> {
    Codec::default().decrypt_text(envelope, password)
}

/// Encrypt raw bytes with the default codec
pub fn encrypt_bytes(data: &[u8], password: &str) -> PasscryptResult<String> {
    Codec::default().encrypt_bytes(data, password)
}

/// Decrypt raw bytes with the default codec
pub fn decrypt_bytes(envelope: &str, password: &str) -> PasscryptResult<Vec<u8>> {
    Codec::default().decrypt_bytes(envelope, password)
}

fn cbc_encrypt(key: &DerivedKey, iv: &[u8; IV_SIZE], plaintext: &[u8]) -> PasscryptResult<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| PasscryptError::Encryption(format!("Failed to create cipher: {}", e)))?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt(key: &DerivedKey, iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> PasscryptResult<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(PasscryptError::Decryption);
    }

    let cipher =
        Aes256CbcDec::new_from_slices(key.as_bytes(), iv).map_err(|_| PasscryptError::Decryption)?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PasscryptError::Decryption)
}
