//! Envelope framing
//!
//! An envelope is `salt(16) ‖ iv(16) ‖ ciphertext`, Base64-encoded for
//! transport. The offsets are fixed; existing blobs depend on them.

use base64::{
    alphabet,
    engine::{general_purpose::STANDARD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

use crate::error::{PasscryptError, PasscryptResult};

use super::key_derivation::SALT_SIZE;

/// IV length in bytes (one AES block)
pub const IV_SIZE: usize = 16;

/// Smallest possible envelope: salt and IV with no ciphertext
pub const HEADER_SIZE: usize = SALT_SIZE + IV_SIZE;

/// Decoder matching browser `atob`: padding optional, trailing bits ignored
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// A parsed envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    salt: [u8; SALT_SIZE],
    iv: [u8; IV_SIZE],
    ciphertext: Vec<u8>,
}

impl Envelope {
    /// Assemble an envelope from its parts
    pub fn new(salt: [u8; SALT_SIZE], iv: [u8; IV_SIZE], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            iv,
            ciphertext,
        }
    }

    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total framed length in bytes
    pub fn len(&self) -> usize {
        HEADER_SIZE + self.ciphertext.len()
    }

    /// True when there is no ciphertext after the header
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Concatenate salt, IV and ciphertext
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Split raw envelope bytes at the fixed offsets
    pub fn from_bytes(bytes: &[u8]) -> PasscryptResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(PasscryptError::MalformedEnvelope(format!(
                "Expected at least {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let (header, ciphertext) = bytes.split_at(HEADER_SIZE);
        let (salt, iv) = header.split_at(SALT_SIZE);

        let mut salt_arr = [0u8; SALT_SIZE];
        salt_arr.copy_from_slice(salt);
        let mut iv_arr = [0u8; IV_SIZE];
        iv_arr.copy_from_slice(iv);

        Ok(Self::new(salt_arr, iv_arr, ciphertext.to_vec()))
    }

    /// Encode as padded standard Base64
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decode a Base64 envelope
    ///
    /// ASCII whitespace anywhere in the input is ignored, so wrapped or
    /// copy-pasted blobs still parse.
    pub fn from_base64(encoded: &str) -> PasscryptResult<Self> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = FORGIVING
            .decode(compact.as_bytes())
            .map_err(|e| PasscryptError::MalformedEnvelope(format!("Invalid Base64: {}", e)))?;

        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Envelope {
        Envelope::new([0xAA; SALT_SIZE], [0xBB; IV_SIZE], vec![1, 2, 3, 4, 5])
    }

    #[test]
    fn test_layout_offsets() {
        let bytes = sample().to_bytes();
        assert_eq!(bytes.len(), 37);
        assert_eq!(&bytes[..16], &[0xAA; 16]);
        assert_eq!(&bytes[16..32], &[0xBB; 16]);
        assert_eq!(&bytes[32..], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_lengths() {
        let raw: Vec<u8> = (0..80u8).collect();
        let envelope = Envelope::from_bytes(&raw).unwrap();
        assert_eq!(envelope.salt().len(), 16);
        assert_eq!(envelope.iv().len(), 16);
        assert_eq!(envelope.ciphertext().len(), 80 - 32);
        assert_eq!(envelope.salt()[0], 0);
        assert_eq!(envelope.iv()[0], 16);
        assert_eq!(envelope.ciphertext()[0], 32);
        assert_eq!(envelope.to_bytes(), raw);
    }

    #[test]
    fn test_header_only_is_accepted() {
        let envelope = Envelope::from_bytes(&[0u8; HEADER_SIZE]).unwrap();
        assert!(envelope.is_empty());
        assert_eq!(envelope.len(), HEADER_SIZE);
    }

    #[test]
    fn test_short_input_rejected() {
        let err = Envelope::from_bytes(&[0u8; 31]).unwrap_err();
        assert!(err.is_malformed_envelope());

        let err = Envelope::from_bytes(&[]).unwrap_err();
        assert!(err.is_malformed_envelope());
    }

    #[test]
    fn test_base64_is_padded_standard() {
        let encoded = sample().to_base64();
        // 37 bytes -> 52 chars ending in "=="
        assert_eq!(encoded.len(), 52);
        assert!(encoded.ends_with("=="));
        assert_eq!(Envelope::from_base64(&encoded).unwrap(), sample());
    }

    #[test]
    fn test_base64_tolerates_whitespace_and_missing_padding() {
        let encoded = sample().to_base64();
        let unpadded = encoded.trim_end_matches('=');
        assert_eq!(Envelope::from_base64(unpadded).unwrap(), sample());

        let wrapped = format!("  {}\n{}\r\n", &encoded[..20], &encoded[20..]);
        assert_eq!(Envelope::from_base64(&wrapped).unwrap(), sample());
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let err = Envelope::from_base64("not base64 at all!!").unwrap_err();
        assert!(err.is_malformed_envelope());

        let err = Envelope::from_base64("ab$d").unwrap_err();
        assert!(err.is_malformed_envelope());
    }

    #[test]
    fn test_valid_base64_too_short_rejected() {
        let short = STANDARD.encode([0u8; 20]);
        let err = Envelope::from_base64(&short).unwrap_err();
        assert!(err.is_malformed_envelope());

        let err = Envelope::from_base64("").unwrap_err();
        assert!(err.is_malformed_envelope());
    }
}
