//! Text-level sealing: password → key → AES-256-GCM → base64.
//!
//! The wire form is `base64(nonce(12) || ciphertext || tag(16))`, standard
//! alphabet with padding.  A key is derived inside every call and dropped
//! (zeroized) before the call returns; nothing is cached between calls.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroizing;

use super::encryption::{self, MIN_SEALED_LEN};
use super::kdf::KeyDeriver;
use crate::errors::{Result, VitalSealError};

/// Placeholder password used when a caller supplies none.
///
/// Anything sealed under it is only as private as this source file.
pub const DEFAULT_PASSWORD: &str = "lstyle-default-key-2024";

/// Seals and opens text payloads with a password.
#[derive(Clone)]
pub struct AeadCodec {
    deriver: KeyDeriver,
    default_password: Zeroizing<String>,
}

impl Default for AeadCodec {
    fn default() -> Self {
        Self::new(KeyDeriver::default(), DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for AeadCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AeadCodec")
            .field("deriver", &self.deriver)
            .field("default_password", &"[REDACTED]")
            .finish()
    }
}

impl AeadCodec {
    pub fn new(deriver: KeyDeriver, default_password: impl Into<String>) -> Self {
        Self {
            deriver,
            default_password: Zeroizing::new(default_password.into()),
        }
    }

    pub fn deriver(&self) -> &KeyDeriver {
        &self.deriver
    }

    /// Seal `plaintext` and return the base64 wire form.
    ///
    /// `password = None` falls back to the configured default password.
    /// Two calls with identical inputs return different strings.
    pub fn encrypt(&self, plaintext: &str, password: Option<&str>) -> Result<String> {
        self.encrypt_bytes(plaintext.as_bytes(), password)
    }

    /// Open a base64 sealed message and return the UTF-8 plaintext.
    pub fn decrypt(&self, sealed: &str, password: Option<&str>) -> Result<String> {
        let plaintext = Zeroizing::new(self.decrypt_bytes(sealed, password)?);
        std::str::from_utf8(&plaintext)
            .map(str::to_owned)
            .map_err(|_| VitalSealError::DecodingFailed)
    }

    /// Same as `encrypt` for payloads that are not text.
    pub fn encrypt_bytes(&self, plaintext: &[u8], password: Option<&str>) -> Result<String> {
        let key = self.deriver.derive(self.password(password))?;
        let sealed = encryption::seal(&key, plaintext)?;
        tracing::debug!(sealed_len = sealed.len(), "sealed payload");
        Ok(BASE64.encode(sealed))
    }

    /// Same as `decrypt` without the UTF-8 step.
    pub fn decrypt_bytes(&self, sealed: &str, password: Option<&str>) -> Result<Vec<u8>> {
        let raw = BASE64
            .decode(sealed)
            .map_err(|e| VitalSealError::MalformedMessage(format!("invalid base64: {e}")))?;

        // Reject structurally broken input before paying for key derivation.
        if raw.len() < MIN_SEALED_LEN {
            return Err(VitalSealError::MalformedMessage(format!(
                "expected at least {MIN_SEALED_LEN} bytes, got {}",
                raw.len()
            )));
        }

        let key = self.deriver.derive(self.password(password))?;
        let opened = encryption::open(&key, &raw);
        if opened.is_err() {
            tracing::debug!(sealed_len = raw.len(), "sealed payload failed authentication");
        }
        opened
    }

    fn password<'a>(&'a self, supplied: Option<&'a str>) -> &'a str {
        supplied.unwrap_or(self.default_password.as_str())
    }
}
