//! AES-256-GCM authenticated encryption over raw bytes.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the cipher output.  `open` splits the nonce back out
//! before decrypting.
//!
//! Layout of the sealed byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use super::kdf::DerivedKey;
use crate::errors::{Result, VitalSealError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Shortest buffer `open` will even attempt to authenticate.
pub const MIN_SEALED_LEN: usize = NONCE_LEN + TAG_LEN;

/// Encrypt `plaintext` under `key`.
///
/// Returns the nonce prepended to the cipher output (nonce || ciphertext || tag).
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VitalSealError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Never reused: one OS-random nonce per call.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| VitalSealError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt a buffer produced by `seal`.
///
/// Buffers shorter than nonce + tag are `MalformedMessage`; every failure
/// after that point (wrong key, flipped bit, truncated tag) is the same
/// `AuthenticationFailed`.
pub fn open(key: &DerivedKey, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < MIN_SEALED_LEN {
        return Err(VitalSealError::MalformedMessage(format!(
            "expected at least {MIN_SEALED_LEN} bytes, got {}",
            sealed.len()
        )));
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VitalSealError::AuthenticationFailed)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| VitalSealError::AuthenticationFailed)
}
