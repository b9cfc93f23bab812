//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The salt is a fixed application constant rather than a per-record random
//! value, so the same password always re-derives the same key without any
//! salt being stored next to the sealed message.  Parameters are carried in
//! `KdfParams` (loaded from `.vitalseal.toml` or the defaults below).

use std::fmt;

use hmac::Hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::errors::{Result, VitalSealError};

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Fixed application salt used when none is configured.
pub const DEFAULT_SALT: &str = "lstyle-seniors-plus-2024";

/// Lowest iteration count `KeyDeriver::new` accepts.
pub const MIN_ITERATIONS: u32 = 1_000;

/// PBKDF2 parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    /// Salt bytes (the application salt, not secret).
    pub salt: Vec<u8>,
    /// Number of HMAC-SHA256 iterations.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.as_bytes().to_vec(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Default salt with a custom iteration count.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

/// A 256-bit AEAD key that zeroes its memory when dropped.
///
/// There is deliberately no way to read the bytes from outside the crate:
/// a derived key only ever feeds AES-256-GCM.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    pub(crate) fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Turns passwords into `DerivedKey`s with a fixed set of `KdfParams`.
///
/// Holds no key material, so one deriver can be shared freely across
/// threads; every call produces a fresh key owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct KeyDeriver {
    params: KdfParams,
}

impl KeyDeriver {
    /// Build a deriver, rejecting dangerously weak parameters.
    pub fn new(params: KdfParams) -> Result<Self> {
        if params.iterations < MIN_ITERATIONS {
            return Err(VitalSealError::KeyDerivationFailed(format!(
                "PBKDF2 iterations must be at least {MIN_ITERATIONS} (got {})",
                params.iterations
            )));
        }
        if params.salt.is_empty() {
            return Err(VitalSealError::KeyDerivationFailed(
                "PBKDF2 salt must not be empty".into(),
            ));
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// Derive the 256-bit key for `password`.
    ///
    /// Deterministic for a given password and parameter set.  Any string is
    /// acceptable key material, including the empty string.
    pub fn derive(&self, password: &str) -> Result<DerivedKey> {
        tracing::trace!(iterations = self.params.iterations, "deriving key");

        let mut key = [0u8; KEY_LEN];
        let derived = pbkdf2::pbkdf2::<Hmac<Sha256>>(
            password.as_bytes(),
            &self.params.salt,
            self.params.iterations,
            &mut key,
        );
        if let Err(e) = derived {
            key.zeroize();
            return Err(VitalSealError::KeyDerivationFailed(format!(
                "PBKDF2-HMAC-SHA256 unavailable: {e}"
            )));
        }

        Ok(DerivedKey::new(key))
    }
}
