//! Cryptographic primitives for VitalSeal.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM sealing and opening of raw bytes (`encryption`)
//! - The password-to-base64 text codec built on both (`codec`)

pub mod codec;
pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use vitalseal::crypto::{AeadCodec, KeyDeriver, ...};
pub use codec::{AeadCodec, DEFAULT_PASSWORD};
pub use encryption::{open, seal, MIN_SEALED_LEN, NONCE_LEN, TAG_LEN};
pub use kdf::{DerivedKey, KdfParams, KeyDeriver};
