use thiserror::Error;

/// All errors that can occur in VitalSeal.
///
/// Messages never embed passwords, key bytes or plaintext.
#[derive(Debug, Error)]
pub enum VitalSealError {
    // --- Crypto errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Malformed sealed message: {0}")]
    MalformedMessage(String),

    #[error("Authentication failed — wrong password or corrupted data")]
    AuthenticationFailed,

    #[error("Decrypted data is not valid UTF-8 text")]
    DecodingFailed,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Record rejected — {0} field(s) failed validation")]
    RecordRejected(usize),
}

/// Convenience type alias for VitalSeal results.
pub type Result<T> = std::result::Result<T, VitalSealError>;
