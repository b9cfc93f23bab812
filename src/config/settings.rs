use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::{KdfParams, KeyDeriver, DEFAULT_ITERATIONS, DEFAULT_SALT};
use crate::crypto::{AeadCodec, DEFAULT_PASSWORD};
use crate::errors::{Result, VitalSealError};
use crate::validation::{ProfileBounds, RecordValidator};

/// Project-level configuration, loaded from `.vitalseal.toml`.
///
/// Every field has a sensible default so VitalSeal works out-of-the-box
/// without any config file at all.
#[derive(Clone, Serialize, Deserialize)]
pub struct Settings {
    /// PBKDF2 iteration count (default: 100 000).
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Application-wide PBKDF2 salt.
    #[serde(default = "default_kdf_salt")]
    pub kdf_salt: String,

    /// Password used when the caller supplies none.  A placeholder only.
    #[serde(default = "default_password")]
    pub default_password: String,

    /// Admissible ranges for health profile fields.
    #[serde(default)]
    pub bounds: ProfileBounds,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_kdf_salt() -> String {
    DEFAULT_SALT.to_string()
}

fn default_password() -> String {
    DEFAULT_PASSWORD.to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            kdf_iterations: default_kdf_iterations(),
            kdf_salt: default_kdf_salt(),
            default_password: default_password(),
            bounds: ProfileBounds::default(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("kdf_iterations", &self.kdf_iterations)
            .field("kdf_salt", &self.kdf_salt)
            .field("default_password", &"[REDACTED]")
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".vitalseal.toml";

    /// Load settings from `<project_dir>/.vitalseal.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!("no {} found, using defaults", Self::FILE_NAME);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VitalSealError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!(
            path = %config_path.display(),
            kdf_iterations = settings.kdf_iterations,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Convert the KDF settings into crypto-layer params.
    pub fn kdf_params(&self) -> KdfParams {
        KdfParams {
            salt: self.kdf_salt.as_bytes().to_vec(),
            iterations: self.kdf_iterations,
        }
    }

    /// Build a codec from these settings; fails on weak KDF parameters.
    pub fn build_codec(&self) -> Result<AeadCodec> {
        let deriver = KeyDeriver::new(self.kdf_params())
            .map_err(|e| VitalSealError::ConfigError(e.to_string()))?;
        Ok(AeadCodec::new(deriver, self.default_password.as_str()))
    }

    pub fn record_validator(&self) -> RecordValidator {
        RecordValidator::new(self.bounds.clone())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
