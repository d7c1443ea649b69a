//! Configuration loading and validation.
//!
//! Values are read from `HEXSEAL_*` environment variables; every field has a
//! default, so an empty environment yields [`Config::default`].

use anyhow::{Context, Result};
use hexseal_common::{
    protocol::{DEFAULT_LENGTH, KDF_ITERATIONS, PADDED_OVERHEAD},
    Algorithm, KeySeed, SealError,
};
use serde::Deserialize;

use crate::crypto::{EncryptOptions, KeyInput};
use crate::key::{derive_key_with, SymmetricKey};

/// Validated library defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Padded output length in hex characters; `0` disables padding.
    #[serde(default = "default_length")]
    pub length: usize,

    /// PBKDF2 rounds for key derivation. Changing this changes every derived key.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Digest algorithm used by [`Config::hash`].
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}
fn default_kdf_iterations() -> u32 {
    KDF_ITERATIONS
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: default_length(),
            kdf_iterations: default_kdf_iterations(),
            algorithm: Algorithm::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load and validate configuration from `HEXSEAL_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        Self::load(config::Environment::with_prefix("HEXSEAL").try_parsing(true))
    }

    fn load<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let cfg = config::Config::builder()
            .add_source(source)
            .build()
            .context("failed to build hexseal configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise hexseal configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.length != 0 && (self.length % 2 != 0 || self.length / 2 < PADDED_OVERHEAD) {
            anyhow::bail!(
                "HEXSEAL_LENGTH must be 0 or an even number of at least {}",
                2 * PADDED_OVERHEAD
            );
        }
        if self.kdf_iterations == 0 {
            anyhow::bail!("HEXSEAL_KDF_ITERATIONS must be > 0");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("HEXSEAL_LOG_LEVEL must not be empty");
        }
        Ok(())
    }

    /// Encryption options using the configured padded length.
    pub fn encrypt_options(&self, key: impl Into<KeyInput>) -> EncryptOptions {
        EncryptOptions::new(key).with_length(self.length)
    }

    /// Hex digest of `text` with the configured algorithm.
    pub fn hash(&self, text: &str) -> String {
        crate::digest::hash(text, self.algorithm)
    }

    /// Derive a key with the configured iteration count.
    ///
    /// # Errors
    ///
    /// See [`derive_key_with`].
    pub fn derive_key(&self, seed: &KeySeed) -> Result<SymmetricKey, SealError> {
        derive_key_with(&seed.seed, &seed.salt, self.kdf_iterations)
    }
}
