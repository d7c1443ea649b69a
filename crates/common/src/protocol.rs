//! Wire-format constants and the plain option types exchanged with callers.
//!
//! # Blob layout
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────────────────────────────┐
//! │ Nonce [16] │ AES-256-GCM( Digest [32] │ Size [4] │ Value [N] │ Filler [P] ) │ + Tag [16]
//! └────────────┴──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole blob crosses the API boundary as one lowercase hex string.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SealError;

/// Byte length of an AES-256 key.
pub const KEY_LEN: usize = 32;

/// Byte length of the GCM nonce. Wider than the usual 96 bits; GHASH folds it
/// into the initial counter block.
pub const NONCE_LEN: usize = 16;

/// Byte length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Byte length of the envelope's SHA-256 integrity digest.
pub const DIGEST_LEN: usize = 32;

/// Byte length of the big-endian `u32` message size prefix.
pub const SIZE_PREFIX_LEN: usize = 4;

/// Fixed envelope header: digest followed by the size prefix.
pub const ENVELOPE_HEADER_LEN: usize = DIGEST_LEN + SIZE_PREFIX_LEN;

/// Bytes a padded blob spends on everything but the message itself.
pub const PADDED_OVERHEAD: usize = NONCE_LEN + TAG_LEN + ENVELOPE_HEADER_LEN;

/// Largest plaintext AES-GCM accepts in one message: 2^36 - 32 bytes.
pub const AEAD_MAX_PLAINTEXT: u64 = (1 << 36) - 32;

/// Default fixed output length, in hex characters.
pub const DEFAULT_LENGTH: usize = 256;

/// PBKDF2-HMAC-SHA256 rounds used by key derivation.
pub const KDF_ITERATIONS: u32 = 1_000_000;

/// Digest algorithms accepted by `hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "SHA-1")]
    Sha1,
    #[default]
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl Algorithm {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest width in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA-1" => Ok(Algorithm::Sha1),
            "SHA-256" => Ok(Algorithm::Sha256),
            "SHA-384" => Ok(Algorithm::Sha384),
            "SHA-512" => Ok(Algorithm::Sha512),
            other => Err(SealError::MalformedInput(format!(
                "unsupported digest algorithm: {other}"
            ))),
        }
    }
}

/// Secret seed and separating salt for key derivation.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySeed {
    pub seed: String,
    pub salt: String,
}

impl KeySeed {
    /// Construct a [`KeySeed`] from a seed and salt.
    pub fn new(seed: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            salt: salt.into(),
        }
    }
}

impl fmt::Debug for KeySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The seed is secret; the salt is not.
        f.debug_struct("KeySeed")
            .field("seed", &"[REDACTED]")
            .field("salt", &self.salt)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aead_limit_is_sixty_four_gibibytes_less_two_blocks() {
        assert_eq!(AEAD_MAX_PLAINTEXT, 68_719_476_704);
    }

    #[test]
    fn padded_overhead_matches_layout() {
        assert_eq!(PADDED_OVERHEAD, 68);
        assert_eq!(ENVELOPE_HEADER_LEN, 36);
        // 256 hex chars leave room for a 60-byte message.
        assert_eq!(DEFAULT_LENGTH / 2 - PADDED_OVERHEAD, 60);
    }

    #[test]
    fn algorithm_names_round_trip() {
        for alg in [
            Algorithm::Sha1,
            Algorithm::Sha256,
            Algorithm::Sha384,
            Algorithm::Sha512,
        ] {
            assert_eq!(alg.name().parse::<Algorithm>().unwrap(), alg);
            assert_eq!(alg.to_string(), alg.name());
        }
    }

    #[test]
    fn algorithm_rejects_unknown_name() {
        assert!("MD5".parse::<Algorithm>().is_err());
        assert!("sha-256".parse::<Algorithm>().is_err());
    }

    #[test]
    fn algorithm_default_is_sha256() {
        assert_eq!(Algorithm::default(), Algorithm::Sha256);
    }

    #[test]
    fn algorithm_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Algorithm::Sha384).unwrap();
        assert_eq!(json, "\"SHA-384\"");
        let decoded: Algorithm = serde_json::from_str("\"SHA-1\"").unwrap();
        assert_eq!(decoded, Algorithm::Sha1);
    }

    #[test]
    fn key_seed_redacts_seed_in_debug() {
        let seed = KeySeed::new("hunter2", "context");
        let dbg = format!("{seed:?}");
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("context"));
    }
}
