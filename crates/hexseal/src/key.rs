//! [`SymmetricKey`]: AES-256 key handle, PBKDF2 derivation, and hex import/export.
//!
//! Keys are derived with PBKDF2-HMAC-SHA256 over [`KDF_ITERATIONS`] rounds, so
//! the same seed and salt always produce the same key. Exported keys are 64
//! lowercase hex characters and always re-import.

use std::fmt;

use hexseal_common::{
    protocol::{KDF_ITERATIONS, KEY_LEN},
    KeySeed, SealError,
};
use hmac::Hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec::{bytes, hex};

/// Raw AES-256 key material, exactly [`KEY_LEN`] bytes.
///
/// The bytes are overwritten with zeroes on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_LEN]);

impl SymmetricKey {
    /// Wrap raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::InvalidKey`] if `raw` is not [`KEY_LEN`] bytes.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, SealError> {
        if raw.len() != KEY_LEN {
            return Err(SealError::InvalidKey(format!(
                "expected {KEY_LEN} bytes, got {}",
                raw.len()
            )));
        }
        let mut buf = [0u8; KEY_LEN];
        buf.copy_from_slice(raw);
        let key = Self(buf);
        buf.zeroize();
        Ok(key)
    }

    /// Parse an exported key.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::InvalidKey`] if `input` is not valid hex or does not
    /// decode to exactly [`KEY_LEN`] bytes.
    pub fn from_hex(input: &str) -> Result<Self, SealError> {
        let mut raw = bytes(input).map_err(|e| SealError::InvalidKey(e.to_string()))?;
        let key = Self::from_bytes(&raw);
        raw.zeroize();
        key
    }

    /// Export as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex(&self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// Derive a key from `seed` and `salt` with an explicit PBKDF2 round count.
///
/// Changing `iterations` changes every derived key.
///
/// # Errors
///
/// Returns [`SealError::InvalidKey`] if `iterations` is zero.
pub fn derive_key_with(seed: &str, salt: &str, iterations: u32) -> Result<SymmetricKey, SealError> {
    if iterations == 0 {
        return Err(SealError::InvalidKey(
            "key derivation requires at least one iteration".into(),
        ));
    }
    debug!(iterations, "deriving key");

    let mut out = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(seed.as_bytes(), salt.as_bytes(), iterations, &mut out)
        .map_err(|e| SealError::InvalidKey(format!("key derivation failed: {e}")))?;
    let key = SymmetricKey(out);
    out.zeroize();
    Ok(key)
}

/// Derive a key from `seed` and `salt` and export it as hex.
///
/// ```no_run
/// use hexseal::KeySeed;
/// let key = hexseal::export_key(&KeySeed::new("hello", "world")).unwrap();
/// assert_eq!(key, "664d43091e7905723fc92a4c38f58e9aeff6d822488eb07d6b11bcfc2468f48a");
/// ```
///
/// # Errors
///
/// Propagates [`derive_key_with`] failures; none occur with the default parameters.
pub fn export_key(seed: &KeySeed) -> Result<String, SealError> {
    derive_key_with(&seed.seed, &seed.salt, KDF_ITERATIONS).map(|key| key.to_hex())
}

/// Import an exported key for use with `encrypt` and `decrypt`.
///
/// # Errors
///
/// Returns [`SealError::InvalidKey`] on malformed hex or a length other than
/// [`KEY_LEN`] bytes.
pub fn import_key(input: &str) -> Result<SymmetricKey, SealError> {
    SymmetricKey::from_hex(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SEED_KEY: &str = "e8bf6e323c23036402989c3e89fe8e6219c18edbfde74a461b5f27d806e51f47";

    #[test]
    fn export_known_vectors() {
        assert_eq!(export_key(&KeySeed::new("", "")).unwrap(), EMPTY_SEED_KEY);
        assert_eq!(
            export_key(&KeySeed::new("hello", "world")).unwrap(),
            "664d43091e7905723fc92a4c38f58e9aeff6d822488eb07d6b11bcfc2468f48a"
        );
        assert_eq!(
            export_key(&KeySeed::new("bonjour", "monde")).unwrap(),
            "2af043e1b91ba7ba0036884e40ca9a1f8dcbadfa47a7894955f6c154dd0a635c"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = derive_key_with("a", "b", 1_000).unwrap();
        let b = derive_key_with("a", "b", 1_000).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_hex().len(), KEY_LEN * 2);
    }

    #[test]
    fn seed_salt_and_iterations_separate_keys() {
        let base = derive_key_with("a", "b", 1_000).unwrap();
        assert_ne!(base, derive_key_with("a", "c", 1_000).unwrap());
        assert_ne!(base, derive_key_with("c", "b", 1_000).unwrap());
        assert_ne!(base, derive_key_with("a", "b", 1_001).unwrap());
    }

    #[test]
    fn rejects_zero_iterations() {
        assert!(matches!(
            derive_key_with("a", "b", 0),
            Err(SealError::InvalidKey(_))
        ));
    }

    #[test]
    fn import_export_round_trip() {
        let key = import_key(EMPTY_SEED_KEY).unwrap();
        assert_eq!(key.to_hex(), EMPTY_SEED_KEY);
    }

    #[test]
    fn import_rejects_wrong_length() {
        let err = import_key(&"ab".repeat(16)).unwrap_err();
        assert_eq!(err.code(), "invalid_key");
        assert!(import_key(&"ab".repeat(33)).is_err());
        assert!(import_key("").is_err());
    }

    #[test]
    fn import_rejects_malformed_hex() {
        let err = import_key(&"zz".repeat(32)).unwrap_err();
        assert!(matches!(err, SealError::InvalidKey(_)));
        assert!(import_key(&EMPTY_SEED_KEY[1..]).is_err());
    }

    #[test]
    fn key_redacted_in_debug() {
        let key = SymmetricKey::from_bytes(&[0xAB; KEY_LEN]).unwrap();
        let dbg = format!("{key:?}");
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains("abab"));
    }
}
