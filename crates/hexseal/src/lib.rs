//! Symmetric encryption for secrets at rest.
//!
//! AES-256-GCM over a PBKDF2-derived key, with an integrity-checked envelope
//! and optional fixed-length padding so the ciphertext size does not reveal
//! the message size. Every binary value crosses the API as lowercase hex.
//!
//! ```no_run
//! use hexseal::{decrypt, encrypt, export_key, DecryptOptions, EncryptOptions, KeySeed};
//!
//! // Same seed and salt always yield the same key.
//! let key = export_key(&KeySeed::new("hello", "world"))?;
//! assert_eq!(key, "664d43091e7905723fc92a4c38f58e9aeff6d822488eb07d6b11bcfc2468f48a");
//!
//! let secret = encrypt("🍱 bento", &EncryptOptions::new(key.as_str()).with_length(512))?;
//! assert_eq!(secret.len(), 512);
//! assert_ne!(secret, encrypt("🍱 bento", &EncryptOptions::new(key.as_str()).with_length(512))?);
//!
//! assert_eq!(decrypt(&secret, &DecryptOptions::new(key.as_str()))?, "🍱 bento");
//! # Ok::<(), hexseal::SealError>(())
//! ```
//!
//! All functions are stateless. The [`nonblocking`] module wraps each of them
//! for use from async code.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod digest;
pub mod entropy;
pub mod key;
pub mod nonblocking;
pub mod telemetry;

pub use codec::{bytes, hex, hex_byte};
pub use config::Config;
pub use crypto::{
    decrypt, encrypt, encrypt_with, seal_envelope, DecryptOptions, EncryptOptions, KeyInput,
};
pub use digest::{hash, hash_bytes};
pub use entropy::{EntropySource, OsEntropy};
pub use hexseal_common::{protocol, Algorithm, KeySeed, SealError};
pub use key::{derive_key_with, export_key, import_key, SymmetricKey};
