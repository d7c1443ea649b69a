//! Padded AES-256-GCM envelopes.
//!
//! # Ciphertext format
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────┬──────────┐
//! │ Nonce [16] │ Envelope (+ filler), AES-256-GCM     │ Tag [16] │
//! └────────────┴──────────────────────────────────────┴──────────┘
//! ```
//!
//! The whole blob is hex encoded. See [`envelope`] for the plaintext layout.

pub mod cipher;
pub mod envelope;

pub use cipher::{
    decrypt, encrypt, encrypt_with, seal_envelope, DecryptOptions, EncryptOptions, KeyInput,
};
