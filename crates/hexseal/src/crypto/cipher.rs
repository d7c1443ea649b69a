//! AES-256-GCM encryption of padded envelopes.
//!
//! **Nonce width:** 128 bits rather than the usual 96. GCM accepts it by
//! hashing the nonce into the initial counter block; the width is part of the
//! wire format and must not change.
//!
//! **Padding:** with a non-zero `length`, the envelope is topped up with random
//! filler until the hex output is exactly `length` characters, so ciphertext
//! size reveals nothing about the message size below that bound.

use aes_gcm::{
    aead::{consts::U16, Aead, KeyInit},
    aes::Aes256,
    AesGcm, Nonce,
};
use hexseal_common::{
    protocol::{AEAD_MAX_PLAINTEXT, DEFAULT_LENGTH, NONCE_LEN, TAG_LEN},
    Algorithm, SealError,
};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::envelope::{pack, unpack, verify};
use crate::codec::{bytes, hex};
use crate::digest::hash_bytes;
use crate::entropy::{EntropySource, OsEntropy};
use crate::key::{import_key, SymmetricKey};

/// AES-256-GCM with a 16-byte nonce.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Key material accepted by [`encrypt`] and [`decrypt`]: an exported hex key
/// or an already imported handle.
#[derive(Debug, Clone)]
pub enum KeyInput {
    Hex(String),
    Key(SymmetricKey),
}

impl KeyInput {
    fn resolve(&self) -> Result<SymmetricKey, SealError> {
        match self {
            KeyInput::Hex(s) => import_key(s),
            KeyInput::Key(k) => Ok(k.clone()),
        }
    }
}

impl From<&str> for KeyInput {
    fn from(value: &str) -> Self {
        KeyInput::Hex(value.to_owned())
    }
}

impl From<String> for KeyInput {
    fn from(value: String) -> Self {
        KeyInput::Hex(value)
    }
}

impl From<SymmetricKey> for KeyInput {
    fn from(value: SymmetricKey) -> Self {
        KeyInput::Key(value)
    }
}

/// Options for [`encrypt`].
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    pub key: KeyInput,
    /// Exact output length in hex characters; `0` disables padding.
    pub length: usize,
}

impl EncryptOptions {
    /// Options with the default padded length of [`DEFAULT_LENGTH`].
    pub fn new(key: impl Into<KeyInput>) -> Self {
        Self {
            key: key.into(),
            length: DEFAULT_LENGTH,
        }
    }

    /// Override the output length; `0` disables padding.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

/// Options for [`decrypt`].
#[derive(Debug, Clone)]
pub struct DecryptOptions {
    pub key: KeyInput,
}

impl DecryptOptions {
    pub fn new(key: impl Into<KeyInput>) -> Self {
        Self { key: key.into() }
    }
}

/// Encrypt `message` with fresh randomness from the OS CSPRNG.
///
/// Returns `hex(nonce || ciphertext || tag)`.
///
/// # Errors
///
/// - [`SealError::MessageTooLong`] if the envelope does not fit `options.length`.
/// - [`SealError::InvalidKey`] if the key cannot be imported.
/// - [`SealError::EntropyUnavailable`] if the OS CSPRNG fails.
pub fn encrypt(message: &str, options: &EncryptOptions) -> Result<String, SealError> {
    encrypt_with(message, options, &mut OsEntropy)
}

/// [`encrypt`] with an explicit random source for the nonce and filler.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn encrypt_with<E>(
    message: &str,
    options: &EncryptOptions,
    entropy: &mut E,
) -> Result<String, SealError>
where
    E: EntropySource + ?Sized,
{
    let mut envelope = Zeroizing::new(pack(message)?);

    if options.length > 0 {
        let budget = padded_budget(options.length)
            .filter(|budget| envelope.len() <= *budget)
            .ok_or(SealError::MessageTooLong {
                length: Some(options.length),
            })?;
        let filled = envelope.len();
        envelope.resize(budget, 0);
        entropy.fill(&mut envelope[filled..])?;
    }

    let key = options.key.resolve()?;
    debug!(
        length = options.length,
        envelope_len = envelope.len(),
        "encrypting envelope"
    );
    seal_envelope(&envelope, &key, entropy)
}

/// Encrypt an already built envelope as-is, without padding.
///
/// [`encrypt`] is the normal entry point; this exposes the cipher layer alone.
///
/// # Errors
///
/// Returns [`SealError::EntropyUnavailable`] if no nonce can be drawn and
/// [`SealError::MessageTooLong`] if the input exceeds the GCM size limit.
pub fn seal_envelope<E>(
    envelope: &[u8],
    key: &SymmetricKey,
    entropy: &mut E,
) -> Result<String, SealError>
where
    E: EntropySource + ?Sized,
{
    let cipher = build_cipher(key)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    entropy.fill(&mut nonce_bytes)?;
    let nonce = Nonce::<U16>::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, envelope)
        .map_err(|_| SealError::MessageTooLong { length: None })?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(hex(blob))
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// - [`SealError::MalformedInput`] on bad hex, a blob shorter than nonce + tag,
///   a truncated envelope, or a non-UTF-8 message.
/// - [`SealError::InvalidKey`] if the key cannot be imported.
/// - [`SealError::DecryptionFailed`] if the authentication tag does not verify.
/// - [`SealError::Integrity`] if the embedded digest disagrees with the message.
pub fn decrypt(blob: &str, options: &DecryptOptions) -> Result<String, SealError> {
    let raw = bytes(blob)?;
    if raw.len() < NONCE_LEN + TAG_LEN {
        return Err(SealError::MalformedInput(format!(
            "encrypted blob too short: {} bytes, need at least {}",
            raw.len(),
            NONCE_LEN + TAG_LEN
        )));
    }

    let key = options.key.resolve()?;
    let cipher = build_cipher(&key)?;
    let (nonce, ciphertext) = raw.split_at(NONCE_LEN);
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::<U16>::from_slice(nonce), ciphertext)
            .map_err(|_| SealError::DecryptionFailed)?,
    );

    let unpacked = unpack(&plaintext)?;
    let message = unpacked.message()?;
    if !verify(message, &unpacked.claimed_digest) {
        warn!("envelope digest mismatch after successful authentication");
        return Err(SealError::Integrity {
            expected: hex(unpacked.claimed_digest),
            actual: hex(hash_bytes(message, Algorithm::Sha256)),
        });
    }
    debug!(
        envelope_len = plaintext.len(),
        message_len = message.len(),
        "decrypted envelope"
    );

    String::from_utf8(message.to_vec())
        .map_err(|e| SealError::MalformedInput(format!("message is not valid UTF-8: {e}")))
}

/// Envelope bytes available when the output must be exactly `length` hex
/// characters, or `None` if no envelope can fit or the cipher could not take it.
fn padded_budget(length: usize) -> Option<usize> {
    if length % 2 != 0 {
        return None;
    }
    (length / 2)
        .checked_sub(NONCE_LEN + TAG_LEN)
        .filter(|budget| *budget as u64 <= AEAD_MAX_PLAINTEXT)
}

fn build_cipher(key: &SymmetricKey) -> Result<Aes256Gcm16, SealError> {
    Aes256Gcm16::new_from_slice(key.as_bytes()).map_err(|e| SealError::InvalidKey(e.to_string()))
}
