//! The integrity-checked plaintext that gets encrypted.
//!
//! ```text
//! ┌─────────────────────┬──────────────────┬─────────────┬──────────────╴╴╴┐
//! │ SHA-256(value) [32] │ Size u32 BE [4]  │ Value [N]   │ Filler [P]      ┊
//! └─────────────────────┴──────────────────┴─────────────┴──────────────╴╴╴┘
//! ```
//!
//! Filler is appended by the cipher layer and ignored on the way back: only the
//! first `Size` bytes after the header belong to the value.

use hexseal_common::{
    protocol::{DIGEST_LEN, ENVELOPE_HEADER_LEN, SIZE_PREFIX_LEN},
    Algorithm, SealError,
};
use subtle::ConstantTimeEq;

use crate::digest::hash_bytes;

/// A parsed envelope, borrowing from the decrypted buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unpacked<'a> {
    /// SHA-256 digest recorded when the envelope was packed.
    pub claimed_digest: [u8; DIGEST_LEN],
    /// Byte length of the value recorded when the envelope was packed.
    pub claimed_length: u32,
    /// Everything after the header: the value followed by any filler.
    pub body: &'a [u8],
}

impl<'a> Unpacked<'a> {
    /// The first `claimed_length` bytes of the body.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::MalformedInput`] if the claimed length runs past
    /// the end of the buffer.
    pub fn message(&self) -> Result<&'a [u8], SealError> {
        let len = self.claimed_length as usize;
        self.body.get(..len).ok_or_else(|| {
            SealError::MalformedInput(format!(
                "envelope claims {len} bytes but only {} remain",
                self.body.len()
            ))
        })
    }
}

/// Build `digest || size || value` for `message`.
///
/// # Errors
///
/// Returns [`SealError::MessageTooLong`] if the message does not fit the
/// 32-bit size prefix.
pub fn pack(message: &str) -> Result<Vec<u8>, SealError> {
    let value = message.as_bytes();
    let size = u32::try_from(value.len()).map_err(|_| SealError::MessageTooLong { length: None })?;

    let mut envelope = Vec::with_capacity(ENVELOPE_HEADER_LEN + value.len());
    envelope.extend_from_slice(&hash_bytes(value, Algorithm::Sha256));
    envelope.extend_from_slice(&size.to_be_bytes());
    envelope.extend_from_slice(value);
    Ok(envelope)
}

/// Split an envelope at the fixed header widths.
///
/// # Errors
///
/// Returns [`SealError::MalformedInput`] if `envelope` is shorter than the header.
pub fn unpack(envelope: &[u8]) -> Result<Unpacked<'_>, SealError> {
    if envelope.len() < ENVELOPE_HEADER_LEN {
        return Err(SealError::MalformedInput(format!(
            "envelope too short: {} bytes, need at least {ENVELOPE_HEADER_LEN}",
            envelope.len()
        )));
    }
    let (digest, rest) = envelope.split_at(DIGEST_LEN);
    let (size, body) = rest.split_at(SIZE_PREFIX_LEN);

    let mut claimed_digest = [0u8; DIGEST_LEN];
    claimed_digest.copy_from_slice(digest);
    let mut size_bytes = [0u8; SIZE_PREFIX_LEN];
    size_bytes.copy_from_slice(size);

    Ok(Unpacked {
        claimed_digest,
        claimed_length: u32::from_be_bytes(size_bytes),
        body,
    })
}

/// Constant-time check that `claimed_digest` is the SHA-256 of `message`.
pub fn verify(message: &[u8], claimed_digest: &[u8]) -> bool {
    let actual = hash_bytes(message, Algorithm::Sha256);
    actual.ct_eq(claimed_digest).into()
}
