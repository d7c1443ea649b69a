//! Error taxonomy shared by every `hexseal` operation.

use thiserror::Error;

/// Top-level error type for hex, digest, key, and envelope operations.
///
/// Variants map to stable machine-readable codes via [`SealError::code`]:
/// - [`SealError::MalformedInput`] → `malformed_input`
/// - [`SealError::InvalidKey`] → `invalid_key`
/// - [`SealError::MessageTooLong`] → `message_too_long`
/// - [`SealError::DecryptionFailed`] → `decryption_failed`
/// - [`SealError::Integrity`] → `integrity`
/// - [`SealError::EntropyUnavailable`] → `entropy_unavailable`
/// - [`SealError::TaskFailed`] → `task_failed`
///
/// None of these are transient; callers should not retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SealError {
    /// Hex input has odd length or invalid characters, or a decoded buffer is
    /// too short to hold the expected structure.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Key material is not exactly 32 bytes, or derivation parameters are invalid.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The message does not fit the requested fixed output length, or exceeds
    /// what the envelope and cipher can carry at all.
    #[error(
        "Message too long{}",
        .length.map(|l| format!(" for length: {l}")).unwrap_or_default()
    )]
    MessageTooLong {
        /// The requested output length in hex characters, when padding applied.
        length: Option<usize>,
    },

    /// The AEAD tag did not verify (tampered blob or wrong key).
    #[error("decryption failed: authentication tag mismatch")]
    DecryptionFailed,

    /// The envelope's embedded digest disagrees with the recovered message.
    #[error("Hash mismatch: expected {expected} but got {actual}")]
    Integrity {
        /// Digest stored in the envelope, as hex.
        expected: String,
        /// Digest recomputed from the recovered message, as hex.
        actual: String,
    },

    /// The secure random source could not produce bytes.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// A blocking task backing a non-blocking call panicked or was cancelled.
    #[error("background task failed: {0}")]
    TaskFailed(String),
}

impl SealError {
    /// Returns the stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            SealError::MalformedInput(_) => "malformed_input",
            SealError::InvalidKey(_) => "invalid_key",
            SealError::MessageTooLong { .. } => "message_too_long",
            SealError::DecryptionFailed => "decryption_failed",
            SealError::Integrity { .. } => "integrity",
            SealError::EntropyUnavailable(_) => "entropy_unavailable",
            SealError::TaskFailed(_) => "task_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(SealError::MalformedInput("x".into()).code(), "malformed_input");
        assert_eq!(SealError::InvalidKey("x".into()).code(), "invalid_key");
        assert_eq!(SealError::MessageTooLong { length: Some(256) }.code(), "message_too_long");
        assert_eq!(SealError::DecryptionFailed.code(), "decryption_failed");
        assert_eq!(
            SealError::Integrity {
                expected: "00".into(),
                actual: "ff".into()
            }
            .code(),
            "integrity"
        );
        assert_eq!(SealError::EntropyUnavailable("x".into()).code(), "entropy_unavailable");
        assert_eq!(SealError::TaskFailed("x".into()).code(), "task_failed");
    }

    #[test]
    fn too_long_message_text() {
        let e = SealError::MessageTooLong { length: Some(256) };
        assert_eq!(e.to_string(), "Message too long for length: 256");
    }

    #[test]
    fn too_long_without_padding_omits_length() {
        let e = SealError::MessageTooLong { length: None };
        assert_eq!(e.to_string(), "Message too long");
    }

    #[test]
    fn integrity_message_text() {
        let e = SealError::Integrity {
            expected: "abcd".into(),
            actual: "1234".into(),
        };
        let text = e.to_string();
        assert!(text.starts_with("Hash mismatch"));
        assert!(text.contains("abcd"));
        assert!(text.contains("1234"));
    }
}
