//! Secure random source used for nonces and padding filler.

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use hexseal_common::SealError;

/// Source of cryptographically secure random bytes.
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::EntropyUnavailable`] if the source cannot deliver.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SealError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SealError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| SealError::EntropyUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_entropy_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn os_entropy_accepts_empty_buffer() {
        OsEntropy.fill(&mut []).unwrap();
    }
}
