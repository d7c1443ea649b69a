//! Async entry points for callers running on a Tokio executor.
//!
//! Each call moves the synchronous operation onto Tokio's blocking pool.
//! Key derivation runs a million PBKDF2 rounds and would otherwise stall the
//! executor thread. There is no timeout or cancellation of its own: dropping
//! the future detaches the blocking task, which still runs to completion.

use hexseal_common::{Algorithm, KeySeed, SealError};
use tokio::task;

use crate::crypto::{DecryptOptions, EncryptOptions};
use crate::key::SymmetricKey;

async fn run_blocking<T, F>(op: &'static str, f: F) -> Result<T, SealError>
where
    F: FnOnce() -> Result<T, SealError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| SealError::TaskFailed(format!("{op}: {e}")))?
}

/// Async [`crate::hash`].
pub async fn hash(text: impl Into<String>, algorithm: Algorithm) -> Result<String, SealError> {
    let text = text.into();
    run_blocking("hash", move || Ok(crate::digest::hash(&text, algorithm))).await
}

/// Async [`crate::export_key`].
pub async fn export_key(seed: KeySeed) -> Result<String, SealError> {
    run_blocking("export_key", move || crate::key::export_key(&seed)).await
}

/// Async [`crate::import_key`].
pub async fn import_key(input: impl Into<String>) -> Result<SymmetricKey, SealError> {
    let input = input.into();
    run_blocking("import_key", move || crate::key::import_key(&input)).await
}

/// Async [`crate::encrypt`].
pub async fn encrypt(
    message: impl Into<String>,
    options: EncryptOptions,
) -> Result<String, SealError> {
    let message = message.into();
    run_blocking("encrypt", move || crate::crypto::encrypt(&message, &options)).await
}

/// Async [`crate::decrypt`].
pub async fn decrypt(blob: impl Into<String>, options: DecryptOptions) -> Result<String, SealError> {
    let blob = blob.into();
    run_blocking("decrypt", move || crate::crypto::decrypt(&blob, &options)).await
}
