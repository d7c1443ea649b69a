//! Tracing subscriber initialisation for applications embedding `hexseal`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install a global JSON-formatted subscriber at `log_level`.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise hexseal tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        // The first call may race other tests for the global slot; the second never wins.
        let _ = init("debug");
        assert!(init("debug").is_err());
    }
}
