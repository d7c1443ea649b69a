//! Structured logging setup.
//!
//! The library itself only emits `tracing` events. Sizes and lengths may
//! appear in event fields; key material, seeds, and plaintext never do.

pub mod init;

pub use init::init;
