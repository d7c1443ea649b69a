//! Common types, wire-format definitions, and errors shared across `hexseal` crates.

pub mod error;
pub mod protocol;

pub use error::SealError;
pub use protocol::{Algorithm, KeySeed};
