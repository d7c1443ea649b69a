//! Lowercase hexadecimal encoding for every binary value crossing the API.

use hexseal_common::SealError;

/// Render bytes as lowercase hex, two digits per byte, no separators.
///
/// ```
/// assert_eq!(hexseal::hex([0x0a, 0x42]), "0a42");
/// ```
pub fn hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(input)
}

/// Render a single byte as two lowercase hex digits.
///
/// ```
/// assert_eq!(hexseal::hex_byte(0x0a), "0a");
/// ```
pub fn hex_byte(byte: u8) -> String {
    hex::encode([byte])
}

/// Parse a hex string back into bytes, left to right.
///
/// Uppercase digits are accepted.
///
/// # Errors
///
/// Returns [`SealError::MalformedInput`] on odd length or any non-hex character.
pub fn bytes(input: &str) -> Result<Vec<u8>, SealError> {
    hex::decode(input).map_err(|e| SealError::MalformedInput(format!("invalid hex: {e}")))
}
