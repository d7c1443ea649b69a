//! Hashing of UTF-8 text with a selectable SHA family member.

use hexseal_common::Algorithm;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::codec::hex;

/// Hash the UTF-8 bytes of `text` and return the digest as lowercase hex.
///
/// ```
/// use hexseal::Algorithm;
/// assert_eq!(
///     hexseal::hash("foo", Algorithm::Sha256),
///     "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae",
/// );
/// ```
pub fn hash(text: &str, algorithm: Algorithm) -> String {
    hex(hash_bytes(text.as_bytes(), algorithm))
}

/// Raw digest of `input`; its length is [`Algorithm::output_len`].
pub fn hash_bytes(input: &[u8], algorithm: Algorithm) -> Vec<u8> {
    match algorithm {
        Algorithm::Sha1 => Sha1::digest(input).to_vec(),
        Algorithm::Sha256 => Sha256::digest(input).to_vec(),
        Algorithm::Sha384 => Sha384::digest(input).to_vec(),
        Algorithm::Sha512 => Sha512::digest(input).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            hash("foo", Algorithm::Sha1),
            "0beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33"
        );
        assert_eq!(
            hash("foo", Algorithm::Sha256),
            "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        );
        assert_eq!(
            hash("foo", Algorithm::Sha384),
            "98c11ffdfdd540676b1a137cb1a22b2a70350c9a44171d6b1180c6be5cbb2ee3f79d532c8a1dd9ef2e8e08e752a3babb"
        );
        assert_eq!(
            hash("foo", Algorithm::Sha512),
            "f7fbba6e0636f890e56fbbf3283e524c6fa3204ae298382d624741d0dc6638326e282c41be5e4254d8820772c5518a2c5a8c0c7f7eda19594a7eb539453e1ed7"
        );
    }

    #[test]
    fn output_width_matches_algorithm() {
        for alg in [
            Algorithm::Sha1,
            Algorithm::Sha256,
            Algorithm::Sha384,
            Algorithm::Sha512,
        ] {
            assert_eq!(hash_bytes(b"bento", alg).len(), alg.output_len());
            assert_eq!(hash("bento", alg).len(), alg.output_len() * 2);
        }
    }

    #[test]
    fn hashes_multibyte_text_as_utf8() {
        assert_eq!(
            hash("🍱", Algorithm::Sha256),
            hex(Sha256::digest("🍱".as_bytes()))
        );
    }
}
