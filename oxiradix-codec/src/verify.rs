//! Round-trip integrity verification.
//!
//! Compares an original bit string with its reconstruction bit by bit and
//! by SHA-256 digest of the packed bytes.

use oxiradix_core::bitstring::{BitString, bits_to_bytes};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// SHA-256 digest size in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Outcome of comparing an original bit string with its reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Exact sequence equality.
    pub bits_equal: bool,
    /// Same number of bits. Diagnostic only.
    pub length_match: bool,
    /// SHA-256 of both packed strings agree.
    pub content_hash_equal: bool,
    /// Length of the original, in bits.
    pub original_bits: usize,
    /// Length of the reconstruction, in bits.
    pub reconstructed_bits: usize,
    /// SHA-256 of the original.
    pub original_digest: [u8; DIGEST_SIZE],
    /// SHA-256 of the reconstruction.
    pub reconstructed_digest: [u8; DIGEST_SIZE],
}

impl VerificationReport {
    /// True only when both the bits and the digests match.
    pub fn is_verified(&self) -> bool {
        self.bits_equal && self.content_hash_equal
    }
}

/// Compare `original` with `reconstructed`.
///
/// # Example
///
/// ```rust
/// use oxiradix_codec::{verify, BitString};
///
/// let original: BitString = "1011".parse().unwrap();
/// assert!(verify(&original, &original.clone()).is_verified());
/// ```
pub fn verify(original: &BitString, reconstructed: &BitString) -> VerificationReport {
    let original_digest = digest(original);
    let reconstructed_digest = digest(reconstructed);

    VerificationReport {
        bits_equal: original == reconstructed,
        length_match: original.len() == reconstructed.len(),
        content_hash_equal: original_digest == reconstructed_digest,
        original_bits: original.len(),
        reconstructed_bits: reconstructed.len(),
        original_digest,
        reconstructed_digest,
    }
}

/// SHA-256 of `bits` packed MSB-first and zero-padded to a byte boundary.
pub fn digest(bits: &BitString) -> [u8; DIGEST_SIZE] {
    Sha256::digest(bits_to_bytes(bits)).into()
}

/// Lowercase hex rendering of [`digest`].
pub fn digest_hex(bits: &BitString) -> String {
    to_hex(&digest(bits))
}

/// Lowercase hex rendering of a byte slice.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let bits: BitString = "110010101".parse().unwrap();
        let report = verify(&bits, &bits.clone());
        assert!(report.bits_equal);
        assert!(report.length_match);
        assert!(report.content_hash_equal);
        assert!(report.is_verified());
    }

    #[test]
    fn test_single_bit_flip() {
        let bits: BitString = "110010101".parse().unwrap();
        let mut corrupted = bits.clone();
        corrupted.flip(4);

        let report = verify(&bits, &corrupted);
        assert!(!report.bits_equal);
        assert!(report.length_match);
        assert!(!report.content_hash_equal);
        assert!(!report.is_verified());
    }

    #[test]
    fn test_trailing_zero_is_caught_by_bits_only() {
        // Packing pads to a byte boundary, so "1" and "10" share a digest
        let a: BitString = "1".parse().unwrap();
        let b: BitString = "10".parse().unwrap();
        let report = verify(&a, &b);
        assert!(report.content_hash_equal);
        assert!(!report.bits_equal);
        assert!(!report.length_match);
        assert!(!report.is_verified());
    }

    #[test]
    fn test_known_digest() {
        // SHA-256 of the empty input
        assert_eq!(
            digest_hex(&BitString::new()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        // SHA-256 of "abc"
        let abc = oxiradix_core::bitstring::bytes_to_bits(b"abc");
        assert_eq!(
            digest_hex(&abc),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
