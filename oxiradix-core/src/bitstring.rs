//! Owned bit sequences and the byte boundary conversions.
//!
//! A [`BitString`] is an ordered sequence of bits with an explicit length, so
//! leading zeros are significant. Conversions to and from bytes are MSB-first:
//! bit 0 of the string is the most significant bit of byte 0.
//!
//! # Example
//!
//! ```
//! use oxiradix_core::bitstring::{BitString, bits_to_bytes, bytes_to_bits};
//!
//! let bits = bytes_to_bits(&[0xA5]);
//! assert_eq!(bits.to_string(), "10100101");
//!
//! let short: BitString = "101".parse().unwrap();
//! assert_eq!(bits_to_bytes(&short), vec![0b1010_0000]);
//! ```

use crate::error::{OxiRadixError, Result};
use std::fmt;
use std::str::FromStr;

/// An ordered, owned sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Create an empty bit string.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty bit string with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// A bit string of `len` copies of `bit`.
    pub fn repeat(bit: bool, len: usize) -> Self {
        Self {
            bits: vec![bit; len],
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the bits as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Get the bit at `index`.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append a slice of bits.
    pub fn extend_from_slice(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    /// Shorten to `len` bits. No-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Invert the bit at `index`, returning its new value.
    pub fn flip(&mut self, index: usize) -> Option<bool> {
        let bit = self.bits.get_mut(index)?;
        *bit = !*bit;
        Some(*bit)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Pack into bytes, zero-padding on the right. See [`bits_to_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        bits_to_bytes(self)
    }

    /// Consume and return the underlying bits.
    pub fn into_inner(self) -> Vec<bool> {
        self.bits
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for BitString {
    fn from(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[bool]> for BitString {
    fn as_ref(&self) -> &[bool] {
        &self.bits
    }
}

impl FromStr for BitString {
    type Err = OxiRadixError;

    /// Parse a string of `'0'` and `'1'` characters.
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(OxiRadixError::invalid_input(
                    i as u64,
                    format!("expected '0' or '1', found {other:?}"),
                )),
            })
            .collect()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
        f.write_str(&text)
    }
}

/// Expand bytes into bits, 8 per byte, most significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> BitString {
    let mut bits = BitString::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }
    bits
}

/// Pack bits into bytes, most significant bit first.
///
/// The final byte is zero-padded on the right when the length is not a
/// multiple of 8. An empty string packs to an empty vector.
pub fn bits_to_bytes(bits: &BitString) -> Vec<u8> {
    bits.as_slice()
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let bits: BitString = "0010110".parse().unwrap();
        assert_eq!(bits.len(), 7);
        assert_eq!(bits.get(0), Some(false));
        assert_eq!(bits.get(2), Some(true));
        assert_eq!(bits.to_string(), "0010110");
    }

    #[test]
    fn test_parse_rejects_non_bits() {
        let err = "0102".parse::<BitString>().unwrap_err();
        match err {
            OxiRadixError::InvalidInput { position, .. } => assert_eq!(position, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty() {
        let bits: BitString = "".parse().unwrap();
        assert!(bits.is_empty());
        assert!(bits_to_bytes(&bits).is_empty());
        assert!(bytes_to_bits(&[]).is_empty());
    }

    #[test]
    fn test_bytes_to_bits_msb_first() {
        let bits = bytes_to_bits(&[0x80, 0x01]);
        assert_eq!(bits.to_string(), "1000000000000001");
    }

    #[test]
    fn test_bits_to_bytes_pads_right() {
        let bits: BitString = "1".parse().unwrap();
        assert_eq!(bits_to_bytes(&bits), vec![0x80]);

        let bits: BitString = "111111111".parse().unwrap();
        assert_eq!(bits_to_bytes(&bits), vec![0xFF, 0x80]);
    }

    #[test]
    fn test_byte_roundtrip() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(bits_to_bytes(&bytes_to_bits(&data)), data);
    }

    #[test]
    fn test_flip() {
        let mut bits = BitString::repeat(false, 4);
        assert_eq!(bits.flip(3), Some(true));
        assert_eq!(bits.to_string(), "0001");
        assert_eq!(bits.flip(4), None);
    }
}
