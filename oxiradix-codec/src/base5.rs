//! Base-5 positional codec.
//!
//! A block is read as an unsigned integer and written out in radix
//! `power` (5, 25, 125 or 625) by successive division, least significant
//! digit first.

use crate::value::{block_to_value, low_u64, value_to_block};
use num_bigint::BigUint;
use num_traits::Zero;
use oxiradix_core::config::{Base, Configuration};
use oxiradix_core::error::{OxiRadixError, Result};
use oxiradix_core::traits::{BlockCodec, Digit, EncodedBlock};

/// Divide-and-remainder codec for base-5 configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base5Codec {
    block_bits: usize,
    /// Digit radix, a power of five.
    power: u64,
}

impl Base5Codec {
    /// Build a codec with radix `power`.
    pub fn new(power: u64, block_bits: usize) -> Self {
        Self { block_bits, power }
    }

    /// Build a codec for a base-5 configuration.
    ///
    /// Returns `None` for a base-2 configuration.
    pub fn from_config(config: &Configuration) -> Option<Self> {
        if config.base() != Base::Five {
            return None;
        }
        let power = u64::try_from(config.power()).ok()?;
        Some(Self::new(power, config.block_bits()))
    }

    /// Digit radix.
    pub fn power(&self) -> u64 {
        self.power
    }
}

impl BlockCodec for Base5Codec {
    fn block_bits(&self) -> usize {
        self.block_bits
    }

    fn encode_block(&self, block: &[bool]) -> EncodedBlock {
        debug_assert_eq!(block.len(), self.block_bits);

        let mut value = block_to_value(block);
        if value.is_zero() {
            return vec![0];
        }

        let mut digits = Vec::new();
        while !value.is_zero() {
            let quotient = &value / self.power;
            let remainder = value - &quotient * self.power;
            digits.push(low_u64(&remainder));
            value = quotient;
        }
        digits
    }

    fn decode_block(&self, digits: &[Digit]) -> Result<Vec<bool>> {
        if digits.is_empty() {
            return Err(OxiRadixError::invalid_input(0, "empty digit sequence"));
        }

        // Horner's rule from the most significant digit down
        let mut value = BigUint::zero();
        for (i, &digit) in digits.iter().enumerate().rev() {
            if digit >= self.power {
                return Err(OxiRadixError::invalid_input(
                    i as u64,
                    format!("digit {digit} out of range for radix {}", self.power),
                ));
            }
            value = value * self.power + digit;
        }

        value_to_block(&value, self.block_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiradix_core::config::configure;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    fn codec(power: u128, block_bits: usize) -> Base5Codec {
        Base5Codec::from_config(&configure(5, power, block_bits).unwrap()).unwrap()
    }

    #[test]
    fn test_from_config() {
        assert!(Base5Codec::from_config(&configure(2, 16, 40).unwrap()).is_none());
        assert_eq!(codec(625, 40).power(), 625);
    }

    #[test]
    fn test_digits_of_known_value() {
        // 0b0001111101 = 125 = 1*5^3 -> [0, 0, 0, 1]
        let codec = codec(5, 10);
        let block = bits("0001111101");
        assert_eq!(codec.encode_block(&block), vec![0, 0, 0, 1]);

        // 125 in radix 25 -> [0, 5]
        let codec25 = Base5Codec::new(25, 10);
        assert_eq!(codec25.encode_block(&block), vec![0, 5]);
        assert_eq!(codec25.decode_block(&[0, 5]).unwrap(), block);
    }

    #[test]
    fn test_max_block() {
        // 2^10 - 1 = 1023 = 1*625 + 398 -> [398, 1]
        let codec = codec(625, 10);
        let block = vec![true; 10];
        assert_eq!(codec.encode_block(&block), vec![398, 1]);
        assert_eq!(codec.decode_block(&[398, 1]).unwrap(), block);
    }

    #[test]
    fn test_zero_block() {
        let codec = codec(125, 1000);
        let digits = codec.encode_block(&vec![false; 1000]);
        assert_eq!(digits, vec![0]);
        assert_eq!(codec.decode_block(&digits).unwrap(), vec![false; 1000]);
    }

    #[test]
    fn test_wide_block_roundtrip() {
        let codec = codec(625, 1000);
        let block: Vec<bool> = (0..1000).map(|i| i % 3 == 0 || i % 7 == 0).collect();
        let digits = codec.encode_block(&block);
        assert!(digits.iter().all(|&d| d < 625));
        assert_eq!(codec.decode_block(&digits).unwrap(), block);
    }

    #[test]
    fn test_rejects_bad_digits() {
        let codec = codec(25, 20);
        assert!(codec.decode_block(&[25]).is_err());
        assert!(codec.decode_block(&[]).is_err());
    }

    #[test]
    fn test_rejects_value_wider_than_block() {
        // 625 needs 10 bits; 625^2 does not fit in 10
        let codec = codec(625, 10);
        assert!(codec.decode_block(&[0, 0, 1]).is_err());
    }
}
