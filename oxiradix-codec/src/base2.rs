//! Base-2 window codec.
//!
//! A block is read as an unsigned integer and cut into fixed-width bit
//! windows of `w = log2(power)` bits, least significant window first.
//!
//! The block width need not be a multiple of `w`: the top window may be only
//! partly filled, and decoding restores the exact width by left-padding the
//! reassembled value to `block_bits`.

use crate::value::{block_to_value, low_u64, value_to_block};
use num_bigint::BigUint;
use num_traits::Zero;
use oxiradix_core::config::Configuration;
use oxiradix_core::error::{OxiRadixError, Result};
use oxiradix_core::traits::{BlockCodec, Digit, EncodedBlock};

/// Shift-and-mask codec for base-2 configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base2Codec {
    block_bits: usize,
    /// Window width in bits (1, 2, 4, ... 64).
    window: u32,
    /// `power - 1`.
    mask: u64,
}

impl Base2Codec {
    /// Build a codec from a window width in bits.
    ///
    /// `window` must be one of the base-2 exponents; callers normally go
    /// through [`Base2Codec::from_config`].
    pub fn new(window: u32, block_bits: usize) -> Self {
        let mask = if window >= 64 {
            u64::MAX
        } else {
            (1u64 << window) - 1
        };
        Self {
            block_bits,
            window,
            mask,
        }
    }

    /// Build a codec for a base-2 configuration.
    ///
    /// Returns `None` for a base-5 configuration.
    pub fn from_config(config: &Configuration) -> Option<Self> {
        config
            .window_bits()
            .map(|window| Self::new(window, config.block_bits()))
    }

    /// Window width in bits.
    pub fn window_bits(&self) -> u32 {
        self.window
    }
}

impl BlockCodec for Base2Codec {
    fn block_bits(&self) -> usize {
        self.block_bits
    }

    fn encode_block(&self, block: &[bool]) -> EncodedBlock {
        debug_assert_eq!(block.len(), self.block_bits);

        let mut value = block_to_value(block);
        if value.is_zero() {
            return vec![0];
        }

        let mut windows = Vec::with_capacity(self.block_bits.div_ceil(self.window as usize));
        while !value.is_zero() {
            windows.push(low_u64(&value) & self.mask);
            value >>= self.window as usize;
        }
        windows
    }

    fn decode_block(&self, digits: &[Digit]) -> Result<Vec<bool>> {
        if digits.is_empty() {
            return Err(OxiRadixError::invalid_input(0, "empty window sequence"));
        }

        let mut value = BigUint::zero();
        for (i, &window) in digits.iter().enumerate() {
            if window > self.mask {
                return Err(OxiRadixError::invalid_input(
                    i as u64,
                    format!("window {window} exceeds {}-bit width", self.window),
                ));
            }
            value |= BigUint::from(window) << (i * self.window as usize);
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

    fn codec(power: u128, block_bits: usize) -> Base2Codec {
        Base2Codec::from_config(&configure(2, power, block_bits).unwrap()).unwrap()
    }

    #[test]
    fn test_from_config() {
        assert!(Base2Codec::from_config(&configure(5, 25, 40).unwrap()).is_none());
        assert_eq!(codec(1 << 16, 40).window_bits(), 16);
    }

    #[test]
    fn test_nibble_windows() {
        // 0b1010_1111_0011 = 0xAF3 -> windows 3, F, A
        let codec = codec(16, 12);
        let digits = codec.encode_block(&bits("101011110011"));
        assert_eq!(digits, vec![0x3, 0xF, 0xA]);
        assert_eq!(codec.decode_block(&digits).unwrap(), bits("101011110011"));
    }

    #[test]
    fn test_partial_top_window() {
        // 10 bits with 4-bit windows: top window holds 2 bits
        let codec = codec(16, 10);
        let block = bits("1111111111");
        let digits = codec.encode_block(&block);
        assert_eq!(digits, vec![0xF, 0xF, 0x3]);
        assert_eq!(codec.decode_block(&digits).unwrap(), block);
    }

    #[test]
    fn test_leading_zeros_restored() {
        let codec = codec(256, 16);
        let block = bits("0000000000000001");
        let digits = codec.encode_block(&block);
        assert_eq!(digits, vec![1]);
        assert_eq!(codec.decode_block(&digits).unwrap(), block);
    }

    #[test]
    fn test_zero_block() {
        let codec = codec(4, 40);
        let digits = codec.encode_block(&[false; 40]);
        assert_eq!(digits, vec![0]);
        assert_eq!(codec.decode_block(&digits).unwrap(), vec![false; 40]);
    }

    #[test]
    fn test_full_width_windows() {
        let codec = codec(1 << 64, 130);
        let block = vec![true; 130];
        let digits = codec.encode_block(&block);
        assert_eq!(digits, vec![u64::MAX, u64::MAX, 0b11]);
        assert_eq!(codec.decode_block(&digits).unwrap(), block);
    }

    #[test]
    fn test_single_bit_windows() {
        let codec = codec(2, 10);
        let block = bits("0000001011");
        assert_eq!(codec.encode_block(&block), vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_rejects_oversized_window() {
        let codec = codec(16, 12);
        assert!(codec.decode_block(&[0x10]).is_err());
        assert!(codec.decode_block(&[]).is_err());
    }

    #[test]
    fn test_rejects_value_wider_than_block() {
        let codec = codec(16, 10);
        // Three nibbles = 12 bits > 10
        assert!(codec.decode_block(&[0, 0, 0xF]).is_err());
    }
}
