//! Conversions between fixed-width blocks and arbitrary-precision integers.
//!
//! Blocks reach 1000 bits, so block values are always `BigUint`.

use num_bigint::BigUint;
use oxiradix_core::error::{OxiRadixError, Result};

/// Interpret a block as an unsigned integer, most significant bit first.
pub(crate) fn block_to_value(block: &[bool]) -> BigUint {
    // Left-align to a whole number of bytes so leading pad bits are zero
    let lead = (8 - block.len() % 8) % 8;
    let mut bytes = Vec::with_capacity((block.len() + lead) / 8);
    let mut byte = 0u8;
    let mut filled = lead;

    for &bit in block {
        byte = (byte << 1) | bit as u8;
        filled += 1;
        if filled == 8 {
            bytes.push(byte);
            byte = 0;
            filled = 0;
        }
    }

    BigUint::from_bytes_be(&bytes)
}

/// Render `value` as exactly `block_bits` bits, zero-padded on the left.
///
/// Fails if the value needs more than `block_bits` bits.
pub(crate) fn value_to_block(value: &BigUint, block_bits: usize) -> Result<Vec<bool>> {
    let width = value.bits();
    if width > block_bits as u64 {
        return Err(OxiRadixError::invalid_input(
            width,
            format!("decoded value needs {width} bits, block holds {block_bits}"),
        ));
    }

    Ok((0..block_bits)
        .map(|i| value.bit((block_bits - 1 - i) as u64))
        .collect())
}

/// The least significant 64 bits of `value`.
#[inline]
pub(crate) fn low_u64(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or(0)
}
