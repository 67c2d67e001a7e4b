//! Binary frame container for encoded streams.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! +-------+---------+------+-------+------------+--------------+-------------+--------------+
//! | magic | version | base | power | block_bits | padding_bits | block_count | original_len |
//! |  4 B  |   u8    |  u8  | u128  |    u32     |     u32      |     u64     |     u64      |
//! +-------+---------+------+-------+------------+--------------+-------------+--------------+
//! then for every block:
//! +-------------+-------------------------------------+
//! | digit count | digits, `digit_bytes` wide each     |
//! |     u32     |                                     |
//! +-------------+-------------------------------------+
//! ```
//!
//! `digit_bytes` is the smallest byte width holding `power - 1`: 1 byte for
//! radix 2..256 and 5..125, 2 bytes for 625 and 2^16, up to 8 bytes for 2^64.

use crate::stream::EncodedStream;
use oxiradix_core::config::Configuration;
use oxiradix_core::error::{OxiRadixError, Result};
use oxiradix_core::traits::{Digit, EncodedBlock};

/// Frame magic number ("ORDX").
pub const FRAME_MAGIC: [u8; 4] = *b"ORDX";

/// Current frame format version.
pub const FRAME_VERSION: u8 = 1;

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 4 + 1 + 1 + 16 + 4 + 4 + 8 + 8;

/// Whether `data` starts with the frame magic.
pub fn is_frame(data: &[u8]) -> bool {
    data.starts_with(&FRAME_MAGIC)
}

fn digit_bytes(power: u128) -> usize {
    let bits = u128::BITS - power.saturating_sub(1).leading_zeros();
    (bits as usize).div_ceil(8).max(1)
}

/// Serialize a stream into a binary frame.
///
/// # Example
///
/// ```rust
/// use oxiradix_codec::{configure, encode, read_frame, write_frame, BitString};
///
/// let cfg = configure(2, 256, 64).unwrap();
/// let stream = encode(&BitString::repeat(true, 100), &cfg);
///
/// let frame = write_frame(&stream);
/// assert_eq!(read_frame(&frame).unwrap(), stream);
/// ```
pub fn write_frame(stream: &EncodedStream) -> Vec<u8> {
    let width = digit_bytes(stream.power);
    let mut output =
        Vec::with_capacity(HEADER_SIZE + stream.blocks.len() * 4 + stream.digit_count() * width);

    output.extend_from_slice(&FRAME_MAGIC);
    output.push(FRAME_VERSION);
    output.push(stream.base);
    output.extend_from_slice(&stream.power.to_le_bytes());
    output.extend_from_slice(&(stream.block_bits as u32).to_le_bytes());
    output.extend_from_slice(&(stream.padding_bits as u32).to_le_bytes());
    output.extend_from_slice(&(stream.block_count as u64).to_le_bytes());
    output.extend_from_slice(&(stream.original_bit_length as u64).to_le_bytes());

    for block in &stream.blocks {
        output.extend_from_slice(&(block.len() as u32).to_le_bytes());
        for &digit in block {
            output.extend_from_slice(&digit.to_le_bytes()[..width]);
        }
    }

    output
}

/// Parse a binary frame back into a stream.
///
/// The header must name a legal configuration. The block count and digit
/// payload are read exactly; trailing bytes are rejected.
pub fn read_frame(data: &[u8]) -> Result<EncodedStream> {
    let mut reader = FrameReader::new(data);

    let magic = reader.take(4)?;
    if magic != FRAME_MAGIC {
        return Err(OxiRadixError::invalid_magic(FRAME_MAGIC, magic));
    }

    let version = reader.read_u8()?;
    if version != FRAME_VERSION {
        return Err(OxiRadixError::invalid_header(format!(
            "unsupported frame version {version}"
        )));
    }

    let base = reader.read_u8()?;
    let power = u128::from_le_bytes(reader.read_array()?);
    let block_bits = u32::from_le_bytes(reader.read_array()?) as usize;
    let padding_bits = u32::from_le_bytes(reader.read_array()?) as usize;
    let block_count = u64::from_le_bytes(reader.read_array()?);
    let original_bit_length = u64::from_le_bytes(reader.read_array()?);

    Configuration::new(u32::from(base), power, block_bits)
        .map_err(|err| OxiRadixError::invalid_header(err.to_string()))?;

    let block_count = usize::try_from(block_count)
        .map_err(|_| OxiRadixError::invalid_header("block count overflows usize"))?;
    let original_bit_length = usize::try_from(original_bit_length)
        .map_err(|_| OxiRadixError::invalid_header("original length overflows usize"))?;

    let width = digit_bytes(power);
    // Each block needs at least its 4-byte count, which bounds the allocation
    let mut blocks = Vec::with_capacity(block_count.min(reader.remaining() / 4));
    for _ in 0..block_count {
        let count = u32::from_le_bytes(reader.read_array()?) as usize;
        let mut block: EncodedBlock = Vec::with_capacity(count.min(reader.remaining() / width));
        for _ in 0..count {
            let mut digit = [0u8; 8];
            digit[..width].copy_from_slice(reader.take(width)?);
            block.push(Digit::from_le_bytes(digit));
        }
        blocks.push(block);
    }

    if reader.remaining() != 0 {
        return Err(OxiRadixError::invalid_header(format!(
            "{} trailing bytes after last block",
            reader.remaining()
        )));
    }

    Ok(EncodedStream {
        blocks,
        padding_bits,
        base,
        power,
        block_bits,
        block_count,
        original_bit_length,
    })
}

/// Byte cursor over a frame.
struct FrameReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FrameReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(OxiRadixError::unexpected_eof(len - self.remaining()));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }
}
