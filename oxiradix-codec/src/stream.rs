//! Whole-stream encoding and decoding.
//!
//! [`StreamCodec`] ties the segmenter to the block codec selected by the
//! configured base, and owns the padding metadata that makes decode an exact
//! inverse of encode.

use crate::base2::Base2Codec;
use crate::base5::Base5Codec;
use crate::segment::{segment, strip_padding};
use log::{debug, trace};
use oxiradix_core::bitstring::{BitString, bits_to_bytes, bytes_to_bits};
use oxiradix_core::config::{Base, Configuration};
use oxiradix_core::error::{ConfigField, OxiRadixError, Result};
use oxiradix_core::traits::{BlockCodec, Digit, EncodedBlock};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The complete output of encoding one bit string.
///
/// Must reach [`decode`] unmodified, together with the configuration that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedStream {
    /// Digit sequences, one per block, in input order.
    pub blocks: Vec<EncodedBlock>,
    /// Zero bits appended to the final block.
    pub padding_bits: usize,
    /// Numeral base (2 or 5).
    pub base: u8,
    /// Digit radix.
    pub power: u128,
    /// Block width in bits.
    pub block_bits: usize,
    /// Number of blocks.
    pub block_count: usize,
    /// Length of the encoded bit string.
    pub original_bit_length: usize,
}

impl EncodedStream {
    /// Total number of digits across all blocks.
    pub fn digit_count(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Check the recorded parameters against `config`.
    ///
    /// Compares base, power and block width in that order and reports the
    /// first field that differs.
    pub fn check_config(&self, config: &Configuration) -> Result<()> {
        if u32::from(self.base) != config.base().value() {
            return Err(OxiRadixError::mismatch(
                ConfigField::Base,
                config.base().value(),
                self.base,
            ));
        }
        if self.power != config.power() {
            return Err(OxiRadixError::mismatch(
                ConfigField::Power,
                config.power(),
                self.power,
            ));
        }
        if self.block_bits != config.block_bits() {
            return Err(OxiRadixError::mismatch(
                ConfigField::BlockBits,
                config.block_bits() as u128,
                self.block_bits as u128,
            ));
        }
        Ok(())
    }

    /// Check that block count, padding and original length agree.
    pub fn check_consistency(&self) -> Result<()> {
        if self.block_count != self.blocks.len() {
            return Err(OxiRadixError::invalid_input(
                self.blocks.len() as u64,
                format!(
                    "stream records {} blocks but carries {}",
                    self.block_count,
                    self.blocks.len()
                ),
            ));
        }
        if self.padding_bits >= self.block_bits.max(1)
            || (self.block_count == 0 && self.padding_bits != 0)
        {
            return Err(OxiRadixError::invalid_input(
                0,
                format!(
                    "padding of {} bits invalid for {} blocks of {} bits",
                    self.padding_bits, self.block_count, self.block_bits
                ),
            ));
        }
        let carried = self
            .block_count
            .checked_mul(self.block_bits)
            .map(|total| total - self.padding_bits);
        if carried != Some(self.original_bit_length) {
            return Err(OxiRadixError::invalid_input(
                0,
                format!(
                    "stream records {} original bits, blocks carry {:?}",
                    self.original_bit_length, carried
                ),
            ));
        }
        Ok(())
    }
}

/// Pick the block codec for a configuration's base.
pub fn block_codec(config: &Configuration) -> Box<dyn BlockCodec> {
    match config.base() {
        Base::Two => Box::new(Base2Codec::new(
            config.power().trailing_zeros(),
            config.block_bits(),
        )),
        Base::Five => Box::new(Base5Codec::new(config.power() as u64, config.block_bits())),
    }
}

/// Stream encoder/decoder bound to one configuration.
pub struct StreamCodec {
    config: Configuration,
    codec: Box<dyn BlockCodec>,
}

impl std::fmt::Debug for StreamCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamCodec")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl StreamCodec {
    /// Create a stream codec for `config`.
    pub fn new(config: Configuration) -> Self {
        Self {
            codec: block_codec(&config),
            config,
        }
    }

    /// The configuration this codec was built with.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Encode a complete bit string.
    ///
    /// # Algorithm
    ///
    /// 1. Segment into `block_bits`-wide blocks, zero-padding the last one
    /// 2. Encode each block with the base's block codec, in order
    /// 3. Record the configuration and padding alongside the digits
    pub fn encode(&self, bits: &BitString) -> EncodedStream {
        let (blocks, padding_bits) = self.segment(bits);

        let encoded: Vec<EncodedBlock> = blocks
            .iter()
            .enumerate()
            .map(|(index, block)| self.encode_one(index, block))
            .collect();

        self.finish_encode(encoded, padding_bits, bits.len())
    }

    /// Decode a stream produced by [`encode`](Self::encode).
    ///
    /// Fails with `ConfigurationMismatch` before touching any block if the
    /// stream was encoded under a different configuration.
    pub fn decode(&self, stream: &EncodedStream) -> Result<BitString> {
        self.begin_decode(stream)?;

        let mut bits = BitString::with_capacity(stream.block_count * stream.block_bits);
        for (index, digits) in stream.blocks.iter().enumerate() {
            bits.extend_from_slice(&self.decode_one(index, digits)?);
        }

        Ok(self.finish_decode(bits, stream))
    }

    /// Encode raw bytes (8 bits per byte, MSB first).
    pub fn encode_bytes(&self, data: &[u8]) -> EncodedStream {
        self.encode(&bytes_to_bits(data))
    }

    /// Decode a stream and pack the result into bytes.
    ///
    /// The last byte is zero-padded on the right if the original bit length
    /// was not a multiple of 8.
    pub fn decode_bytes(&self, stream: &EncodedStream) -> Result<Vec<u8>> {
        Ok(bits_to_bytes(&self.decode(stream)?))
    }

    /// [`encode`](Self::encode) with blocks spread across the rayon pool.
    ///
    /// Output is identical to the sequential path.
    #[cfg(feature = "parallel")]
    pub fn encode_parallel(&self, bits: &BitString) -> EncodedStream {
        let (blocks, padding_bits) = self.segment(bits);

        let encoded: Vec<EncodedBlock> = blocks
            .par_iter()
            .enumerate()
            .map(|(index, block)| self.encode_one(index, block))
            .collect();

        self.finish_encode(encoded, padding_bits, bits.len())
    }

    /// [`decode`](Self::decode) with blocks spread across the rayon pool.
    ///
    /// Output is identical to the sequential path.
    #[cfg(feature = "parallel")]
    pub fn decode_parallel(&self, stream: &EncodedStream) -> Result<BitString> {
        self.begin_decode(stream)?;

        let decoded: Vec<Result<Vec<bool>>> = stream
            .blocks
            .par_iter()
            .enumerate()
            .map(|(index, digits)| self.decode_one(index, digits))
            .collect();

        let mut bits = BitString::with_capacity(stream.block_count * stream.block_bits);
        for block in decoded {
            bits.extend_from_slice(&block?);
        }

        Ok(self.finish_decode(bits, stream))
    }

    fn segment(&self, bits: &BitString) -> (Vec<Vec<bool>>, usize) {
        let (blocks, padding_bits) = segment(bits, self.config.block_bits());
        debug!(
            "encoding {} bits as {} blocks ({}), padding {} bits",
            bits.len(),
            blocks.len(),
            self.config,
            padding_bits
        );
        (blocks, padding_bits)
    }

    fn encode_one(&self, index: usize, block: &[bool]) -> EncodedBlock {
        let digits = self.codec.encode_block(block);
        trace!("block {index}: {} digits {:?}", digits.len(), digits);
        digits
    }

    fn finish_encode(
        &self,
        blocks: Vec<EncodedBlock>,
        padding_bits: usize,
        original_bit_length: usize,
    ) -> EncodedStream {
        EncodedStream {
            block_count: blocks.len(),
            blocks,
            padding_bits,
            base: self.config.base().value() as u8,
            power: self.config.power(),
            block_bits: self.config.block_bits(),
            original_bit_length,
        }
    }

    fn begin_decode(&self, stream: &EncodedStream) -> Result<()> {
        stream.check_config(&self.config)?;
        stream.check_consistency()?;
        debug!(
            "decoding {} blocks ({}), dropping {} padding bits",
            stream.block_count, self.config, stream.padding_bits
        );
        Ok(())
    }

    fn decode_one(&self, index: usize, digits: &[Digit]) -> Result<Vec<bool>> {
        trace!("block {index}: decoding {} digits", digits.len());
        self.codec.decode_block(digits).map_err(|err| match err {
            OxiRadixError::InvalidInput { message, .. } => OxiRadixError::invalid_input(
                index as u64,
                format!("block {index}: {message}"),
            ),
            other => other,
        })
    }

    fn finish_decode(&self, mut bits: BitString, stream: &EncodedStream) -> BitString {
        strip_padding(&mut bits, stream.padding_bits);
        debug!("decoded {} bits", bits.len());
        bits
    }
}

/// Encode `bits` under `config` (convenience function).
///
/// # Example
///
/// ```rust
/// use oxiradix_codec::{configure, decode, encode, BitString};
///
/// let cfg = configure(5, 25, 40).unwrap();
/// let bits: BitString = "1010101010101010101010101".parse().unwrap();
///
/// let stream = encode(&bits, &cfg);
/// assert_eq!(stream.block_count, 1);
/// assert_eq!(stream.padding_bits, 15);
///
/// assert_eq!(decode(&stream, &cfg).unwrap(), bits);
/// ```
pub fn encode(bits: &BitString, config: &Configuration) -> EncodedStream {
    StreamCodec::new(*config).encode(bits)
}

/// Decode `stream` under `config` (convenience function).
pub fn decode(stream: &EncodedStream, config: &Configuration) -> Result<BitString> {
    StreamCodec::new(*config).decode(stream)
}
