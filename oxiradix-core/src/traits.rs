//! Core traits for block codecs.
//!
//! Every numeral system implements [`BlockCodec`]: one fixed-width block of
//! bits in, an ordered digit sequence out, and back again.

use crate::error::Result;

/// One encoded digit (or binary window). Index 0 of a digit sequence is the
/// least significant.
pub type Digit = u64;

/// Digits produced from a single block.
pub type EncodedBlock = Vec<Digit>;

/// A reversible block transform.
///
/// Implementations are stateless apart from their configuration, so they can
/// be shared across threads.
pub trait BlockCodec: Send + Sync {
    /// Width of every block this codec handles, in bits.
    fn block_bits(&self) -> usize;

    /// Encode one block of exactly [`block_bits`](Self::block_bits) bits.
    ///
    /// An all-zero block encodes to the single digit `[0]`, never to an empty
    /// sequence.
    fn encode_block(&self, block: &[bool]) -> EncodedBlock;

    /// Decode a digit sequence back into exactly
    /// [`block_bits`](Self::block_bits) bits, zero-padded on the left.
    ///
    /// Fails with `InvalidInput` if the digits could not have been produced by
    /// [`encode_block`](Self::encode_block).
    fn decode_block(&self, digits: &[Digit]) -> Result<Vec<bool>>;
}
