//! Advisory size metrics for an encoded stream.
//!
//! Nothing here affects encoding or decoding. Two size estimates are
//! reported:
//!
//! - `estimated_encoded_bits` spends as many bits on every digit as the
//!   widest digit observed anywhere in the stream. One large digit inflates
//!   the estimate for the whole stream.
//! - `packed_encoded_bits` spends the configuration's fixed digit width
//!   (`bit_length(power - 1)`) on every digit, which is what the binary frame
//!   container actually writes.

use crate::stream::EncodedStream;
use serde::Serialize;

/// Size figures for one encoded stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyReport {
    /// Length of the input, in bits.
    pub original_bits: usize,
    /// Number of blocks.
    pub block_count: usize,
    /// Total digits across all blocks.
    pub digit_count: usize,
    /// Bit length of the largest digit in the stream.
    pub max_digit_bits: u32,
    /// `digit_count * max_digit_bits`.
    pub estimated_encoded_bits: usize,
    /// Fixed digit width for the stream's radix.
    pub nominal_digit_bits: u32,
    /// `digit_count * nominal_digit_bits`.
    pub packed_encoded_bits: usize,
    /// `packed_encoded_bits / original_bits`, or `0.0` for empty input.
    pub expansion_ratio: f64,
}

/// Compute size figures for `stream`.
pub fn analyze(stream: &EncodedStream) -> EfficiencyReport {
    let digit_count = stream.digit_count();
    let max_digit_bits = stream
        .blocks
        .iter()
        .flatten()
        .map(|&d| u64::BITS - d.leading_zeros())
        .max()
        .unwrap_or(0);
    let nominal_digit_bits = u128::BITS - stream.power.saturating_sub(1).leading_zeros();
    let packed_encoded_bits = digit_count * nominal_digit_bits as usize;

    let expansion_ratio = if stream.original_bit_length == 0 {
        0.0
    } else {
        packed_encoded_bits as f64 / stream.original_bit_length as f64
    };

    EfficiencyReport {
        original_bits: stream.original_bit_length,
        block_count: stream.block_count,
        digit_count,
        max_digit_bits,
        estimated_encoded_bits: digit_count * max_digit_bits as usize,
        nominal_digit_bits,
        packed_encoded_bits,
        expansion_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::encode;
    use oxiradix_core::bitstring::BitString;
    use oxiradix_core::config::configure;

    #[test]
    fn test_all_ones_nibbles() {
        let cfg = configure(2, 16, 40).unwrap();
        let stream = encode(&BitString::repeat(true, 80), &cfg);
        let report = analyze(&stream);

        assert_eq!(report.block_count, 2);
        assert_eq!(report.digit_count, 20);
        assert_eq!(report.max_digit_bits, 4);
        assert_eq!(report.estimated_encoded_bits, 80);
        assert_eq!(report.nominal_digit_bits, 4);
        assert_eq!(report.packed_encoded_bits, 80);
        assert!((report.expansion_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base5_expands() {
        let cfg = configure(5, 625, 40).unwrap();
        let stream = encode(&BitString::repeat(true, 400), &cfg);
        let report = analyze(&stream);
        assert_eq!(report.nominal_digit_bits, 10);
        assert!(report.max_digit_bits <= 10);
        assert!(report.expansion_ratio > 1.0);
    }

    #[test]
    fn test_zero_stream() {
        let cfg = configure(2, 256, 10).unwrap();
        let stream = encode(&BitString::repeat(false, 30), &cfg);
        let report = analyze(&stream);
        assert_eq!(report.digit_count, 3);
        assert_eq!(report.max_digit_bits, 0);
        assert_eq!(report.estimated_encoded_bits, 0);
        assert_eq!(report.packed_encoded_bits, 24);
    }

    #[test]
    fn test_empty_input() {
        let cfg = configure(5, 5, 10).unwrap();
        let report = analyze(&encode(&BitString::new(), &cfg));
        assert_eq!(report.digit_count, 0);
        assert_eq!(report.expansion_ratio, 0.0);
    }
}
