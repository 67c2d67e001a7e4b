//! Block segmentation with padding accounting.

use oxiradix_core::bitstring::BitString;

/// Split `bits` into consecutive blocks of `block_bits`.
///
/// The final block is right-padded with zero bits when it comes up short.
/// Returns the blocks and the number of padding bits added, which is always
/// less than `block_bits`. Empty input yields no blocks and no padding.
///
/// # Panics
///
/// Panics if `block_bits` is zero. A validated `Configuration` never is.
pub fn segment(bits: &BitString, block_bits: usize) -> (Vec<Vec<bool>>, usize) {
    assert!(block_bits > 0, "block width must be non-zero");

    let mut padding_bits = 0;
    let blocks: Vec<Vec<bool>> = bits
        .as_slice()
        .chunks(block_bits)
        .map(|chunk| {
            let mut block = chunk.to_vec();
            if block.len() < block_bits {
                padding_bits = block_bits - block.len();
                block.resize(block_bits, false);
            }
            block
        })
        .collect();

    (blocks, padding_bits)
}

/// Drop the last `padding_bits` bits, undoing [`segment`]'s padding.
pub fn strip_padding(bits: &mut BitString, padding_bits: usize) {
    let keep = bits.len().saturating_sub(padding_bits);
    bits.truncate(keep);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let bits = BitString::repeat(true, 30);
        let (blocks, padding) = segment(&bits, 10);
        assert_eq!(blocks.len(), 3);
        assert_eq!(padding, 0);
        assert!(blocks.iter().all(|b| b.len() == 10));
    }

    #[test]
    fn test_padding_final_block() {
        let bits = BitString::repeat(true, 95);
        let (blocks, padding) = segment(&bits, 40);
        assert_eq!(blocks.len(), 3);
        assert_eq!(padding, 25);
        assert!(blocks[2][..15].iter().all(|&b| b));
        assert!(blocks[2][15..].iter().all(|&b| !b));
    }

    #[test]
    fn test_shorter_than_one_block() {
        let bits: BitString = "1010101010101010101010101".parse().unwrap();
        let (blocks, padding) = segment(&bits, 40);
        assert_eq!(blocks.len(), 1);
        assert_eq!(padding, 15);
    }

    #[test]
    fn test_empty_input() {
        let (blocks, padding) = segment(&BitString::new(), 40);
        assert!(blocks.is_empty());
        assert_eq!(padding, 0);
    }

    #[test]
    fn test_padding_bound() {
        for len in 0..120 {
            let bits = BitString::repeat(true, len);
            let (blocks, padding) = segment(&bits, 17);
            assert!(padding < 17);
            assert_eq!(padding == 0, len % 17 == 0);
            assert_eq!(blocks.len() * 17 - padding, len);
        }
    }

    #[test]
    fn test_strip_padding() {
        let mut bits: BitString = "1100000".parse().unwrap();
        strip_padding(&mut bits, 5);
        assert_eq!(bits.to_string(), "11");

        let mut bits: BitString = "11".parse().unwrap();
        strip_padding(&mut bits, 0);
        assert_eq!(bits.to_string(), "11");
    }
}
