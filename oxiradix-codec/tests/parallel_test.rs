//! Parallel encode/decode must match the sequential path exactly.

#![cfg(feature = "parallel")]

use oxiradix_codec::{BitString, Configuration, StreamCodec, bytes_to_bits, configure};

fn generate_random(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed = 12345u64;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 33) as u8);
    }
    data
}

#[test]
fn test_parallel_identical_for_every_power() {
    let mut bits = bytes_to_bits(&generate_random(4096));
    bits.truncate(32_765);

    for (base, power) in Configuration::all_base_powers() {
        let codec = StreamCodec::new(configure(base.value(), power, 333).unwrap());

        let sequential = codec.encode(&bits);
        let parallel = codec.encode_parallel(&bits);
        assert_eq!(sequential, parallel, "encode differs for power {power}");

        let decoded = codec.decode_parallel(&parallel).expect("parallel decode failed");
        assert_eq!(decoded, codec.decode(&sequential).unwrap());
        assert_eq!(decoded, bits);
    }
}

#[test]
fn test_parallel_empty_input() {
    let codec = StreamCodec::new(configure(5, 25, 40).unwrap());
    let stream = codec.encode_parallel(&BitString::new());
    assert_eq!(stream.block_count, 0);
    assert!(codec.decode_parallel(&stream).unwrap().is_empty());
}

#[test]
fn test_parallel_mismatch_rejected() {
    let codec = StreamCodec::new(configure(5, 25, 40).unwrap());
    let stream = codec.encode_parallel(&BitString::repeat(true, 100));

    let other = StreamCodec::new(configure(5, 125, 40).unwrap());
    assert!(other.decode_parallel(&stream).is_err());
}
