//! Analyze command implementation.

use crate::utils::read_bits;
use oxiradix_codec::{Configuration, StreamCodec, analyze, configure};
use std::path::Path;
use std::time::Instant;

pub fn cmd_analyze(
    input: &Path,
    block_bits: usize,
    text: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bits = read_bits(input, text)?;

    println!(
        "Analyzing {} ({} bits, {} bits/block)",
        input.display(),
        bits.len(),
        block_bits
    );
    println!();
    println!(
        "{:>4} {:>22} {:>8} {:>12} {:>9} {:>11} {:>11}  Reversible",
        "Base", "Power", "Digits", "Packed bits", "Expansion", "Encode (s)", "Decode (s)"
    );
    println!("{}", "-".repeat(96));

    let mut failures = 0usize;
    for (base, power) in Configuration::all_base_powers() {
        let codec = StreamCodec::new(configure(base.value(), power, block_bits)?);

        let start = Instant::now();
        let stream = codec.encode(&bits);
        let encode_time = start.elapsed();

        let start = Instant::now();
        let decoded = codec.decode(&stream)?;
        let decode_time = start.elapsed();

        let reversible = decoded == bits;
        if !reversible {
            failures += 1;
        }

        let metrics = analyze(&stream);
        println!(
            "{:>4} {:>22} {:>8} {:>12} {:>9.4} {:>11.6} {:>11.6}  {}",
            base.value(),
            power,
            metrics.digit_count,
            metrics.packed_encoded_bits,
            metrics.expansion_ratio,
            encode_time.as_secs_f64(),
            decode_time.as_secs_f64(),
            if reversible { "yes" } else { "NO" }
        );
    }

    if failures > 0 {
        return Err(format!("{failures} configurations failed to round trip").into());
    }
    Ok(())
}
