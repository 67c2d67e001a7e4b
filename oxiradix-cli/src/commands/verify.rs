//! Verify command implementation.

use crate::utils::{ConfigArgs, read_bits};
use oxiradix_codec::{StreamCodec, analyze, verify};
use oxiradix_codec::verify::to_hex;
use std::path::Path;
use std::time::Instant;

pub fn cmd_verify(
    input: &Path,
    config: ConfigArgs,
    text: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config.to_config()?;
    let codec = StreamCodec::new(config);
    let original = read_bits(input, text)?;

    let start = Instant::now();
    let stream = codec.encode(&original);
    let encode_time = start.elapsed();

    let start = Instant::now();
    let decoded = codec.decode(&stream)?;
    let decode_time = start.elapsed();

    let report = verify(&original, &decoded);
    let metrics = analyze(&stream);

    if json {
        let doc = serde_json::json!({
            "config": config.to_string(),
            "verified": report.is_verified(),
            "bits_equal": report.bits_equal,
            "length_match": report.length_match,
            "content_hash_equal": report.content_hash_equal,
            "original_sha256": to_hex(&report.original_digest),
            "decoded_sha256": to_hex(&report.reconstructed_digest),
            "encode_seconds": encode_time.as_secs_f64(),
            "decode_seconds": decode_time.as_secs_f64(),
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Verifying {} ({})", input.display(), config);
        println!();
        println!("Bit comparison:   {}", if report.bits_equal { "OK" } else { "FAILED" });
        println!(
            "Length:           {} -> {} bits",
            report.original_bits, report.reconstructed_bits
        );
        println!("SHA-256 original: {}", to_hex(&report.original_digest));
        println!("SHA-256 decoded:  {}", to_hex(&report.reconstructed_digest));
        println!(
            "Hashes:           {}",
            if report.content_hash_equal { "OK" } else { "FAILED" }
        );
        println!();
        println!("Blocks:           {}", metrics.block_count);
        println!("Digits:           {}", metrics.digit_count);
        println!("Encoded size:     {} bits (packed)", metrics.packed_encoded_bits);
        println!("Expansion:        {:.4}", metrics.expansion_ratio);
        println!("Encode time:      {:.6}s", encode_time.as_secs_f64());
        println!("Decode time:      {:.6}s", decode_time.as_secs_f64());
    }

    if !report.is_verified() {
        return Err("round trip verification failed".into());
    }

    if !json {
        println!();
        println!("Round trip verified.");
    }
    Ok(())
}
