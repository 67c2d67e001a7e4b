//! Info command implementation.

use crate::utils::load_stream;
use oxiradix_codec::analyze;
use std::path::Path;

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stream = load_stream(input)?;
    let metrics = analyze(&stream);

    if json {
        let doc = serde_json::json!({
            "base": stream.base,
            "power": stream.power.to_string(),
            "block_bits": stream.block_bits,
            "block_count": stream.block_count,
            "padding_bits": stream.padding_bits,
            "original_bit_length": stream.original_bit_length,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("File:            {}", input.display());
    println!("Base:            {}", stream.base);
    println!("Power:           {}", stream.power);
    println!("Block size:      {} bits", stream.block_bits);
    println!("Blocks:          {}", stream.block_count);
    println!("Padding:         {} bits", stream.padding_bits);
    println!("Original length: {} bits", stream.original_bit_length);
    println!("Digits:          {}", metrics.digit_count);
    println!(
        "Digit width:     {} bits nominal, {} bits max observed",
        metrics.nominal_digit_bits, metrics.max_digit_bits
    );
    println!("Expansion:       {:.4}", metrics.expansion_ratio);

    if let Err(e) = stream.check_consistency() {
        println!("Warning:         {}", e);
    }

    Ok(())
}
