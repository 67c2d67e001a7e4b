//! Encode command implementation.

use crate::utils::{ConfigArgs, StreamFormat, read_bits, save_stream};
use log::info;
use oxiradix_codec::StreamCodec;
use std::path::Path;
use std::time::Instant;

pub fn cmd_encode(
    input: &Path,
    output: &Path,
    config: ConfigArgs,
    format: StreamFormat,
    text: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config.to_config()?;
    let bits = read_bits(input, text)?;

    let start = Instant::now();
    let stream = StreamCodec::new(config).encode(&bits);
    let elapsed = start.elapsed();

    let written = save_stream(output, &stream, format)?;

    info!("encoded {} in {:.6}s", input.display(), elapsed.as_secs_f64());
    println!("Input:    {} ({} bits)", input.display(), bits.len());
    println!("Config:   {}", config);
    println!(
        "Blocks:   {} ({} padding bits)",
        stream.block_count, stream.padding_bits
    );
    println!("Digits:   {}", stream.digit_count());
    println!("Output:   {} ({} bytes, {:?})", output.display(), written, format);

    Ok(())
}
