//! Decode command implementation.

use crate::utils::{ConfigArgs, load_stream};
use log::{info, warn};
use oxiradix_codec::{StreamCodec, bits_to_bytes, configure};
use std::fs;
use std::path::Path;

pub fn cmd_decode(
    input: &Path,
    output: &Path,
    config: ConfigArgs,
    from_header: bool,
    text: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream = load_stream(input)?;

    let config = if from_header {
        warn!("decoding with parameters taken from the stream header");
        configure(u32::from(stream.base), stream.power, stream.block_bits)?
    } else {
        config.to_config()?
    };

    let bits = StreamCodec::new(config).decode(&stream)?;
    info!("decoded {} blocks into {} bits", stream.block_count, bits.len());

    if text {
        fs::write(output, format!("{}\n", bits))?;
    } else {
        if bits.len() % 8 != 0 {
            warn!(
                "{} bits is not a whole number of bytes, last byte zero-padded",
                bits.len()
            );
        }
        fs::write(output, bits_to_bytes(&bits))?;
    }

    println!("Decoded {} bits to {}", bits.len(), output.display());
    Ok(())
}
