//! Utility functions for the CLI.

use clap::{Args, ValueEnum};
use oxiradix_codec::{
    BitString, Configuration, EncodedStream, bytes_to_bits, configure, is_frame, read_frame,
    write_frame,
};
use std::fs;
use std::path::Path;

/// On-disk encoding for an encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum StreamFormat {
    /// Binary frame container
    #[default]
    Frame,
    /// JSON document
    Json,
}

/// Codec parameters shared by every subcommand.
#[derive(Debug, Clone, Copy, Args)]
pub struct ConfigArgs {
    /// Numeral base (2 or 5)
    #[arg(short, long, default_value_t = 5)]
    pub base: u32,

    /// Power of the base, e.g. 625, 5^4, 65536 or 2^16
    #[arg(short, long, default_value = "625", value_parser = parse_power)]
    pub power: u128,

    /// Block width in bits (10-1000)
    #[arg(short = 'k', long, default_value_t = 40)]
    pub block_bits: usize,
}

impl ConfigArgs {
    /// Validate into a codec configuration.
    pub fn to_config(self) -> oxiradix_codec::Result<Configuration> {
        configure(self.base, self.power, self.block_bits)
    }
}

/// Parse a power given either as a number or as `base^exponent`.
pub fn parse_power(s: &str) -> Result<u128, String> {
    let s = s.trim();
    match s.split_once('^') {
        Some((base, exp)) => {
            let base: u128 = base.trim().parse().map_err(|e| format!("bad base: {e}"))?;
            let exp: u32 = exp.trim().parse().map_err(|e| format!("bad exponent: {e}"))?;
            base.checked_pow(exp)
                .ok_or_else(|| format!("{s} overflows 128 bits"))
        }
        None => s.parse().map_err(|e| format!("bad power: {e}")),
    }
}

/// Initialise `env_logger`, honouring `RUST_LOG` when set.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Read an input file as bits.
///
/// With `text` set, the file holds `0`/`1` characters (whitespace ignored);
/// otherwise every byte contributes 8 bits.
pub fn read_bits(path: &Path, text: bool) -> Result<BitString, Box<dyn std::error::Error>> {
    if text {
        let content = fs::read_to_string(path)?;
        let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
        Ok(compact.parse()?)
    } else {
        Ok(bytes_to_bits(&fs::read(path)?))
    }
}

/// Load an encoded stream, detecting frame or JSON by the leading magic.
pub fn load_stream(path: &Path) -> Result<EncodedStream, Box<dyn std::error::Error>> {
    let data = fs::read(path)?;
    if is_frame(&data) {
        Ok(read_frame(&data)?)
    } else {
        Ok(serde_json::from_slice(&data)?)
    }
}

/// Write an encoded stream in the requested format.
pub fn save_stream(
    path: &Path,
    stream: &EncodedStream,
    format: StreamFormat,
) -> Result<usize, Box<dyn std::error::Error>> {
    let data = match format {
        StreamFormat::Frame => write_frame(stream),
        StreamFormat::Json => serde_json::to_vec_pretty(stream)?,
    };
    fs::write(path, &data)?;
    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_power() {
        assert_eq!(parse_power("625"), Ok(625));
        assert_eq!(parse_power("5^4"), Ok(625));
        assert_eq!(parse_power("2^64"), Ok(1 << 64));
        assert_eq!(parse_power(" 2 ^ 16 "), Ok(65536));
        assert!(parse_power("2^200").is_err());
        assert!(parse_power("abc").is_err());
    }
}
