//! OxiRadix CLI - reversible radix block codec
//!
//! Encodes files into base-2 windows or base-5 digits and back, and checks
//! that the round trip is exact.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_analyze, cmd_decode, cmd_encode, cmd_info, cmd_verify};
use std::path::PathBuf;
use utils::{ConfigArgs, StreamFormat};

#[derive(Parser)]
#[command(name = "oxiradix")]
#[command(author, version, about = "Reversible radix block codec")]
#[command(long_about = "
OxiRadix rewrites a bit stream as fixed-width blocks of base-2 windows or
base-5 digits, and restores it exactly.

Supported powers:
  base 2: 2, 4, 16, 256, 2^16, 2^32, 2^64
  base 5: 5, 25, 125, 625

Examples:
  oxiradix encode data.bin -o data.ordx
  oxiradix encode data.bin -o data.json -b 2 -p 2^16 -k 64 --format json
  oxiradix decode data.ordx -o data.out --from-header
  oxiradix verify data.bin -b 5 -p 125 -k 100
  oxiradix info data.ordx --json
  oxiradix analyze data.bin -k 200
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file into digit blocks
    #[command(alias = "e")]
    Encode {
        /// Input file
        input: PathBuf,

        /// Output file for the encoded stream
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Encoded stream format
        #[arg(short, long, value_enum, default_value_t = StreamFormat::Frame)]
        format: StreamFormat,

        /// Treat the input as `0`/`1` text instead of raw bytes
        #[arg(short, long)]
        text: bool,
    },

    /// Decode an encoded stream back into bits
    #[command(alias = "d")]
    Decode {
        /// Encoded stream (frame or JSON)
        input: PathBuf,

        /// Output file for the restored data
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Decode with the parameters recorded in the stream
        #[arg(long)]
        from_header: bool,

        /// Write the restored bits as `0`/`1` text instead of bytes
        #[arg(short, long)]
        text: bool,
    },

    /// Encode, decode and compare a file
    #[command(alias = "t")]
    Verify {
        /// Input file
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Treat the input as `0`/`1` text instead of raw bytes
        #[arg(short, long)]
        text: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show the header and size figures of an encoded stream
    Info {
        /// Encoded stream (frame or JSON)
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Compare every supported power on one input
    Analyze {
        /// Input file
        input: PathBuf,

        /// Block width in bits (10-1000)
        #[arg(short = 'k', long, default_value_t = 40)]
        block_bits: usize,

        /// Treat the input as `0`/`1` text instead of raw bytes
        #[arg(short, long)]
        text: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            config,
            format,
            text,
        } => cmd_encode(&input, &output, config, format, text),
        Commands::Decode {
            input,
            output,
            config,
            from_header,
            text,
        } => cmd_decode(&input, &output, config, from_header, text),
        Commands::Verify {
            input,
            config,
            text,
            json,
        } => cmd_verify(&input, config, text, json),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Analyze {
            input,
            block_bits,
            text,
        } => cmd_analyze(&input, block_bits, text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
