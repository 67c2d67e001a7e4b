//! # OxiRadix Codec
//!
//! Pure Rust reversible block codec. A bit string is cut into fixed-width
//! blocks and every block is rewritten as a sequence of small digits, either
//! binary windows (base 2) or positional digits in a power of five (base 5).
//! Decoding restores the exact input, padding included.
//!
//! ## Features
//!
//! - Seven base-2 window widths (1, 2, 4, 8, 16, 32, 64 bits)
//! - Four base-5 radices (5, 25, 125, 625)
//! - Block widths from 10 to 1000 bits, arbitrary-precision arithmetic
//! - SHA-256 integrity verification of round trips
//! - Binary frame container and serde support for [`EncodedStream`]
//! - Optional parallel block encode/decode (`parallel` feature)
//!
//! ## Example
//!
//! ```rust
//! use oxiradix_codec::{bytes_to_bits, configure, decode, encode, verify};
//!
//! let cfg = configure(5, 625, 40).unwrap();
//! let original = bytes_to_bits(b"Hola, este es un sistema reversible!");
//!
//! let stream = encode(&original, &cfg);
//! let decoded = decode(&stream, &cfg).unwrap();
//!
//! assert!(verify(&original, &decoded).is_verified());
//! ```
//!
//! ## Not a compressor
//!
//! The digit representation is generally larger than the input; see
//! [`metrics::analyze`] for size figures.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod base2;
pub mod base5;
pub mod frame;
pub mod metrics;
pub mod segment;
pub mod stream;
pub mod verify;
mod value;

pub use base2::Base2Codec;
pub use base5::Base5Codec;
pub use frame::{FRAME_MAGIC, is_frame, read_frame, write_frame};
pub use metrics::{EfficiencyReport, analyze};
pub use segment::{segment, strip_padding};
pub use stream::{EncodedStream, StreamCodec, block_codec, decode, encode};
pub use verify::{VerificationReport, digest, digest_hex, verify};

pub use oxiradix_core::{
    Base, BitString, BlockCodec, ConfigErrorKind, ConfigField, Configuration, Digit, EncodedBlock,
    OxiRadixError, Result, bits_to_bytes, bytes_to_bits, configure,
};
