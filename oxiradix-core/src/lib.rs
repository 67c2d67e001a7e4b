//! # OxiRadix Core
//!
//! Core components for the OxiRadix block codec.
//!
//! This crate provides the building blocks shared by every codec layer:
//!
//! - [`bitstring`]: Owned bit sequences and byte conversions
//! - [`config`]: Validated `(base, power, block_bits)` configurations
//! - [`traits`]: The [`BlockCodec`] trait implemented by each numeral system
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     encode / decode / verify / info / analyze           │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Segmenter, base-2 windows, base-5 digits, streams,  │
//! │     verifier, frame container                           │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     BitString, Configuration, BlockCodec, errors        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiradix_core::{BitString, configure};
//!
//! let cfg = configure(2, 16, 40).unwrap();
//! assert_eq!(cfg.window_bits(), Some(4));
//!
//! let bits: BitString = "1011".parse().unwrap();
//! assert_eq!(bits.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstring;
pub mod config;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstring::{BitString, bits_to_bytes, bytes_to_bits};
pub use config::{Base, Configuration, configure};
pub use error::{ConfigErrorKind, ConfigField, OxiRadixError, Result};
pub use traits::{BlockCodec, Digit, EncodedBlock};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstring::{BitString, bits_to_bytes, bytes_to_bits};
    pub use crate::config::{Base, Configuration, configure};
    pub use crate::error::{OxiRadixError, Result};
    pub use crate::traits::{BlockCodec, Digit, EncodedBlock};
}
