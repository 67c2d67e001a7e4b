//! Error types for OxiRadix operations.
//!
//! A single error enum covers configuration validation, decode-time
//! configuration checks, malformed input, and the binary frame container.

use std::fmt;
use std::io;
use thiserror::Error;

/// Why a `(base, power, block_bits)` triple was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Base is not 2 or 5.
    UnsupportedBase,
    /// Power is not in the allowed set for the chosen base.
    UnsupportedPower,
    /// Block size is outside `[10, 1000]`.
    BlockSizeOutOfRange,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::UnsupportedBase => "unsupported base",
            Self::UnsupportedPower => "unsupported power for base",
            Self::BlockSizeOutOfRange => "block size out of range",
        };
        f.write_str(reason)
    }
}

/// Configuration field compared when decoding a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    /// Numeral base.
    Base,
    /// Power of the base.
    Power,
    /// Block width in bits.
    BlockBits,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Power => "power",
            Self::BlockBits => "block_bits",
        };
        f.write_str(name)
    }
}

/// The main error type for OxiRadix operations.
#[derive(Debug, Error)]
pub enum OxiRadixError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rejected configuration triple.
    #[error("Invalid configuration: {reason} ({detail})")]
    InvalidConfiguration {
        /// Which rule was violated.
        reason: ConfigErrorKind,
        /// Human readable detail naming the offending value.
        detail: String,
    },

    /// Stream parameters disagree with the decoding configuration.
    #[error("Configuration mismatch on {field}: configured {expected}, stream has {found}")]
    ConfigurationMismatch {
        /// The first field that differs.
        field: ConfigField,
        /// Value from the decoding configuration.
        expected: u128,
        /// Value recorded in the stream.
        found: u128,
    },

    /// Malformed bit string, digit sequence, or stream metadata.
    #[error("Invalid input at position {position}: {message}")]
    InvalidInput {
        /// Bit, character, or block index where the problem was found.
        position: u64,
        /// Description of the problem.
        message: String,
    },

    /// Invalid magic number in a frame header.
    #[error("Invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual magic bytes found.
        found: Vec<u8>,
    },

    /// Invalid frame header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Unexpected end of data.
    #[error("Unexpected end of data: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for OxiRadix operations.
pub type Result<T> = std::result::Result<T, OxiRadixError>;

impl OxiRadixError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(reason: ConfigErrorKind, detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason,
            detail: detail.into(),
        }
    }

    /// Create a configuration mismatch error.
    pub fn mismatch(field: ConfigField, expected: impl Into<u128>, found: impl Into<u128>) -> Self {
        Self::ConfigurationMismatch {
            field,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(position: u64, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            position,
            message: message.into(),
        }
    }

    /// Create an invalid magic error.
    pub fn invalid_magic(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidMagic {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// The rejection reason, if this is a configuration error.
    pub fn config_error_kind(&self) -> Option<ConfigErrorKind> {
        match self {
            Self::InvalidConfiguration { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// The mismatched field, if this is a decode-time mismatch.
    pub fn mismatched_field(&self) -> Option<ConfigField> {
        match self {
            Self::ConfigurationMismatch { field, .. } => Some(*field),
            _ => None,
        }
    }
}
