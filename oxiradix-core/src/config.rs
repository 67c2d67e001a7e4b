//! Codec configuration and its validation.

use crate::error::{ConfigErrorKind, OxiRadixError, Result};
use std::fmt;

/// Powers accepted for base 2: `2^1, 2^2, 2^4, ... 2^64`.
pub const BASE2_POWERS: [u128; 7] = [
    1 << 1,
    1 << 2,
    1 << 4,
    1 << 8,
    1 << 16,
    1 << 32,
    1 << 64,
];

/// Powers accepted for base 5: `5^1 .. 5^4`.
pub const BASE5_POWERS: [u128; 4] = [5, 25, 125, 625];

/// Smallest allowed block width in bits.
pub const MIN_BLOCK_BITS: usize = 10;

/// Largest allowed block width in bits.
pub const MAX_BLOCK_BITS: usize = 1000;

/// Numeral base of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Binary windows extracted by shift and mask.
    Two,
    /// Positional digits extracted by division.
    Five,
}

impl Base {
    /// Map a raw base value.
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            2 => Some(Self::Two),
            5 => Some(Self::Five),
            _ => None,
        }
    }

    /// The numeric base.
    pub fn value(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Five => 5,
        }
    }

    /// The powers this base accepts, ascending.
    pub fn allowed_powers(self) -> &'static [u128] {
        match self {
            Self::Two => &BASE2_POWERS,
            Self::Five => &BASE5_POWERS,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A validated `(base, power, block_bits)` triple.
///
/// Can only be built through [`Configuration::new`] (or [`configure`]), so
/// every instance satisfies the parameter rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    base: Base,
    power: u128,
    block_bits: usize,
}

impl Configuration {
    /// Validate and build a configuration.
    ///
    /// Rules are checked in order: base, power for that base, block size.
    pub fn new(base: u32, power: u128, block_bits: usize) -> Result<Self> {
        let base = Base::from_value(base).ok_or_else(|| {
            OxiRadixError::invalid_configuration(
                ConfigErrorKind::UnsupportedBase,
                format!("base {base} is not one of 2, 5"),
            )
        })?;

        if !base.allowed_powers().contains(&power) {
            return Err(OxiRadixError::invalid_configuration(
                ConfigErrorKind::UnsupportedPower,
                format!(
                    "power {power} not allowed for base {base}, expected one of {:?}",
                    base.allowed_powers()
                ),
            ));
        }

        if !(MIN_BLOCK_BITS..=MAX_BLOCK_BITS).contains(&block_bits) {
            return Err(OxiRadixError::invalid_configuration(
                ConfigErrorKind::BlockSizeOutOfRange,
                format!("block size {block_bits} outside {MIN_BLOCK_BITS}-{MAX_BLOCK_BITS} bits"),
            ));
        }

        Ok(Self {
            base,
            power,
            block_bits,
        })
    }

    /// Numeral base.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Power of the base used as the digit radix.
    pub fn power(&self) -> u128 {
        self.power
    }

    /// Block width in bits.
    pub fn block_bits(&self) -> usize {
        self.block_bits
    }

    /// Window width `log2(power)` for base 2; `None` for base 5.
    pub fn window_bits(&self) -> Option<u32> {
        match self.base {
            Base::Two => Some(self.power.trailing_zeros()),
            Base::Five => None,
        }
    }

    /// Bits needed to hold the largest digit, `power - 1`.
    pub fn digit_bits(&self) -> u32 {
        u128::BITS - (self.power - 1).leading_zeros()
    }

    /// Every legal `(base, power)` pair, base 2 first.
    pub fn all_base_powers() -> impl Iterator<Item = (Base, u128)> {
        [Base::Two, Base::Five]
            .into_iter()
            .flat_map(|base| base.allowed_powers().iter().map(move |&p| (base, p)))
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base={} power={} block_bits={}",
            self.base, self.power, self.block_bits
        )
    }
}

/// Validate a `(base, power, block_bits)` triple.
///
/// Equivalent to [`Configuration::new`].
///
/// # Example
///
/// ```
/// use oxiradix_core::config::configure;
/// use oxiradix_core::error::ConfigErrorKind;
///
/// let cfg = configure(5, 625, 40).unwrap();
/// assert_eq!(cfg.block_bits(), 40);
///
/// let err = configure(2, 32, 40).unwrap_err();
/// assert_eq!(err.config_error_kind(), Some(ConfigErrorKind::UnsupportedPower));
/// ```
pub fn configure(base: u32, power: u128, block_bits: usize) -> Result<Configuration> {
    Configuration::new(base, power, block_bits)
}
