use serde::{Deserialize, Serialize};

use crate::config::rules::PINS;
use crate::error::{Error, Result};

/// A single roll as written on a score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Roll {
    /// `X` - all ten pins on the first ball of a frame
    Strike,
    /// `/` - the remaining pins on the second ball of a frame
    Spare,
    /// `-` - no pins
    Miss,
    /// `0`-`9` - that many pins
    Pins(u8),
}

impl Roll {
    pub const STRIKE_SYMBOL: char = 'X';
    pub const SPARE_SYMBOL: char = '/';
    pub const MISS_SYMBOL: char = '-';

    /// Decode a roll symbol. `position` is only used for the error.
    pub fn from_symbol(symbol: char, position: usize) -> Result<Self> {
        match symbol {
            Self::STRIKE_SYMBOL => Ok(Self::Strike),
            Self::SPARE_SYMBOL => Ok(Self::Spare),
            Self::MISS_SYMBOL => Ok(Self::Miss),
            _ => symbol
                .to_digit(10)
                .map(|pins| Self::Pins(pins as u8))
                .ok_or(Error::InvalidRoll { symbol, position }),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Strike => Self::STRIKE_SYMBOL,
            Self::Spare => Self::SPARE_SYMBOL,
            Self::Miss => Self::MISS_SYMBOL,
            Self::Pins(pins) => char::from(b'0' + pins),
        }
    }

    /// Pin value of the roll on its own.
    ///
    /// A spare is worth the full rack here; callers that know the previous
    /// roll never add the two together.
    pub fn value(&self) -> u32 {
        match self {
            Self::Strike | Self::Spare => PINS,
            Self::Miss => 0,
            Self::Pins(pins) => u32::from(*pins),
        }
    }

    pub fn is_strike(&self) -> bool {
        matches!(self, Self::Strike)
    }

    pub fn is_spare(&self) -> bool {
        matches!(self, Self::Spare)
    }
}

impl TryFrom<char> for Roll {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Self::from_symbol(symbol, 0)
    }
}

impl From<Roll> for char {
    fn from(roll: Roll) -> Self {
        roll.symbol()
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
