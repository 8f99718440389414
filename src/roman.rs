//! Validated Roman numeral value.
//!
//! `RomanNumeral` can only hold a value in `MIN_VALUE..=MAX_VALUE`, so
//! rendering it never fails. It serializes as its canonical numeral string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidNumeral;
use crate::numeral::{encode, to_arabic, MAX_VALUE, MIN_VALUE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RomanNumeral(u16);

impl RomanNumeral {
    /// `I`
    pub const MIN: RomanNumeral = RomanNumeral(MIN_VALUE as u16);
    /// `MMMCMXCIX`
    pub const MAX: RomanNumeral = RomanNumeral(MAX_VALUE as u16);

    pub fn new(value: i32) -> Result<Self, InvalidNumeral> {
        if value < MIN_VALUE {
            return Err(InvalidNumeral::BelowMinimum { value });
        }
        if value > MAX_VALUE {
            return Err(InvalidNumeral::AboveMaximum { value });
        }
        Ok(Self(value as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Canonical uppercase spelling.
    pub fn as_roman(self) -> String {
        encode(self.0)
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_roman())
    }
}

impl FromStr for RomanNumeral {
    type Err = InvalidNumeral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_arabic(s).map(Self)
    }
}

impl TryFrom<i32> for RomanNumeral {
    type Error = InvalidNumeral;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u16> for RomanNumeral {
    type Error = InvalidNumeral;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl TryFrom<&str> for RomanNumeral {
    type Error = InvalidNumeral;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for RomanNumeral {
    type Error = InvalidNumeral;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RomanNumeral> for u16 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}

impl From<RomanNumeral> for String {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.as_roman()
    }
}
