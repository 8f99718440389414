//! Strict conversion between integers and Roman numerals.
//!
//! ```
//! use roman_numerals::{to_arabic, to_roman};
//!
//! assert_eq!(to_roman(1776).unwrap(), "MDCCLXXVI");
//! assert_eq!(to_arabic("mcmxcix").unwrap(), 1999);
//! assert!(to_arabic("IIII").is_err());
//! ```

pub mod error;
pub mod numeral;
pub mod roman;

#[cfg(test)]
mod tests;

pub use error::InvalidNumeral;
pub use numeral::{to_arabic, to_roman, MAX_VALUE, MIN_VALUE};
pub use roman::RomanNumeral;
