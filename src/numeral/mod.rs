//! Conversion between Arabic integers and Roman numerals.
//!
//! Both directions go through four fixed place tables (thousands, hundreds,
//! tens, units) indexed by decimal digit. Parsing strips at most one table
//! entry per place, so only the canonical spelling of each value is
//! accepted: anything left over after the units place is rejected.

use tracing::{debug, debug_span};

use crate::error::InvalidNumeral;


/// Smallest value representable as a Roman numeral.
pub const MIN_VALUE: i32 = 1;

/// Largest value representable without vinculum notation.
pub const MAX_VALUE: i32 = 3999;

const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Place tables from most to least significant, paired with their weight.
const PLACES: [(&[&str], u16); 4] = [
    (&THOUSANDS, 1000),
    (&HUNDREDS, 100),
    (&TENS, 10),
    (&UNITS, 1),
];

/// Convert an integer in `MIN_VALUE..=MAX_VALUE` to its canonical Roman numeral.
pub fn to_roman(value: i32) -> Result<String, InvalidNumeral> {
    if value < MIN_VALUE {
        return Err(InvalidNumeral::BelowMinimum { value });
    }
    if value > MAX_VALUE {
        return Err(InvalidNumeral::AboveMaximum { value });
    }

    // In range, so the cast is lossless.
    let out = encode(value as u16);
    debug!(value, numeral = %out, "to_roman");
    Ok(out)
}

/// Concatenate the place encodings of an already range-checked value.
pub(crate) fn encode(value: u16) -> String {
    let mut rest = value;
    let mut out = String::with_capacity(15);
    for (table, weight) in PLACES {
        out.push_str(table[usize::from(rest / weight)]);
        rest %= weight;
    }
    out
}

/// Parse a Roman numeral (any letter case) back into its integer value.
///
/// Only canonical numerals are accepted: `"IIII"`, `"IIV"` and `"IIM"` are
/// all rejected with [`InvalidNumeral::Malformed`].
pub fn to_arabic(input: &str) -> Result<u16, InvalidNumeral> {
    if input.is_empty() {
        return Err(InvalidNumeral::Empty);
    }
    let _span = debug_span!("to_arabic", input).entered();

    let upper = input.to_ascii_uppercase();
    let mut rest = upper.as_str();
    let mut digits = [0u16; 4];
    for (digit, (table, _)) in digits.iter_mut().zip(PLACES) {
        *digit = consume_place(&mut rest, table);
    }

    if !rest.is_empty() {
        return Err(InvalidNumeral::Malformed {
            input: input.to_string(),
        });
    }

    debug!(?digits, "decoded places");
    Ok(digits.iter().fold(0, |acc, d| acc * 10 + d))
}

/// Strip the highest-index table entry that prefixes `rest`, advancing the
/// slice. Returns that index as the place digit, or 0 if nothing matched.
fn consume_place(rest: &mut &str, table: &[&str]) -> u16 {
    for (digit, encoding) in table.iter().enumerate().skip(1).rev() {
        if let Some(after) = rest.strip_prefix(*encoding) {
            *rest = after;
            // Tables hold at most 10 entries.
            return digit as u16;
        }
    }
    0
}
