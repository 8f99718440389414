use crate::numeral::{MAX_VALUE, MIN_VALUE};

/// Raised when a value cannot be converted in either direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNumeral {
    #[error("value {value} is lower than minimum value: {min}", min = MIN_VALUE)]
    BelowMinimum { value: i32 },

    #[error("value {value} is higher than maximum value: {max}", max = MAX_VALUE)]
    AboveMaximum { value: i32 },

    #[error("unexpected empty string")]
    Empty,

    #[error("value {input} is not a valid roman numeral")]
    Malformed { input: String },
}
