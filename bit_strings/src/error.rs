use thiserror::Error;

use crate::format::Radix;

/// Errors for validating and converting textual bit/hex input.
///
/// Every variant that concerns a whole input string carries the normalized
/// (space-collapsed) form of that string so the message can echo what the
/// caller actually wrote.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitFormatError {
    #[error("{0} is not a valid hexadecimal value.")]
    MissingRadixPrefix(String),

    #[error("input contains no digits")]
    EmptyInput,

    #[error("{0} is not a valid binary value.")]
    InvalidBinaryDigit(String),

    #[error("{0} is not a valid hexadecimal value.")]
    InvalidHexDigit(String),

    #[error("{0} is not a valid 4-bit nibble")]
    InvalidNibble(String),

    #[error("{0} does not divide into whole nibbles")]
    NotNibbleAligned(String),

    #[error("{text} is not a valid {radix} value. The largest data type supported by this library is {max_bits}-bits")]
    WidthExceeded {
        text: String,
        radix: Radix,
        max_bits: u32,
    },
}
