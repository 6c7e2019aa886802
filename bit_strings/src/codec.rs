//! Numeric conversions between digit strings and integers.
//!
//! Digit strings handed to the fallible conversions here are expected to be
//! canonical (output of [`validate_binary`]/[`validate_hex`]); the integer
//! folds additionally assume the length ceilings those validators enforce,
//! so they cannot overflow a `u64`.

use crate::error::BitFormatError;
use crate::format::Radix;
use crate::text::{HEX_PREFIX, trim};
use crate::validate::{validate_binary, validate_hex};
use crate::value::FixedWidth;

pub(crate) const BITS_PER_NIBBLE: usize = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Maps one hex digit (case-insensitive) to its four binary digits,
/// most-significant bit first.
///
/// # Examples
///
/// ```
/// use bit_strings::nibble_to_bits;
///
/// assert_eq!(nibble_to_bits('b')?, "1011");
/// assert_eq!(nibble_to_bits('B')?, "1011");
/// assert!(nibble_to_bits('g').is_err());
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn nibble_to_bits(hex_digit: char) -> Result<String, BitFormatError> {
    let value = hex_digit
        .to_digit(16)
        .ok_or_else(|| BitFormatError::InvalidHexDigit(hex_digit.to_string()))?;
    let mut bits = String::with_capacity(BITS_PER_NIBBLE);
    for shift in (0..BITS_PER_NIBBLE).rev() {
        bits.push(if value >> shift & 1 == 1 { '1' } else { '0' });
    }
    Ok(bits)
}

/// Inverse of [`nibble_to_bits`]: exactly four `0`/`1` characters to one
/// lowercase hex digit.
pub fn bits_to_hex_digit(bits: &str) -> Result<char, BitFormatError> {
    if bits.len() != BITS_PER_NIBBLE {
        return Err(BitFormatError::InvalidNibble(bits.to_string()));
    }
    let mut value = 0usize;
    for c in bits.chars() {
        value = (value << 1)
            | match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(BitFormatError::InvalidNibble(bits.to_string())),
            };
    }
    Ok(HEX_DIGITS[value] as char)
}

/// Expands a canonical hex digit string into its binary digit string,
/// most-significant digit first.
pub(crate) fn hex_to_binary_digits(hex_digits: &str) -> Result<String, BitFormatError> {
    let mut bits = String::with_capacity(hex_digits.len() * BITS_PER_NIBBLE);
    for digit in hex_digits.chars() {
        bits.push_str(&nibble_to_bits(digit)?);
    }
    Ok(bits)
}

/// Converts `0x`-prefixed hexadecimal text into an unprefixed binary digit
/// string, validating the input first.
///
/// # Examples
///
/// ```
/// use bit_strings::hex_to_binary_string;
///
/// assert_eq!(hex_to_binary_string("0x2A")?, "00101010");
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn hex_to_binary_string(text: &str) -> Result<String, BitFormatError> {
    let digits = validate_hex(text)?;
    hex_to_binary_digits(&digits)
}

/// Converts binary text into a `0x`-prefixed hexadecimal string, one digit
/// per four bits, most-significant group first.
///
/// The binary digit count must divide into whole nibbles; an all-zero input
/// still yields at least one digit.
///
/// # Examples
///
/// ```
/// use bit_strings::binary_to_hex_string;
///
/// assert_eq!(binary_to_hex_string("0010 1010")?, "0x2a");
/// assert!(binary_to_hex_string("10000").is_err()); // 5 bits
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn binary_to_hex_string(text: &str) -> Result<String, BitFormatError> {
    let bits = validate_binary(text)?;
    if bits.len() % BITS_PER_NIBBLE != 0 {
        return Err(BitFormatError::NotNibbleAligned(bits));
    }
    let mut hex = String::with_capacity(HEX_PREFIX.len() + bits.len() / BITS_PER_NIBBLE);
    hex.push_str(HEX_PREFIX);
    for start in (0..bits.len()).step_by(BITS_PER_NIBBLE) {
        hex.push(bits_to_hex_digit(&bits[start..start + BITS_PER_NIBBLE])?);
    }
    Ok(hex)
}

/// Folds a canonical digit string, most-significant digit first, into an
/// unsigned value. Length must have been checked by the validators.
pub(crate) fn digits_to_integer(digits: &str, radix: Radix) -> u64 {
    let base = u64::from(radix.base());
    let mut value = 0u64;
    for c in digits.chars() {
        let digit = c.to_digit(radix.base());
        debug_assert!(digit.is_some(), "digit string must be pre-validated");
        value = value * base + u64::from(digit.unwrap_or(0));
    }
    value
}

/// Repeated-division rendering of a value into digits, least-significant
/// digit first. Zero yields a single `0`; the loop stops as soon as the
/// quotient does, so the result carries no padding.
pub(crate) fn integer_to_digits(mut value: u64, radix: Radix) -> String {
    let base = u64::from(radix.base());
    let mut digits = String::new();
    loop {
        digits.push(HEX_DIGITS[(value % base) as usize] as char);
        value /= base;
        if value == 0 {
            break;
        }
    }
    digits
}

/// Parses binary text into its unsigned value.
///
/// # Examples
///
/// ```
/// use bit_strings::parse_binary;
///
/// assert_eq!(parse_binary("0000 1010")?, 10);
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn parse_binary(text: &str) -> Result<u64, BitFormatError> {
    Ok(digits_to_integer(&validate_binary(text)?, Radix::Binary))
}

/// Parses `0x`-prefixed hexadecimal text into its unsigned value.
///
/// # Examples
///
/// ```
/// use bit_strings::parse_hex;
///
/// assert_eq!(parse_hex("0xFF")?, 255);
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn parse_hex(text: &str) -> Result<u64, BitFormatError> {
    Ok(digits_to_integer(&validate_hex(text)?, Radix::Hex))
}

/// Zero-extends binary or `0x`-prefixed hex text to the bit width of `T`.
///
/// Hex input is first expanded to binary. A source already at or beyond the
/// target width is returned unchanged; nothing is ever truncated here (an
/// over-long input is rejected by validation long before this point).
///
/// # Examples
///
/// ```
/// use bit_strings::zero_extend;
///
/// assert_eq!(zero_extend::<u8>("1000")?, "00001000");
/// assert_eq!(zero_extend::<u16>("0x2A")?, "0000000000101010");
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn zero_extend<T: FixedWidth>(text: &str) -> Result<String, BitFormatError> {
    let trimmed = trim(text);
    let bits = if trimmed.starts_with(HEX_PREFIX) {
        hex_to_binary_string(trimmed)?
    } else {
        validate_binary(trimmed)?
    };
    let width = T::BITS as usize;
    if bits.len() >= width {
        return Ok(bits);
    }
    let mut extended = "0".repeat(width - bits.len());
    extended.push_str(&bits);
    Ok(extended)
}
