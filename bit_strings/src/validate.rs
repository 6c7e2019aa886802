//! Digit-string validation against the binary and hexadecimal grammars.
//!
//! Validation is total: a single invalid character anywhere rejects the
//! whole input. The returned string is the canonical digit text (prefix and
//! spaces removed, most-significant digit first).

use crate::error::BitFormatError;
use crate::format::Radix;
use crate::text::{canonicalize, normalize, trim};

/// Widest supported value, in binary digits.
pub(crate) const MAX_BINARY_DIGITS: usize = 64;
/// Widest supported value, in hexadecimal digits.
pub(crate) const MAX_HEX_DIGITS: usize = 16;

/// Validates binary text and returns its canonical digit string.
///
/// Accepts `0`/`1` with arbitrary spacing, 1 to 64 digits.
///
/// # Examples
///
/// ```
/// use bit_strings::validate_binary;
///
/// assert_eq!(validate_binary(" 1010 0110 ")?, "10100110");
/// assert!(validate_binary("10201").is_err());
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn validate_binary(text: &str) -> Result<String, BitFormatError> {
    let trimmed = trim(text);
    let digits = canonicalize(trimmed, Radix::Binary)?;
    if digits.is_empty() {
        return Err(BitFormatError::EmptyInput);
    }
    if digits.len() > MAX_BINARY_DIGITS {
        return Err(BitFormatError::WidthExceeded {
            text: normalize(trimmed),
            radix: Radix::Binary,
            max_bits: MAX_BINARY_DIGITS as u32,
        });
    }
    if !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(BitFormatError::InvalidBinaryDigit(normalize(trimmed)));
    }
    Ok(digits)
}

/// Validates `0x`-prefixed hexadecimal text and returns its canonical digit
/// string (prefix removed, case preserved).
///
/// Accepts `0-9a-fA-F` with arbitrary spacing after the prefix, 1 to 16
/// digits.
///
/// # Examples
///
/// ```
/// use bit_strings::validate_hex;
///
/// assert_eq!(validate_hex("0xDe aD")?, "DeaD");
/// assert!(validate_hex("cafe").is_err()); // missing 0x
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
pub fn validate_hex(text: &str) -> Result<String, BitFormatError> {
    let trimmed = trim(text);
    let digits = canonicalize(trimmed, Radix::Hex)?;
    if digits.is_empty() {
        return Err(BitFormatError::EmptyInput);
    }
    if digits.len() > MAX_HEX_DIGITS {
        return Err(BitFormatError::WidthExceeded {
            text: normalize(trimmed),
            radix: Radix::Hex,
            max_bits: (MAX_HEX_DIGITS * 4) as u32,
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BitFormatError::InvalidHexDigit(normalize(trimmed)));
    }
    Ok(digits)
}
