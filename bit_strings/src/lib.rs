//! # bit_strings
//!
//! Conversion between fixed-width integers (8/16/32/64 bits, signed or
//! unsigned) and human-readable bit/hex strings, with configurable
//! presentation and strict input validation.
//!
//! ```rust
//! use bit_strings::{Bits, Radix, StringFormat, ZeroPolicy};
//!
//! // Render with the default config: big-endian binary, nibble grouping,
//! // zeroes padded to the type's full width.
//! let byte = Bits::new(42u8);
//! assert_eq!(byte.render(&StringFormat::DEFAULT), "0010 1010");
//!
//! // Hex output is 0x-prefixed and never grouped.
//! let word = Bits::new(15i32);
//! let hex = StringFormat::DEFAULT.with_radix(Radix::Hex);
//! assert_eq!(word.render(&hex), "0x0000000F");
//!
//! // Parsing validates first and rejects wholesale on any bad character.
//! let parsed = Bits::<u16>::from_hex_str("0xBE EF")?;
//! assert_eq!(parsed.value(), 0xBEEF);
//! assert!(Bits::<u16>::from_hex_str("0xBE YF").is_err());
//! # Ok::<(), bit_strings::BitFormatError>(())
//! ```
//!
//! ## Free-standing conversions
//!
//! ```rust
//! use bit_strings::{binary_to_hex_string, hex_to_binary_string, zero_extend};
//!
//! assert_eq!(hex_to_binary_string("0x2A")?, "00101010");
//! assert_eq!(binary_to_hex_string("0010 1010")?, "0x2a");
//! assert_eq!(zero_extend::<u8>("1000")?, "00001000");
//! # Ok::<(), bit_strings::BitFormatError>(())
//! ```

pub mod error;
pub use error::BitFormatError;

pub mod format;
pub use format::{DigitOrder, GroupUnit, HexCase, Radix, StringFormat, ZeroPolicy};

mod text;
pub use text::{normalize, trim};

pub mod validate;
pub use validate::{validate_binary, validate_hex};

pub mod codec;
pub use codec::{
    binary_to_hex_string, bits_to_hex_digit, hex_to_binary_string, nibble_to_bits, parse_binary,
    parse_hex, zero_extend,
};

pub mod value;
pub use value::{Bits, FixedWidth};
