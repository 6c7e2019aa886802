//! Fixed-width value wrapper with a lazily cached rendering.

use std::cell::OnceCell;

use crate::codec::{BITS_PER_NIBBLE, digits_to_integer};
use crate::error::BitFormatError;
use crate::format::{self, Radix, StringFormat};
use crate::text::{normalize, trim};
use crate::validate::{validate_binary, validate_hex};

mod private {
    pub trait Sealed {}
}

/// The closed set of fixed-width integers the library renders and parses:
/// 8, 16, 32 and 64 bits, signed or unsigned. Sealed; the bit width of a
/// value is fixed by its type and can never change.
pub trait FixedWidth: Copy + private::Sealed {
    const BITS: u32;

    /// Zero-extended two's-complement bit pattern.
    fn to_bits(self) -> u64;

    /// Reconstructs a value from the low `BITS` bits of a pattern.
    fn from_bits(bits: u64) -> Self;

    /// Signed magnitude, promoted wide enough to hold every supported type.
    fn magnitude(self) -> i128;
}

macro_rules! impl_fixed_width {
    ($($int:ty => $uint:ty),* $(,)?) => {$(
        impl private::Sealed for $int {}

        impl FixedWidth for $int {
            const BITS: u32 = <$int>::BITS;

            fn to_bits(self) -> u64 {
                self as $uint as u64
            }

            fn from_bits(bits: u64) -> Self {
                bits as $uint as $int
            }

            fn magnitude(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_fixed_width!(
    u8 => u8,
    i8 => u8,
    u16 => u16,
    i16 => u16,
    u32 => u32,
    i32 => u32,
    u64 => u64,
    i64 => u64,
);

/// An immutable fixed-width integer together with its cached rendering.
///
/// The display string is produced on the first [`render`](Bits::render)
/// call and memoized; later calls return the cached text even if they pass
/// a different config. Callers wanting a fresh rendering construct a fresh
/// value.
///
/// # Examples
///
/// ```
/// use bit_strings::{Bits, StringFormat};
///
/// let byte = Bits::new(0u8);
/// assert_eq!(byte.render(&StringFormat::DEFAULT), "0000 0000");
///
/// let parsed = Bits::<u8>::from_binary_str("0010 1010")?;
/// assert_eq!(parsed.value(), 42);
/// # Ok::<(), bit_strings::BitFormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bits<T: FixedWidth> {
    value: T,
    rendered: OnceCell<String>,
}

impl<T: FixedWidth> Bits<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            rendered: OnceCell::new(),
        }
    }

    /// Builds a value from binary text. The digit count must fit the
    /// target type's width.
    pub fn from_binary_str(text: &str) -> Result<Self, BitFormatError> {
        let digits = validate_binary(text)?;
        Self::from_digits(&digits, Radix::Binary, text)
    }

    /// Builds a value from `0x`-prefixed hexadecimal text. The nibble count
    /// must fit the target type's width.
    pub fn from_hex_str(text: &str) -> Result<Self, BitFormatError> {
        let digits = validate_hex(text)?;
        Self::from_digits(&digits, Radix::Hex, text)
    }

    fn from_digits(digits: &str, radix: Radix, raw: &str) -> Result<Self, BitFormatError> {
        let bits_per_digit = match radix {
            Radix::Binary => 1,
            Radix::Hex => BITS_PER_NIBBLE,
        };
        if digits.len() * bits_per_digit > T::BITS as usize {
            return Err(BitFormatError::WidthExceeded {
                text: normalize(trim(raw)),
                radix,
                max_bits: T::BITS,
            });
        }
        Ok(Self::new(T::from_bits(digits_to_integer(digits, radix))))
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Renders the value per `format`, caching the result on first call.
    pub fn render(&self, format: &StringFormat) -> &str {
        self.rendered
            .get_or_init(|| format::render(self.value.to_bits(), T::BITS, format))
    }
}

impl<T: FixedWidth> From<T> for Bits<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Cross-width equality compares numeric magnitudes after promotion, so
/// `Bits::new(200u16) == Bits::new(200u8)` and a value out of the narrower
/// type's range simply compares unequal.
impl<T: FixedWidth, U: FixedWidth> PartialEq<Bits<U>> for Bits<T> {
    fn eq(&self, other: &Bits<U>) -> bool {
        self.value.magnitude() == other.value.magnitude()
    }
}

impl<T: FixedWidth> Eq for Bits<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{GroupUnit, ZeroPolicy};

    #[test]
    fn render_is_cached_and_idempotent() {
        let bits = Bits::new(5u8);
        let first = bits.render(&StringFormat::DEFAULT).to_string();
        assert_eq!(first, "0000 0101");
        assert_eq!(bits.render(&StringFormat::DEFAULT), first);

        // A different config after the first render does not re-render.
        let other = StringFormat::DEFAULT
            .with_zero_policy(ZeroPolicy::Suppress)
            .with_group_unit(GroupUnit::None);
        assert_eq!(bits.render(&other), first);
    }

    #[test]
    fn from_binary_str_checks_the_type_width() {
        assert_eq!(Bits::<u8>::from_binary_str("11111111").unwrap().value(), 255);
        assert!(matches!(
            Bits::<u8>::from_binary_str("1 1111 1111"),
            Err(BitFormatError::WidthExceeded { max_bits: 8, .. })
        ));
    }

    #[test]
    fn from_hex_str_checks_the_type_width() {
        assert_eq!(Bits::<u16>::from_hex_str("0xBEEF").unwrap().value(), 0xBEEF);
        assert!(matches!(
            Bits::<u16>::from_hex_str("0xBEEF5"),
            Err(BitFormatError::WidthExceeded { max_bits: 16, .. })
        ));
    }

    #[test]
    fn signed_values_render_their_bit_pattern() {
        let minus_one = Bits::new(-1i8);
        assert_eq!(minus_one.render(&StringFormat::DEFAULT), "1111 1111");
    }

    #[test]
    fn signed_parse_wraps_to_the_bit_pattern() {
        let parsed = Bits::<i8>::from_binary_str("1111 1111").unwrap();
        assert_eq!(parsed.value(), -1);
    }

    #[test]
    fn equality_promotes_across_widths() {
        assert_eq!(Bits::new(200u8), Bits::new(200u64));
        assert_eq!(Bits::new(-5i8), Bits::new(-5i64));
        assert_ne!(Bits::new(300u16), Bits::new(44u8));
        // Same bit pattern, different magnitude.
        assert_ne!(Bits::new(255u8), Bits::new(-1i8));
    }
}
