//! Presentation configuration and the render pipeline.
//!
//! Rendering works on the least-significant-digit-first string produced by
//! the codec: pad to width, put the digits into display order, then group
//! (binary) or case-fold and prefix (hex). It is a pure function of the
//! value and the [`StringFormat`] passed in; a well-formed value can never
//! fail to render.

use std::fmt;

use crate::codec::{self, BITS_PER_NIBBLE};
use crate::text::HEX_PREFIX;

/// Numeral base used for display and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Hex,
}

impl Radix {
    pub(crate) fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hex => 16,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Radix::Binary => "binary",
            Radix::Hex => "hexadecimal",
        })
    }
}

/// Letter case applied to hexadecimal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexCase {
    UpperCase,
    LowerCase,
}

/// Digit order of the displayed string.
///
/// `BigEndian` is conventional most-significant-digit-first notation;
/// `LittleEndian` leaves the digits in the codec's least-significant-first
/// order. Only big-endian output can be fed back to the parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOrder {
    LittleEndian,
    BigEndian,
}

/// Digits between delimiter insertions when rendering binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupUnit {
    Nibble,
    Byte,
    None,
}

impl GroupUnit {
    fn width(self) -> Option<usize> {
        match self {
            GroupUnit::Nibble => Some(BITS_PER_NIBBLE),
            GroupUnit::Byte => Some(8),
            GroupUnit::None => None,
        }
    }
}

/// Whether output is padded with leading zeroes to the operand's full bit
/// width or trimmed to the minimal significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroPolicy {
    Suppress,
    IncludeToWidth,
}

/// A complete description of how a value should be rendered.
///
/// Configs are plain copyable values passed explicitly to every render call;
/// there is no shared mutable default to configure. Start from
/// [`StringFormat::DEFAULT`] and override fields with the `with_*` helpers.
///
/// # Examples
///
/// ```
/// use bit_strings::{Bits, Radix, StringFormat, ZeroPolicy};
///
/// let hex = StringFormat::DEFAULT
///     .with_radix(Radix::Hex)
///     .with_zero_policy(ZeroPolicy::Suppress);
/// assert_eq!(Bits::new(16i32).render(&hex), "0x10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringFormat {
    pub radix: Radix,
    pub case: HexCase,
    pub order: DigitOrder,
    pub group_unit: GroupUnit,
    pub zero_policy: ZeroPolicy,
    pub group_delimiter: char,
}

impl StringFormat {
    /// Big-endian binary, upper-case hex, nibble grouping with a space
    /// delimiter, zeroes padded to the full type width.
    pub const DEFAULT: Self = Self {
        radix: Radix::Binary,
        case: HexCase::UpperCase,
        order: DigitOrder::BigEndian,
        group_unit: GroupUnit::Nibble,
        zero_policy: ZeroPolicy::IncludeToWidth,
        group_delimiter: ' ',
    };

    pub const fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }

    pub const fn with_case(mut self, case: HexCase) -> Self {
        self.case = case;
        self
    }

    pub const fn with_order(mut self, order: DigitOrder) -> Self {
        self.order = order;
        self
    }

    pub const fn with_group_unit(mut self, group_unit: GroupUnit) -> Self {
        self.group_unit = group_unit;
        self
    }

    pub const fn with_zero_policy(mut self, zero_policy: ZeroPolicy) -> Self {
        self.zero_policy = zero_policy;
        self
    }

    pub const fn with_group_delimiter(mut self, group_delimiter: char) -> Self {
        self.group_delimiter = group_delimiter;
        self
    }
}

impl Default for StringFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders the bit pattern of a value of `total_bits` width.
pub(crate) fn render(value: u64, total_bits: u32, format: &StringFormat) -> String {
    match format.radix {
        Radix::Binary => render_binary(value, total_bits, format),
        Radix::Hex => render_hex(value, total_bits, format),
    }
}

fn render_binary(value: u64, total_bits: u32, format: &StringFormat) -> String {
    let mut digits = codec::integer_to_digits(value, Radix::Binary);
    if format.zero_policy == ZeroPolicy::IncludeToWidth {
        pad_to(&mut digits, total_bits as usize);
    }
    let display = apply_order(digits, format.order);
    match format.group_unit.width() {
        Some(unit) => group_digits(&display, unit, format.group_delimiter),
        None => display,
    }
}

fn render_hex(value: u64, total_bits: u32, format: &StringFormat) -> String {
    let mut digits = codec::integer_to_digits(value, Radix::Hex);
    if format.zero_policy == ZeroPolicy::IncludeToWidth {
        pad_to(&mut digits, total_bits as usize / BITS_PER_NIBBLE);
    }
    let display = apply_order(digits, format.order);
    let cased = match format.case {
        HexCase::UpperCase => display.to_ascii_uppercase(),
        HexCase::LowerCase => display.to_ascii_lowercase(),
    };
    let mut out = String::with_capacity(HEX_PREFIX.len() + cased.len());
    out.push_str(HEX_PREFIX);
    out.push_str(&cased);
    out
}

/// Pads the least-significant-first digit string with zeroes up to `width`,
/// which becomes leading zeroes once the string is put into display order.
fn pad_to(digits: &mut String, width: usize) {
    while digits.len() < width {
        digits.push('0');
    }
}

fn apply_order(digits: String, order: DigitOrder) -> String {
    match order {
        DigitOrder::BigEndian => digits.chars().rev().collect(),
        DigitOrder::LittleEndian => digits,
    }
}

/// Inserts `delimiter` every `unit` digits counted from the rightmost
/// displayed digit. A digit count that does not divide evenly leaves a
/// ragged short group on the left; strings no longer than one group are
/// returned as-is.
fn group_digits(digits: &str, unit: usize, delimiter: char) -> String {
    let len = digits.len();
    if len <= unit {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(len + (len - 1) / unit);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % unit == 0 {
            grouped.push(delimiter);
        }
        grouped.push(c);
    }
    grouped
}
