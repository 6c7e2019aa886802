//! Raw input sanitation: trimming, space collapsing and radix-prefix
//! handling. Only the ASCII space character counts as padding; tabs and
//! newlines are ordinary (invalid) characters and fall through to the
//! validator.

use crate::error::BitFormatError;
use crate::format::Radix;

pub(crate) const HEX_PREFIX: &str = "0x";

/// Strips leading and trailing spaces. All-space input yields `""`;
/// interior spacing is left alone.
pub fn trim(text: &str) -> &str {
    text.trim_matches(' ')
}

/// Collapses every run of consecutive spaces into a single space.
///
/// Used to build error-message text, never for validation itself.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !prev_space {
                normalized.push(' ');
            }
            prev_space = true;
        } else {
            normalized.push(c);
            prev_space = false;
        }
    }
    normalized
}

/// Reduces trimmed text to a contiguous digit string.
///
/// Hexadecimal input must start with a literal lowercase `0x`; the prefix is
/// removed and every remaining space dropped. Binary input needs no prefix.
pub fn canonicalize(text: &str, radix: Radix) -> Result<String, BitFormatError> {
    let digits = match radix {
        Radix::Hex => text
            .strip_prefix(HEX_PREFIX)
            .ok_or_else(|| BitFormatError::MissingRadixPrefix(normalize(text)))?,
        Radix::Binary => text,
    };
    Ok(digits.chars().filter(|&c| c != ' ').collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_spaces_only() {
        assert_eq!(trim("  1010  "), "1010");
        assert_eq!(trim("      "), "");
        assert_eq!(trim("\t1010\n"), "\t1010\n");
        assert_eq!(trim(" 10 10 "), "10 10");
    }

    #[test]
    fn normalize_collapses_space_runs() {
        assert_eq!(normalize("10    10  0"), "10 10 0");
        assert_eq!(normalize("1010"), "1010");
        assert_eq!(normalize("   "), " ");
    }

    #[test]
    fn canonicalize_binary_strips_all_spaces() {
        assert_eq!(canonicalize("10 10 0", Radix::Binary).unwrap(), "10100");
    }

    #[test]
    fn canonicalize_hex_requires_lowercase_prefix() {
        assert_eq!(canonicalize("0xAB CD", Radix::Hex).unwrap(), "ABCD");
        assert_eq!(
            canonicalize("AB", Radix::Hex),
            Err(BitFormatError::MissingRadixPrefix("AB".to_string()))
        );
        assert!(canonicalize("0XAB", Radix::Hex).is_err());
    }
}
