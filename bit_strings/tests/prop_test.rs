use proptest::prelude::*;

use bit_strings::{
    Bits, GroupUnit, HexCase, Radix, StringFormat, ZeroPolicy, binary_to_hex_string,
    bits_to_hex_digit, hex_to_binary_string, nibble_to_bits, parse_binary, parse_hex,
    validate_binary, validate_hex,
};

/// Strategy for configs that keep render/parse lossless: big-endian digit
/// order and the space delimiter the parsers strip back out.
fn lossless_format() -> impl Strategy<Value = StringFormat> {
    (
        prop_oneof![Just(GroupUnit::Nibble), Just(GroupUnit::Byte), Just(GroupUnit::None)],
        prop_oneof![Just(ZeroPolicy::Suppress), Just(ZeroPolicy::IncludeToWidth)],
        prop_oneof![Just(HexCase::UpperCase), Just(HexCase::LowerCase)],
    )
        .prop_map(|(group_unit, zero_policy, case)| {
            StringFormat::DEFAULT
                .with_group_unit(group_unit)
                .with_zero_policy(zero_policy)
                .with_case(case)
        })
}

proptest! {

    // --- render/parse roundtrips ---

    #[test]
    fn binary_roundtrip_u64(v in any::<u64>(), fmt in lossless_format()) {
        let rendered = Bits::new(v).render(&fmt).to_string();
        prop_assert_eq!(parse_binary(&rendered).unwrap(), v);
    }

    #[test]
    fn hex_roundtrip_u64(v in any::<u64>(), fmt in lossless_format()) {
        let fmt = fmt.with_radix(Radix::Hex);
        let rendered = Bits::new(v).render(&fmt).to_string();
        prop_assert_eq!(parse_hex(&rendered).unwrap(), v);
    }

    #[test]
    fn binary_roundtrip_u8(v in any::<u8>(), fmt in lossless_format()) {
        let rendered = Bits::new(v).render(&fmt).to_string();
        prop_assert_eq!(parse_binary(&rendered).unwrap(), u64::from(v));
    }

    #[test]
    fn signed_roundtrip_through_bit_pattern(v in any::<i16>(), fmt in lossless_format()) {
        let rendered = Bits::new(v).render(&fmt).to_string();
        let reparsed = Bits::<i16>::from_binary_str(&rendered).unwrap();
        prop_assert_eq!(reparsed.value(), v);
    }

    // --- grouping and zero policy never change the recovered value ---

    #[test]
    fn presentation_does_not_affect_the_value(v in any::<u32>()) {
        let plain = StringFormat::DEFAULT
            .with_group_unit(GroupUnit::None)
            .with_zero_policy(ZeroPolicy::Suppress);
        let fancy = StringFormat::DEFAULT
            .with_group_unit(GroupUnit::Byte)
            .with_zero_policy(ZeroPolicy::IncludeToWidth);

        let a = parse_binary(Bits::new(v).render(&plain)).unwrap();
        let b = parse_binary(Bits::new(v).render(&fancy)).unwrap();
        prop_assert_eq!(a, b);
    }

    // --- rendered shape ---

    #[test]
    fn include_to_width_always_shows_the_full_width(v in any::<u16>()) {
        let fmt = StringFormat::DEFAULT.with_group_unit(GroupUnit::None);
        let rendered = Bits::new(v).render(&fmt).to_string();
        prop_assert_eq!(rendered.len(), 16);
    }

    #[test]
    fn grouped_output_has_ragged_short_group_on_the_left(v in 1u64..) {
        let fmt = StringFormat::DEFAULT.with_zero_policy(ZeroPolicy::Suppress);
        let rendered = Bits::new(v).render(&fmt).to_string();
        let groups: Vec<&str> = rendered.split(' ').collect();

        // Every group after the first is exactly one nibble; the first is
        // 1..=4 digits and never starts with a suppressed zero.
        prop_assert!((1..=4).contains(&groups[0].len()));
        prop_assert!(groups[0].starts_with('1'));
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 4);
        }
    }

    // --- width ceilings ---

    #[test]
    fn binary_ceiling_is_64_digits(len in 1usize..=80) {
        let text = "1".repeat(len);
        let result = validate_binary(&text);
        if len <= 64 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(
                matches!(result, Err(bit_strings::BitFormatError::WidthExceeded { .. })),
                "expected WidthExceeded, got {:?}",
                result
            );
        }
    }

    #[test]
    fn hex_ceiling_is_16_digits(len in 1usize..=24) {
        let text = format!("0x{}", "a".repeat(len));
        let result = validate_hex(&text);
        if len <= 16 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(
                matches!(result, Err(bit_strings::BitFormatError::WidthExceeded { .. })),
                "expected WidthExceeded, got {:?}",
                result
            );
        }
    }

    // --- nibble bijection and hex/binary string conversions ---

    #[test]
    fn nibble_mapping_bijects(digit in "[0-9a-fA-F]") {
        let c = digit.chars().next().unwrap();
        let bits = nibble_to_bits(c).unwrap();
        prop_assert_eq!(bits.len(), 4);
        prop_assert_eq!(bits_to_hex_digit(&bits).unwrap(), c.to_ascii_lowercase());
    }

    #[test]
    fn hex_and_binary_strings_invert(digits in "[0-9a-f]{1,16}") {
        let hex = format!("0x{digits}");
        let bits = hex_to_binary_string(&hex).unwrap();
        prop_assert_eq!(bits.len(), digits.len() * 4);
        prop_assert_eq!(binary_to_hex_string(&bits).unwrap(), hex);
    }
}
