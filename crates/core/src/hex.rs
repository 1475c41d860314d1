//! Endian-aware hexadecimal rendering of 32-bit integers.
//!
//! An i32 renders as exactly 8 uppercase hex digits, two per byte, in
//! either byte order:
//!
//! ```text
//! value = 4
//! big-endian:    00 00 00 04  ->  "00000004"
//! little-endian: 04 00 00 00  ->  "04000000"
//! ```
//!
//! The reverse direction, [`hex_to_decimal`], parses by positional weight
//! (digit * 16^position-from-right) and reports invalid digits as a
//! structured error instead of a sentinel value.

use crate::error::{HexError, Result};

/// Render an i32 as 8 uppercase hex digits, most significant byte first.
pub fn to_big_endian_hex(value: i32) -> String {
    render(value.to_be_bytes())
}

/// Render an i32 as 8 uppercase hex digits, least significant byte first.
pub fn to_little_endian_hex(value: i32) -> String {
    render(value.to_le_bytes())
}

fn render(bytes: [u8; 4]) -> String {
    let mut out = String::with_capacity(8);
    for byte in bytes {
        out.push_str(&format!("{:02X}", byte));
    }
    out
}

/// Parse a hex string by positional weight into an i32.
///
/// Accepts 1 to 8 digits from `0-9A-Fa-f`. The accumulator is the 32-bit
/// unsigned value reinterpreted as signed, so the full i32 range
/// round-trips: `hex_to_decimal("FFFFFFFE") == Ok(-2)`.
///
/// # Errors
/// - `HexError::Empty` for an empty string
/// - `HexError::TooLong` for more than 8 digits
/// - `HexError::InvalidDigit` for any character outside `0-9A-Fa-f`
pub fn hex_to_decimal(hex: &str) -> Result<i32> {
    if hex.is_empty() {
        return Err(HexError::Empty.into());
    }
    let len = hex.chars().count();
    if len > 8 {
        return Err(HexError::TooLong { len }.into());
    }

    let mut value: u32 = 0;
    for (position, digit) in hex.chars().enumerate() {
        let nibble = digit
            .to_digit(16)
            .ok_or(HexError::InvalidDigit { digit, position })?;
        value = value * 16 + nibble;
    }

    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_big_endian_rendering() {
        assert_eq!(to_big_endian_hex(4), "00000004");
        assert_eq!(to_big_endian_hex(255), "000000FF");
        assert_eq!(to_big_endian_hex(0x12345678), "12345678");
    }

    #[test]
    fn test_little_endian_rendering() {
        assert_eq!(to_little_endian_hex(4), "04000000");
        assert_eq!(to_little_endian_hex(255), "FF000000");
        assert_eq!(to_little_endian_hex(0x12345678), "78563412");
    }

    #[test]
    fn test_little_endian_byte_reverses_big_endian() {
        for value in [0, 1, -1, 4, 90, 0x12345678, i32::MIN, i32::MAX] {
            let big = to_big_endian_hex(value);
            let little = to_little_endian_hex(value);

            let big_pairs: Vec<&str> = (0..4).map(|i| &big[i * 2..i * 2 + 2]).collect();
            let little_pairs: Vec<&str> = (0..4).map(|i| &little[i * 2..i * 2 + 2]).collect();
            let reversed: Vec<&str> = little_pairs.into_iter().rev().collect();

            assert_eq!(big_pairs, reversed, "value {}", value);
        }
    }

    #[test]
    fn test_hex_to_decimal_positional_weight() {
        assert_eq!(hex_to_decimal("4").unwrap(), 4);
        assert_eq!(hex_to_decimal("10").unwrap(), 16);
        assert_eq!(hex_to_decimal("ff").unwrap(), 255);
        assert_eq!(hex_to_decimal("FF").unwrap(), 255);
        assert_eq!(hex_to_decimal("00000004").unwrap(), 4);
    }

    #[test]
    fn test_round_trip_through_big_endian() {
        for value in [0, 1, -1, -2, 4, 1000, i32::MIN, i32::MAX] {
            let hex = to_big_endian_hex(value);
            assert_eq!(hex_to_decimal(&hex).unwrap(), value, "hex {}", hex);
        }
    }

    #[test]
    fn test_negative_values_wrap_through_unsigned() {
        assert_eq!(hex_to_decimal("FFFFFFFF").unwrap(), -1);
        assert_eq!(hex_to_decimal("FFFFFFFE").unwrap(), -2);
        assert_eq!(hex_to_decimal("80000000").unwrap(), i32::MIN);
    }

    #[test]
    fn test_invalid_digit_is_distinct_from_minus_one() {
        // "G" must be an error, not a -1 that collides with a valid decode
        let result = hex_to_decimal("G");
        assert!(matches!(
            result,
            Err(Error::Hex(HexError::InvalidDigit { digit: 'G', position: 0 }))
        ));

        let result = hex_to_decimal("12Z4");
        assert!(matches!(
            result,
            Err(Error::Hex(HexError::InvalidDigit { digit: 'Z', position: 2 }))
        ));
    }

    #[test]
    fn test_empty_string_rejected() {
        assert!(matches!(
            hex_to_decimal(""),
            Err(Error::Hex(HexError::Empty))
        ));
    }

    #[test]
    fn test_too_long_rejected() {
        assert!(matches!(
            hex_to_decimal("123456789"),
            Err(Error::Hex(HexError::TooLong { len: 9 }))
        ));
    }
}
