//! Positional notation in bases 2..=36 (digits `0-9A-Z`).

use crate::arith::Wide;
use crate::error::{Error, Result};
use crate::params::validate_base;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits of `value` in `base`, most significant first. `base` must
/// already be validated.
pub(crate) fn encode(value: Wide, base: u32) -> String {
    let mut remaining = value.get();
    if remaining == 0 {
        return "0".to_string();
    }

    let base = base as u128;
    let mut digits = Vec::new();
    while remaining > 0 {
        digits.push(DIGITS[(remaining % base) as usize]);
        remaining /= base;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Render `value` in `base`.
pub fn to_base_string(value: Wide, base: u32) -> Result<String> {
    validate_base(base)?;
    Ok(encode(value, base))
}

/// Number of digits of `value` in `base` (`0` has one digit).
pub fn digit_count(value: Wide, base: u32) -> Result<u32> {
    validate_base(base)?;
    let base = base as u128;
    let mut remaining = value.get() / base;
    let mut count = 1;
    while remaining > 0 {
        remaining /= base;
        count += 1;
    }
    Ok(count)
}

/// Parse `text` as a number in `base`, case-insensitively.
pub fn parse_in_base(text: &str, base: u32) -> Result<Wide> {
    validate_base(base)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::InvalidDigit { digit: ' ', base });
    }

    let radix = Wide::from(base);
    let mut value = Wide::ZERO;
    for c in text.chars() {
        let digit = c
            .to_digit(36)
            .filter(|&d| d < base)
            .ok_or(Error::InvalidDigit { digit: c, base })?;
        value = value.checked_mul(radix)?.checked_add(Wide::from(digit))?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base_string() {
        assert_eq!(to_base_string(Wide::ZERO, 2).unwrap(), "0");
        assert_eq!(to_base_string(Wide::new(29), 10).unwrap(), "29");
        assert_eq!(to_base_string(Wide::new(5), 2).unwrap(), "101");
        assert_eq!(to_base_string(Wide::new(255), 16).unwrap(), "FF");
        assert_eq!(to_base_string(Wide::new(35), 36).unwrap(), "Z");
        assert_eq!(to_base_string(Wide::new(36), 36).unwrap(), "10");
    }

    #[test]
    fn test_to_base_string_full_width() {
        assert_eq!(
            to_base_string(Wide::MAX, 16).unwrap(),
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
        );
    }

    #[test]
    fn test_to_base_string_invalid_base() {
        assert!(matches!(
            to_base_string(Wide::ONE, 1),
            Err(Error::InvalidBase(1))
        ));
        assert!(matches!(
            to_base_string(Wide::ONE, 37),
            Err(Error::InvalidBase(37))
        ));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(Wide::ZERO, 10).unwrap(), 1);
        assert_eq!(digit_count(Wide::new(9), 10).unwrap(), 1);
        assert_eq!(digit_count(Wide::new(10), 10).unwrap(), 2);
        assert_eq!(digit_count(Wide::new(99), 10).unwrap(), 2);
        assert_eq!(digit_count(Wide::new(8), 2).unwrap(), 4);
        assert_eq!(digit_count(Wide::MAX, 2).unwrap(), 128);
    }

    #[test]
    fn test_parse_in_base() {
        assert_eq!(parse_in_base("ff", 16).unwrap(), Wide::new(255));
        assert_eq!(parse_in_base("FF", 16).unwrap(), Wide::new(255));
        assert_eq!(parse_in_base("101", 2).unwrap(), Wide::new(5));
        assert_eq!(parse_in_base(" 29 ", 10).unwrap(), Wide::new(29));
    }

    #[test]
    fn test_parse_in_base_rejects_bad_digits() {
        assert!(matches!(
            parse_in_base("12", 2),
            Err(Error::InvalidDigit { digit: '2', base: 2 })
        ));
        assert!(matches!(
            parse_in_base("G", 16),
            Err(Error::InvalidDigit { digit: 'G', base: 16 })
        ));
        assert!(parse_in_base("", 10).is_err());
    }

    #[test]
    fn test_parse_in_base_overflow() {
        let too_long = "1".repeat(129);
        assert!(matches!(
            parse_in_base(&too_long, 2),
            Err(Error::Arithmetic(_))
        ));
    }
}
