//! Decimal/hex/binary parsing. Each parser accumulates digits via repeated
//! `mul_assign_scalar(radix, digit)` — Horner's rule — which is exactly
//! `mul_assign_scalar`'s "pre-added by overflow" carry-in contract applied
//! one digit at a time.

use crate::bigint::bigint::BigInt;
use crate::bigint::error::{self, ParseBigIntError};

impl<const K: usize> BigInt<K> {
    /// Parses `[+-]?[0-9]+`. Leading zeros are accepted; an empty digit
    /// run (after an optional sign) is rejected.
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseBigIntError> {
        parse_radix(s, 10, false, |c| c.to_digit(10))
    }

    /// Parses `[+-]?[0-9A-Fa-f_]+`. `_` is accepted only when
    /// `allow_underscore` is set.
    pub fn from_hex_str(s: &str, allow_underscore: bool) -> Result<Self, ParseBigIntError> {
        parse_radix(s, 16, allow_underscore, |c| c.to_digit(16))
    }

    /// Parses `[+-]?[01_]+`, `_` gated the same way as [`from_hex_str`].
    pub fn from_bin_str(s: &str, allow_underscore: bool) -> Result<Self, ParseBigIntError> {
        parse_radix(s, 2, allow_underscore, |c| c.to_digit(2))
    }
}

fn parse_radix<const K: usize>(s: &str, radix: u64, allow_underscore: bool, digit_of: impl Fn(char) -> Option<u32>) -> Result<BigInt<K>, ParseBigIntError> {
    let mut chars = s.chars();
    let mut sign = false;
    let mut rest = s;
    match chars.next() {
        Some('+') => rest = &s[1..],
        Some('-') => {
            sign = true;
            rest = &s[1..];
        }
        _ => {}
    }

    let mut result = BigInt::<K>::zero();
    let mut saw_digit = false;
    for c in rest.chars() {
        if c == '_' {
            if allow_underscore {
                continue;
            }
            return Err(error::invalid_digit());
        }
        let digit = digit_of(c).ok_or_else(error::invalid_digit)?;
        saw_digit = true;
        if result.mul_assign_scalar(radix, digit as u64) != 0 {
            return Err(error::parse_capacity_exceeded());
        }
    }
    if !saw_digit {
        return Err(error::empty());
    }
    result.sign = sign && !result.is_zero();
    Ok(result)
}
