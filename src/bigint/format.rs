//! Decimal/hex/binary formatting. The decimal formatter repeatedly divides
//! by the largest power of ten that fits in a word, emitting digits
//! least-significant-first into a buffer that gets reversed once at the end.

use crate::bigint::bigint::BigInt;

/// The largest `n` for which `10^n` fits in a `u64`.
const DECIMAL_CHUNK_DIGITS: usize = 19;
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000; // 10^19

impl<const K: usize> BigInt<K> {
    /// Minimum-length decimal digits, `[-]?[0-9]+`, no leading zeros
    /// except for the value `"0"` itself.
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let digit_bound = decimal_digit_bound(K);
        let mut digits: Vec<u8> = Vec::with_capacity(digit_bound);
        let mut working = *self;
        working.sign = false;
        while !working.is_zero() {
            let remainder = working.div_assign_scalar(DECIMAL_CHUNK, 0);
            if working.is_zero() {
                digits.extend(remainder.to_string().bytes().rev());
            } else {
                digits.extend(format!("{:0width$}", remainder, width = DECIMAL_CHUNK_DIGITS).bytes().rev());
            }
        }
        if self.sign {
            digits.push(b'-');
        }
        digits.reverse();
        String::from_utf8(digits).expect("decimal digit buffer is always ASCII")
    }

    /// Hex digits, most-significant word first with no leading zeros on
    /// the leading word, `[-]?[0-9a-f]+`.
    pub fn to_hex_string(&self) -> String {
        self.to_radix_string(16)
    }

    /// Binary digits, same convention as [`to_hex_string`].
    pub fn to_bin_string(&self) -> String {
        self.to_radix_string(2)
    }

    fn to_radix_string(&self, radix: u32) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut s = String::new();
        if self.sign {
            s.push('-');
        }
        let digits_per_word = match radix {
            16 => 16,
            2 => 64,
            _ => unreachable!("to_radix_string only supports hex and binary"),
        };
        let msw = self.word(self.length - 1);
        match radix {
            16 => s.push_str(&format!("{:x}", msw)),
            2 => s.push_str(&format!("{:b}", msw)),
            _ => unreachable!(),
        }
        for i in (0..self.length - 1).rev() {
            let w = self.word(i);
            match radix {
                16 => s.push_str(&format!("{:0width$x}", w, width = digits_per_word)),
                2 => s.push_str(&format!("{:0width$b}", w, width = digits_per_word)),
                _ => unreachable!(),
            }
        }
        s
    }
}

fn decimal_digit_bound(capacity_words: usize) -> usize {
    const LOG10_2: f64 = std::f64::consts::LOG10_2;
    ((capacity_words * u64::BITS as usize) as f64 * LOG10_2).ceil() as usize + 2
}
