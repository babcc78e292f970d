//! In-place arithmetic: scalar/fixed-UInt multiply, scalar divide,
//! signed add/sub over views, bit shifts, and `mul_pow5`. Every operation
//! here works entirely on the stack — no operand is ever materialized on
//! the heap.

use crate::bigint::bigint::BigInt;
use crate::bigint::view::{self, BigIntView};

impl<const K: usize> BigInt<K> {
    /// `*= rhs`, treating the value as if `overflow_in` had already been
    /// carried into the least-significant word. Returns the new overflow
    /// word: `0` if the result's extra word fit within capacity (and was
    /// appended), otherwise the word that didn't fit.
    pub fn mul_assign_scalar(&mut self, rhs: u64, overflow_in: u64) -> u64 {
        let mut carry: u128 = overflow_in as u128;
        for i in 0..self.length {
            let product = self.word(i) as u128 * rhs as u128 + carry;
            *self.word_mut(i) = product as u64;
            carry = product >> 64;
        }
        let carry = carry as u64;
        if carry != 0 {
            if self.length < K {
                *self.word_mut(self.length) = carry;
                self.length += 1;
                self.normalize();
                return 0;
            }
            return carry;
        }
        self.normalize();
        0
    }

    /// Fixed-capacity generalization of [`mul_assign_scalar`] whose
    /// carry-in/out is an `S`-word (little-endian) value rather than a
    /// single word. Combined-carry words are appended one at a time while
    /// capacity allows; whatever doesn't fit is returned as the new
    /// carry-out.
    pub fn mul_assign_fixed_uint<const S: usize>(&mut self, rhs: u64, overflow_in: [u64; S]) -> [u64; S] {
        let mut carry: u128 = 0;
        for i in 0..self.length {
            let product = self.word(i) as u128 * rhs as u128 + carry;
            *self.word_mut(i) = product as u64;
            carry = product >> 64;
        }

        let mut wide = overflow_in;
        let mut extra = carry as u64;
        for w in wide.iter_mut() {
            let (sum, overflowed) = w.overflowing_add(extra);
            *w = sum;
            extra = overflowed as u64;
            if extra == 0 {
                break;
            }
        }

        let mut i = 0;
        while i < S && self.length < K {
            *self.word_mut(self.length) = wide[i];
            self.length += 1;
            wide[i] = 0;
            i += 1;
        }
        self.normalize();
        wide
    }

    /// `/= rhs`, most-significant word first, with `overflow_in` as the
    /// remainder carried in from a higher part of a wider division.
    /// Precondition: `overflow_in < rhs`. Returns the final remainder.
    pub fn div_assign_scalar(&mut self, rhs: u64, overflow_in: u64) -> u64 {
        debug_assert_ne!(rhs, 0, "division by zero");
        debug_assert!(overflow_in < rhs, "div_assign_scalar overflow seed must be less than the divisor");
        let mut remainder: u128 = overflow_in as u128;
        for i in (0..self.length).rev() {
            let dividend = (remainder << 64) | self.word(i) as u128;
            *self.word_mut(i) = (dividend / rhs as u128) as u64;
            remainder = dividend % rhs as u128;
        }
        self.normalize();
        remainder as u64
    }

    /// `self += rhs`. Returns `true` if a carry-out could not be stored
    /// within capacity (the magnitude result is truncated in that case).
    pub fn add_assign_view(&mut self, rhs: BigIntView<'_>) -> bool {
        self.combine(rhs, false)
    }

    /// `self -= rhs`, i.e. `self += (-rhs)`.
    pub fn sub_assign_view(&mut self, rhs: BigIntView<'_>) -> bool {
        self.combine(rhs, true)
    }

    fn combine(&mut self, rhs: BigIntView<'_>, negate_rhs: bool) -> bool {
        let lhs_sign = self.sign;
        let rhs_sign = rhs.sign() ^ negate_rhs;
        let lhs_slice = self.data;
        let lhs_slice = &lhs_slice[..self.length];
        let rhs_slice = rhs.coefficients();

        let mut out = [0u64; K];
        let (result_sign, len, overflow) = if lhs_sign == rhs_sign {
            let (len, overflow) = view::magnitude_add(lhs_slice, rhs_slice, &mut out);
            (lhs_sign, len, overflow)
        } else {
            match view::magnitude_cmp(lhs_slice, rhs_slice) {
                std::cmp::Ordering::Less => (rhs_sign, view::magnitude_sub(rhs_slice, lhs_slice, &mut out), false),
                _ => (lhs_sign, view::magnitude_sub(lhs_slice, rhs_slice, &mut out), false),
            }
        };

        self.data = out;
        self.length = len;
        self.sign = result_sign;
        self.normalize();
        overflow
    }

    /// `<<= n` bits. Grows `length` up to capacity; any bits that would
    /// land past capacity are silently dropped. Historical behavior callers
    /// rely on, not a pattern to extend to other ops.
    pub fn shl_assign_bits(&mut self, n: u32) {
        if n == 0 {
            return;
        }
        let word_shift = (n / u64::BITS) as usize;
        let bit_shift = n % u64::BITS;
        let mut out = [0u64; K];
        for i in (0..self.length).rev() {
            let src = self.word(i);
            let dest_lo = i + word_shift;
            if dest_lo < K {
                out[dest_lo] |= if bit_shift == 0 { src } else { src << bit_shift };
            }
            if bit_shift != 0 {
                let dest_hi = dest_lo + 1;
                if dest_hi < K {
                    out[dest_hi] |= src >> (u64::BITS - bit_shift);
                }
            }
        }
        self.data = out;
        self.length = K.min(self.length + word_shift + 1);
        self.normalize();
    }

    /// `>>= n` bits, in place, losing the low bits shifted out.
    pub fn shr_assign_bits(&mut self, n: u32) {
        if n == 0 {
            return;
        }
        let word_shift = (n / u64::BITS) as usize;
        let bit_shift = n % u64::BITS;
        let mut out = [0u64; K];
        if word_shift < self.length {
            for i in word_shift..self.length {
                let src = self.word(i);
                let dest = i - word_shift;
                out[dest] |= if bit_shift == 0 { src } else { src >> bit_shift };
                if bit_shift != 0 && dest > 0 {
                    out[dest - 1] |= src << (u64::BITS - bit_shift);
                }
            }
        }
        self.data = out;
        self.length = self.length.saturating_sub(word_shift);
        self.normalize();
    }

    /// Multiplies in place by `5^k`, processed in chunks of the largest
    /// power of 5 that fits in a word. Returns `true` iff some chunk
    /// produced a carry that didn't fit in capacity — unlike shift, this
    /// reports rather than silently drops.
    pub fn mul_pow5(&mut self, mut k: u32) -> bool {
        let mut overflowed = false;
        while k > 0 {
            let chunk_exp = k.min(MAX_POW5_EXPONENT);
            let multiplier = if chunk_exp == MAX_POW5_EXPONENT { POW5_MAX_CHUNK } else { pow5(chunk_exp) };
            if self.mul_assign_scalar(multiplier, 0) != 0 {
                overflowed = true;
            }
            k -= chunk_exp;
        }
        overflowed
    }
}

/// The largest `n` for which `5^n` fits in a `u64`.
const MAX_POW5_EXPONENT: u32 = 27;
const POW5_MAX_CHUNK: u64 = 7_450_580_596_923_828_125; // 5^27

fn pow5(n: u32) -> u64 {
    let mut result = 1u64;
    for _ in 0..n {
        result *= 5;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_assign_scalar_appends_a_carry_word_when_capacity_allows() {
        let mut v = BigInt::<2>::from_u64(u64::MAX);
        let overflow = v.mul_assign_scalar(2, 0);
        assert_eq!(overflow, 0);
        assert_eq!(v.length(), 2);
    }

    #[test]
    fn mul_assign_scalar_reports_overflow_at_capacity() {
        let mut v = BigInt::<1>::from_u64(u64::MAX);
        let overflow = v.mul_assign_scalar(2, 0);
        assert_ne!(overflow, 0);
        assert_eq!(v.length(), 1);
    }

    #[test]
    fn div_assign_scalar_matches_schoolbook_division() {
        let mut v = BigInt::<2>::from_u64(100);
        let remainder = v.div_assign_scalar(7, 0);
        assert_eq!(remainder, 2);
        assert_eq!(v.view().coefficients(), &[14]);
    }

    #[test]
    fn add_and_sub_round_trip_through_views() {
        let a = BigInt::<2>::from_i64(40);
        let b = BigInt::<2>::from_i64(2);
        let mut sum = a;
        sum.add_assign_view(b.view());
        assert_eq!(sum, BigInt::<2>::from_i64(42));
        sum.sub_assign_view(b.view());
        assert_eq!(sum, a);
    }

    #[test]
    fn sub_of_larger_from_smaller_flips_sign() {
        let mut a = BigInt::<2>::from_i64(3);
        let b = BigInt::<2>::from_i64(10);
        a.sub_assign_view(b.view());
        assert_eq!(a, BigInt::<2>::from_i64(-7));
    }

    #[test]
    fn left_shift_drops_bits_past_capacity_silently() {
        let mut v = BigInt::<1>::from_u64(1);
        v.shl_assign_bits(64);
        assert!(v.is_zero());
    }

    #[test]
    fn shift_left_then_right_round_trips_when_no_bits_are_lost() {
        let mut v = BigInt::<4>::from_u64(0x1234);
        v.shl_assign_bits(40);
        v.shr_assign_bits(40);
        assert_eq!(v, BigInt::<4>::from_u64(0x1234));
    }

    #[test]
    fn mul_pow5_matches_the_documented_hex_example() {
        let mut d = BigInt::<4>::from_u64(0xd);
        let overflowed = d.mul_pow5(60);
        assert!(!overflowed);
        assert_eq!(d.to_hex_string(), "81704fcef32d3bd8117effd5c4389285b05d");
    }
}
