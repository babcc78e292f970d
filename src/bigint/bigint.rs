//! `BigInt<K>`: a fixed-capacity, stack-allocated signed integer of up to
//! `K` 64-bit words. See `ops.rs` for arithmetic, `parse.rs`/`format.rs`
//! for string conversion, and `view.rs` for the borrowed-magnitude
//! subroutines the arithmetic builds on.

use std::cmp::Ordering;
use std::fmt;

use crate::bigint::error::{self, BigIntError};
use crate::bigint::view::BigIntView;

/// A signed integer with fixed capacity for `K` 64-bit words.
///
/// Words are stored least-significant-first regardless of host byte order:
/// unlike a byte-level reinterpretation of memory, a `[u64; K]` has no
/// natural "host-endian" reading in safe Rust, so there's nothing to gain
/// by varying word order with `cfg!(target_endian = ...)`. The string
/// formats this type accepts and produces are unaffected either way — the
/// public API stays neutral regardless of how words are stored internally.
///
/// Invariants maintained after every public operation:
/// - **Normalized**: if `length > 0`, the most significant active word
///   (`data[length - 1]`) is non-zero.
/// - **Zero representation**: `length == 0` implies `sign == false`.
#[derive(Clone, Copy)]
pub struct BigInt<const K: usize> {
    pub(crate) sign: bool,
    pub(crate) length: usize,
    pub(crate) data: [u64; K],
}

impl<const K: usize> BigInt<K> {
    /// The zero value.
    pub fn zero() -> Self {
        BigInt { sign: false, length: 0, data: [0u64; K] }
    }

    pub fn from_i64(value: i64) -> Self {
        let mut result = Self::zero();
        if value != 0 {
            debug_assert!(K >= 1, "BigInt<0> cannot represent a nonzero value");
            result.sign = value < 0;
            result.data[0] = value.unsigned_abs();
            result.length = 1;
        }
        result
    }

    pub fn from_u64(value: u64) -> Self {
        let mut result = Self::zero();
        if value != 0 {
            debug_assert!(K >= 1, "BigInt<0> cannot represent a nonzero value");
            result.data[0] = value;
            result.length = 1;
        }
        result
    }

    /// Builds a value directly from its least-significant-first word
    /// representation. Fails if `words` needs more than `K` words after
    /// trimming trailing zeros.
    pub fn from_words(sign: bool, words: &[u64]) -> Result<Self, BigIntError> {
        let active_len = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        if active_len > K {
            return Err(error::capacity_exceeded());
        }
        let mut result = Self::zero();
        result.data[..active_len].copy_from_slice(&words[..active_len]);
        result.length = active_len;
        result.sign = sign && active_len > 0;
        Ok(result)
    }

    /// Builds a value from a fixed-width unsigned integer's little-endian
    /// word array.
    pub fn from_fixed_uint<const S: usize>(words: [u64; S]) -> Result<Self, BigIntError> {
        Self::from_words(false, &words)
    }

    /// Restores the normalized/zero-representation invariants. Called at
    /// the end of every mutator; exposed so `parse.rs`/`ops.rs` can call
    /// it directly after building `data`/`length` by hand.
    pub(crate) fn normalize(&mut self) {
        while self.length > 0 && self.data[self.length - 1] == 0 {
            self.length -= 1;
        }
        if self.length == 0 {
            self.sign = false;
        }
    }

    pub fn capacity(&self) -> usize {
        K
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.length == 0
    }

    pub(crate) fn word(&self, logical: usize) -> u64 {
        self.data[logical]
    }

    pub(crate) fn word_mut(&mut self, logical: usize) -> &mut u64 {
        &mut self.data[logical]
    }

    /// A borrowed view over this value's active words, for operations
    /// that take `BigIntView` operands directly.
    pub fn view(&self) -> BigIntView<'_> {
        BigIntView::new(&self.data[..self.length], self.sign)
    }

    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
    }
}

impl<const K: usize> Default for BigInt<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const K: usize> PartialEq for BigInt<K> {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.length == other.length && self.data[..self.length] == other.data[..other.length]
    }
}

impl<const K: usize> Eq for BigInt<K> {}

impl<const K: usize> PartialOrd for BigInt<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const K: usize> Ord for BigInt<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        use crate::bigint::view::magnitude_cmp;
        match (self.sign, other.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude_cmp(&self.data[..self.length], &other.data[..other.length]),
            (true, true) => magnitude_cmp(&other.data[..other.length], &self.data[..self.length]),
        }
    }
}

impl<const K: usize> fmt::Debug for BigInt<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt").field("sign", &self.sign).field("words", &&self.data[..self.length]).finish()
    }
}

impl<const K: usize> fmt::Display for BigInt<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl<const K: usize> std::str::FromStr for BigInt<K> {
    type Err = crate::bigint::error::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

#[cfg(feature = "serde")]
impl<const K: usize> serde::Serialize for BigInt<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BigInt", 2)?;
        state.serialize_field("sign", &self.sign)?;
        state.serialize_field("words", &self.data[..self.length])?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, const K: usize> serde::Deserialize<'de> for BigInt<K> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Repr {
            sign: bool,
            words: Vec<u64>,
        }
        let repr = Repr::deserialize(deserializer)?;
        BigInt::from_words(repr.sign, &repr.words).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_normalized_and_not_negative() {
        let z = BigInt::<4>::zero();
        assert!(z.is_zero());
        assert!(!z.sign());
    }

    #[test]
    fn from_i64_round_trips_sign_and_magnitude() {
        let v = BigInt::<2>::from_i64(-42);
        assert!(v.sign());
        assert_eq!(v.length(), 1);
        assert_eq!(v.view().coefficients(), &[42]);
    }

    #[test]
    fn from_words_trims_trailing_zero_words() {
        let v = BigInt::<4>::from_words(false, &[7, 0, 0]).unwrap();
        assert_eq!(v.length(), 1);
    }

    #[test]
    fn from_words_rejects_values_that_do_not_fit() {
        let err = BigInt::<1>::from_words(false, &[1, 2]).unwrap_err();
        assert_eq!(err.kind(), crate::bigint::error::BigIntErrorKind::CapacityExceeded);
    }

    #[test]
    fn ordering_treats_negative_as_less_than_positive() {
        let neg = BigInt::<2>::from_i64(-5);
        let pos = BigInt::<2>::from_i64(5);
        assert!(neg < pos);
        assert!(BigInt::<2>::from_i64(3) < BigInt::<2>::from_i64(4));
    }
}
