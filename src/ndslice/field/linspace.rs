//! `linspace<T>(lengths, intervals)`: per-axis evenly spaced values.

use super::Field;

/// One axis of a [`Linspace`]: `count` values evenly spaced across
/// `[start, end]` inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Interval {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Interval { start, end, count }
    }

    fn value_at(&self, i: usize) -> f64 {
        if self.count <= 1 {
            return self.start;
        }
        let t = i as f64 / (self.count - 1) as f64;
        self.start + t * (self.end - self.start)
    }
}

/// For `N == 1` this is a 1-d field of evenly spaced values; for `N > 1`
/// it is the Cartesian product of the per-axis fields, with the element
/// rendered as `[f64; N]` (see [`NdIota`](super::NdIota) for the same
/// choice over per-axis indices instead of values).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linspace<const N: usize> {
    intervals: [Interval; N],
}

impl<const N: usize> Linspace<N> {
    pub fn new(intervals: [Interval; N]) -> Self {
        Linspace { intervals }
    }

    pub fn lengths(&self) -> [usize; N] {
        let mut lengths = [0usize; N];
        for k in 0..N {
            lengths[k] = self.intervals[k].count;
        }
        lengths
    }
}

impl<const N: usize> Field<N> for Linspace<N> {
    type Item = [f64; N];

    fn at(&self, index: [usize; N]) -> [f64; N] {
        let mut out = [0.0f64; N];
        for k in 0..N {
            out[k] = self.intervals[k].value_at(index[k]);
        }
        out
    }
}

/// Approximate comparisons for `Linspace`'s axis endpoints, for callers who
/// only need to know whether two evenly spaced axes describe "the same"
/// range up to floating-point tolerance.
///
/// **Requires crate feature `"approx"`.**
#[cfg(feature = "approx")]
impl<const N: usize> Linspace<N> {
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.intervals.iter().zip(other.intervals.iter()).all(|(a, b)| {
            a.count == b.count
                && approx::AbsDiffEq::abs_diff_eq(&a.start, &b.start, epsilon)
                && approx::AbsDiffEq::abs_diff_eq(&a.end, &b.end, epsilon)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dimensional_linspace_hits_both_endpoints() {
        let field = Linspace::new([Interval::new(0.0, 1.0, 5)]);
        assert_eq!(field.at([0]), [0.0]);
        assert_eq!(field.at([4]), [1.0]);
        assert_eq!(field.at([2]), [0.5]);
    }

    #[test]
    fn single_point_interval_is_just_start() {
        let field = Linspace::new([Interval::new(3.0, 9.0, 1)]);
        assert_eq!(field.at([0]), [3.0]);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn abs_diff_eq_tolerates_rounding_error_in_endpoints() {
        let a = Linspace::new([Interval::new(0.0, 1.0, 5)]);
        let b = Linspace::new([Interval::new(0.0, 1.0 + 1e-12, 5)]);
        assert!(a.abs_diff_eq(&b, 1e-9));
        let c = Linspace::new([Interval::new(0.0, 1.1, 5)]);
        assert!(!a.abs_diff_eq(&c, 1e-9));
    }
}
