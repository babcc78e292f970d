use super::Field;

/// `cycle(source, period, length)`: a 1-d field of length `length` mapping
/// index `i` to `source[i mod period]`.
#[derive(Clone, Copy, Debug)]
pub struct Cycle<F> {
    source: F,
    period: usize,
    length: usize,
}

impl<F: Field<1>> Cycle<F> {
    pub fn new(source: F, period: usize, length: usize) -> Self {
        assert!(period > 0, "cycle period must be positive");
        Cycle { source, period, length }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<F: Field<1>> Field<1> for Cycle<F> {
    type Item = F::Item;

    fn at(&self, index: [usize; 1]) -> F::Item {
        self.source.at([index[0] % self.period])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndslice::field::Iota;

    #[test]
    fn cycle_wraps_around_the_period() {
        let source = Iota::with_defaults([3]);
        let cycle = Cycle::new(source, 3, 7);
        let values: Vec<_> = (0..7).map(|i| cycle.at([i])).collect();
        assert_eq!(values, vec![0, 1, 2, 0, 1, 2, 0]);
    }
}
