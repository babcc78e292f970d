//! The `Field` iterator variant: wraps an (infinite) [`Field`] with a
//! current flat index, so a field can be driven by the same `Cursor`
//! contract as a pointer-backed slice once it has been given a concrete
//! shape.

use crate::ndslice::field::Field;

use super::Cursor;

/// A [`Cursor`] over a [`Field`], addressed by flat row-major position
/// within `lengths`.
#[derive(Clone, Copy, Debug)]
pub struct FieldCursor<F, const N: usize> {
    field: F,
    lengths: [usize; N],
    pos: isize,
}

impl<F: Field<N>, const N: usize> FieldCursor<F, N> {
    pub fn new(field: F, lengths: [usize; N]) -> Self {
        FieldCursor { field, lengths, pos: 0 }
    }

    fn multi_index(&self, flat: isize) -> [usize; N] {
        debug_assert!(flat >= 0, "FieldCursor indexed with a negative flat position");
        let mut rem = flat as usize;
        let mut index = [0usize; N];
        for k in 0..N {
            let inner: usize = self.lengths[k + 1..].iter().product();
            if inner == 0 {
                index[k] = 0;
                continue;
            }
            index[k] = rem / inner;
            rem %= inner;
        }
        index
    }
}

impl<F: Field<N>, const N: usize> Cursor for FieldCursor<F, N> {
    type Item = F::Item;

    unsafe fn get(&self, k: isize) -> Self::Item {
        let flat = self.pos + k;
        self.field.at(self.multi_index(flat))
    }

    fn advance(&mut self, k: isize) {
        self.pos += k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndslice::field::Iota;

    #[test]
    fn field_cursor_decomposes_flat_offsets_row_major() {
        let field = Iota::with_defaults([2, 3]);
        let mut cursor = FieldCursor::new(field, [2, 3]);
        let values: Vec<isize> = (0..6).map(|_| unsafe { cursor.get(0) }).collect();
        // all reads at offset 0 before any advance should be the same cell
        assert_eq!(values, vec![0; 6]);
        cursor.advance(4);
        assert_eq!(unsafe { cursor.get(0) }, 4);
    }
}
