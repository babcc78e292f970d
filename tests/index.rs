//! `Index`: lookup composition of a value cursor and an index-producing
//! cursor, exercised through the public `iterator`/`field` API.

use sci_core::ndslice::field::Iota;
use sci_core::ndslice::iterator::{Cursor, FieldCursor, Index};

#[derive(Clone, Copy)]
struct FixedIndices<'a>(&'a [usize]);

impl<'a> Cursor for FixedIndices<'a> {
    type Item = usize;

    unsafe fn get(&self, k: isize) -> usize {
        self.0[k as usize]
    }

    fn advance(&mut self, _k: isize) {}
}

#[test]
fn index_reads_the_base_field_at_each_supplied_position() {
    let values = FieldCursor::new(Iota::new([6], 10, 2), [6]); // 10,12,14,16,18,20
    let indices = FixedIndices(&[5, 0, 3]);
    let composed = Index::new(values, indices);
    unsafe {
        assert_eq!(composed.get(0), 20);
        assert_eq!(composed.get(1), 10);
        assert_eq!(composed.get(2), 16);
    }
}

#[test]
fn index_advance_moves_through_the_indices_cursor() {
    #[derive(Clone, Copy)]
    struct CountingIndices {
        pos: isize,
    }
    impl Cursor for CountingIndices {
        type Item = usize;
        unsafe fn get(&self, k: isize) -> usize {
            (self.pos + k) as usize
        }
        fn advance(&mut self, k: isize) {
            self.pos += k;
        }
    }

    let values = FieldCursor::new(Iota::new([6], 0, 1), [6]);
    let indices = CountingIndices { pos: 0 };
    let mut composed = Index::new(values, indices);
    composed.advance(3);
    unsafe {
        assert_eq!(composed.get(0), 3);
        assert_eq!(composed.get(1), 4);
    }
}
