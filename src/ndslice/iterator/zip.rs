//! The `Zip` iterator variant: a tuple of cursors advanced in lockstep.
//! `[k]` yields an N-tuple of references/values. Rust has no variadic
//! tuples, so (as with the `Field` combinators) this crate provides
//! `Zip2`/`Zip3`; `zip`/`unzip` in `lazy.rs` build on these.

use super::{Cursor, CursorMut};

#[derive(Clone, Copy)]
pub struct Zip2<A, B> {
    a: A,
    b: B,
}

impl<A: Cursor, B: Cursor> Zip2<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Zip2 { a, b }
    }

    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip2<A, B> {
    type Item = (A::Item, B::Item);

    unsafe fn get(&self, k: isize) -> Self::Item {
        (self.a.get(k), self.b.get(k))
    }

    fn advance(&mut self, k: isize) {
        self.a.advance(k);
        self.b.advance(k);
    }
}

impl<A: CursorMut, B: CursorMut> CursorMut for Zip2<A, B> {
    type ItemMut = (A::ItemMut, B::ItemMut);

    unsafe fn get_mut(&mut self, k: isize) -> Self::ItemMut {
        // Safety: the two components are required (by the `zip`
        // constructor in `lazy.rs`) to come from non-overlapping storage,
        // so taking two independent mutable accesses here does not alias.
        let a_ptr: *mut A = &mut self.a;
        let b_ptr: *mut B = &mut self.b;
        ((*a_ptr).get_mut(k), (*b_ptr).get_mut(k))
    }
}

#[derive(Clone, Copy)]
pub struct Zip3<A, B, C> {
    a: A,
    b: B,
    c: C,
}

impl<A: Cursor, B: Cursor, C: Cursor> Zip3<A, B, C> {
    pub fn new(a: A, b: B, c: C) -> Self {
        Zip3 { a, b, c }
    }
}

impl<A: Cursor, B: Cursor, C: Cursor> Cursor for Zip3<A, B, C> {
    type Item = (A::Item, B::Item, C::Item);

    unsafe fn get(&self, k: isize) -> Self::Item {
        (self.a.get(k), self.b.get(k), self.c.get(k))
    }

    fn advance(&mut self, k: isize) {
        self.a.advance(k);
        self.b.advance(k);
        self.c.advance(k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndslice::iterator::Pointer;

    #[test]
    fn zip2_reads_both_components_in_lockstep() {
        let a = [1i32, 2, 3];
        let b = [10i32, 20, 30];
        let za = unsafe { Pointer::new(a.as_ptr()) };
        let zb = unsafe { Pointer::new(b.as_ptr()) };
        let zipped = Zip2::new(za, zb);
        unsafe {
            assert_eq!(zipped.get(1), (&2, &20));
        }
    }
}
