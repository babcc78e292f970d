//! The three cursors that talk to real memory: a raw pointer, a pointer
//! with an extra step multiplier, and a direction-reversing wrapper around
//! either.

use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{Cursor, CursorDistance, CursorMut};

/// Direct element access: `i[k]` is `*(ptr + k)`. The base cursor used by
/// Contiguous slices.
pub struct Pointer<'a, T> {
    ptr: NonNull<T>,
    marker: PhantomData<&'a T>,
}

impl<'a, T> Pointer<'a, T> {
    /// # Safety
    /// `ptr` must be valid for reads (and, if used through [`CursorMut`],
    /// writes) of `T` at every offset the cursor is subsequently indexed
    /// with, for the lifetime `'a`.
    pub unsafe fn new(ptr: *const T) -> Self {
        Pointer { ptr: NonNull::new_unchecked(ptr as *mut T), marker: PhantomData }
    }
}

impl<T> Clone for Pointer<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Pointer<'_, T> {}

impl<'a, T> Cursor for Pointer<'a, T> {
    type Item = &'a T;

    unsafe fn get(&self, k: isize) -> Self::Item {
        &*self.ptr.as_ptr().offset(k)
    }

    fn advance(&mut self, k: isize) {
        self.ptr = unsafe { NonNull::new_unchecked(self.ptr.as_ptr().offset(k)) };
    }
}

impl<'a, T> CursorMut for Pointer<'a, T> {
    type ItemMut = &'a mut T;

    unsafe fn get_mut(&mut self, k: isize) -> Self::ItemMut {
        &mut *self.ptr.as_ptr().offset(k)
    }
}

impl<T> CursorDistance for Pointer<'_, T> {
    fn distance_to(&self, other: &Self) -> isize {
        unsafe { self.ptr.as_ptr().offset_from(other.ptr.as_ptr()) }
    }
}

/// Wraps a base cursor with a fixed step multiplier: `i[k]` is
/// `base[k * step]`. Used to express `stride(factor)` and the strides of
/// a Canonical/Universal dimension without storing a second pointer.
#[derive(Clone, Copy)]
pub struct Strided<C> {
    base: C,
    step: isize,
}

impl<C> Strided<C> {
    pub fn new(base: C, step: isize) -> Self {
        Strided { base, step }
    }
}

impl<C: Cursor> Cursor for Strided<C> {
    type Item = C::Item;

    unsafe fn get(&self, k: isize) -> Self::Item {
        self.base.get(k * self.step)
    }

    fn advance(&mut self, k: isize) {
        self.base.advance(k * self.step);
    }
}

impl<C: CursorMut> CursorMut for Strided<C> {
    type ItemMut = C::ItemMut;

    unsafe fn get_mut(&mut self, k: isize) -> Self::ItemMut {
        self.base.get_mut(k * self.step)
    }
}

impl<C: CursorDistance> CursorDistance for Strided<C> {
    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base) / self.step
    }
}

/// Reverses the direction of a base cursor: `i[k]` of a `Retro` cursor is
/// `base[-k]`. Reading through `Retro::new(Retro::new(c))` agrees with
/// reading through `c` directly, even though the two don't share a type —
/// `topology::retro` builds the nested value rather than trying to detect
/// and cancel it, since stable Rust has no way to specialize a function
/// over "is this cursor already a `Retro`".
#[derive(Clone, Copy)]
pub struct Retro<C> {
    base: C,
}

impl<C> Retro<C> {
    pub fn new(base: C) -> Self {
        Retro { base }
    }

    pub fn into_inner(self) -> C {
        self.base
    }
}

impl<C: Cursor> Cursor for Retro<C> {
    type Item = C::Item;

    unsafe fn get(&self, k: isize) -> Self::Item {
        self.base.get(-k)
    }

    fn advance(&mut self, k: isize) {
        self.base.advance(-k);
    }
}

impl<C: CursorMut> CursorMut for Retro<C> {
    type ItemMut = C::ItemMut;

    unsafe fn get_mut(&mut self, k: isize) -> Self::ItemMut {
        self.base.get_mut(-k)
    }
}

impl<C: CursorDistance> CursorDistance for Retro<C> {
    fn distance_to(&self, other: &Self) -> isize {
        other.base.distance_to(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_skips_by_step() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let base = unsafe { Pointer::new(data.as_ptr()) };
        let strided = Strided::new(base, 2);
        unsafe {
            assert_eq!(*strided.get(0), 0);
            assert_eq!(*strided.get(1), 2);
            assert_eq!(*strided.get(2), 4);
        }
    }

    #[test]
    fn retro_reads_backwards() {
        let data = [0i32, 1, 2, 3];
        // position the base cursor at the last element, as `topology::retro` does
        let mut base = unsafe { Pointer::new(data.as_ptr()) };
        base.advance(3);
        let retro = Retro::new(base);
        unsafe {
            assert_eq!(*retro.get(0), 3);
            assert_eq!(*retro.get(-1), 2);
            assert_eq!(*retro.get(-3), 0);
        }
    }

    #[test]
    fn double_retro_is_identity_on_reads() {
        let data = [0i32, 1, 2, 3];
        let base = unsafe { Pointer::new(data.as_ptr()) };
        let double = Retro::new(Retro::new(base));
        unsafe {
            assert_eq!(*double.get(0), *base.get(0));
            assert_eq!(*double.get(2), *base.get(2));
        }
    }
}
