//! Cursor abstraction: a movable position over a backing store.
//!
//! A [`Cursor`] is the dynamic end of a [`Slice`](crate::ndslice::Slice) —
//! indexable with a signed offset, advanceable in place, and (for cursors
//! over real memory) comparable for distance. Lazy cursors (`Map`, `Zip`,
//! `Field`) never touch storage directly; only cursors that ultimately
//! bottom out in a [`Pointer`] or [`Strided`] cursor do.

mod basic;
mod bit;
mod chop;
mod field;
mod index;
mod map;
mod packed;
mod zip;

pub use basic::{Pointer, Retro, Strided};
pub use bit::Bit;
pub use chop::{Chop, Sliceable};
pub use field::FieldCursor;
pub use index::Index;
pub use map::Map;
pub use packed::Packed;
pub use zip::{Zip2, Zip3};

/// A movable cursor with indexed, offset-relative access.
///
/// `get` is `unsafe` because no cursor in this crate performs bounds
/// checking; callers (ultimately [`Slice`](crate::ndslice::Slice)) are
/// responsible for only ever indexing within `0 .. length` along every
/// dimension the cursor was constructed over.
pub trait Cursor: Copy {
    /// The value produced by indexing (by value for lazy cursors, by
    /// reference for cursors backed by real storage).
    type Item;

    /// Read the element at signed offset `k` from the cursor's current
    /// position. Only defined for `k` within the owning slice's bounds.
    ///
    /// # Safety
    /// `k` must be in range for the backing store the cursor was built
    /// over; out-of-range `k` is undefined behavior for pointer-backed
    /// cursors.
    unsafe fn get(&self, k: isize) -> Self::Item;

    /// Advance the cursor in place by `k` elements (may be negative).
    fn advance(&mut self, k: isize);
}

/// A [`Cursor`] that can yield a mutable location.
///
/// Lazy cursors (`Map`, `Zip`) do not implement this: writing through a
/// computed value has no meaning. Only cursors that resolve to a unique
/// storage cell do.
pub trait CursorMut: Cursor {
    type ItemMut;

    /// # Safety
    /// Same contract as [`Cursor::get`].
    unsafe fn get_mut(&mut self, k: isize) -> Self::ItemMut;
}

/// A [`Cursor`] for which the signed distance between two positions over
/// the same store is defined: `i - j` is only meaningful when both
/// positions were derived from the same backing store.
pub trait CursorDistance: Cursor {
    /// `self - other`, in elements. Only meaningful when both cursors were
    /// derived from the same backing store with the same step.
    fn distance_to(&self, other: &Self) -> isize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_cursor_roundtrips_through_a_vec() {
        let data = [10i32, 20, 30, 40];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        unsafe {
            assert_eq!(*cursor.get(0), 10);
            assert_eq!(*cursor.get(3), 40);
        }
    }
}
