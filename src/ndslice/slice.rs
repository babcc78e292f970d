//! The central view type: `lengths[N]` plus (for non-Contiguous kinds) a
//! stride array, plus a cursor. See `kind.rs` for the stride-representation
//! lattice and `topology.rs`/`lazy.rs` for the operations that build new
//! `Slice`s out of old ones without allocating.

use crate::ndslice::iterator::{Cursor, CursorMut};
use crate::ndslice::kind::{row_major_strides, Contiguous, Kind, StrideArray};

/// An N-dimensional view over a linear backing store, parameterized by
/// cursor type `C`, rank `N`, and [`Kind`] `K`.
///
/// `Slice` is a value type: constructing one borrows nothing beyond what
/// the cursor `C` itself borrows.
#[derive(Clone, Copy)]
pub struct Slice<C, const N: usize, K: Kind = crate::ndslice::kind::Universal> {
    lengths: [usize; N],
    strides: K::Strides<N>,
    cursor: C,
}

impl<C: Cursor, const N: usize> Slice<C, N, Contiguous> {
    /// Build a Contiguous slice: `strides` are entirely implied by
    /// `lengths`, so none are stored.
    pub fn contiguous(lengths: [usize; N], cursor: C) -> Self {
        Slice { lengths, strides: crate::ndslice::kind::NoStrides, cursor }
    }
}

impl<C: Cursor, const N: usize, K: Kind> Slice<C, N, K> {
    pub(crate) fn from_raw(lengths: [usize; N], strides: K::Strides<N>, cursor: C) -> Self {
        Slice { lengths, strides, cursor }
    }

    pub fn lengths(&self) -> [usize; N] {
        self.lengths
    }

    /// The logical stride array for this kind: empty for Contiguous, `N-1`
    /// entries for Canonical, `N` entries for Universal.
    pub fn strides(&self) -> &[isize] {
        self.strides.as_slice()
    }

    /// The full `N`-length stride vector, with any implicit strides
    /// (row-major fill for Contiguous, innermost `1` for Canonical) made
    /// explicit. Used internally by every topology operation that needs to
    /// reason about strides regardless of kind.
    pub fn full_strides(&self) -> [isize; N] {
        self.strides.to_full(&self.lengths)
    }

    /// Total element count. `0` if any dimension is `0`.
    pub fn len(&self) -> usize {
        self.lengths.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.iter().any(|&l| l == 0)
    }

    pub fn rank(&self) -> usize {
        N
    }

    fn flat_offset(&self, index: [usize; N]) -> isize {
        let strides = self.full_strides();
        let mut offset: isize = 0;
        for k in 0..N {
            debug_assert!(index[k] < self.lengths[k], "index {} out of range for dimension {k} (length {})", index[k], self.lengths[k]);
            offset += index[k] as isize * strides[k];
        }
        offset
    }

    /// Read the element at a full multi-index.
    ///
    /// # Panics
    /// In debug builds, if any `index[k] >= lengths[k]`. Precondition
    /// violations like this are checked in debug builds and elided in
    /// release builds.
    pub fn get(&self, index: [usize; N]) -> C::Item {
        let offset = self.flat_offset(index);
        unsafe { self.cursor.get(offset) }
    }

    pub(crate) fn cursor(&self) -> &C {
        &self.cursor
    }

    pub(crate) fn into_cursor(self) -> C {
        self.cursor
    }

    pub(crate) fn map_cursor<C2: Cursor>(self, f: impl FnOnce(C) -> C2) -> Slice<C2, N, K> {
        Slice { lengths: self.lengths, strides: self.strides, cursor: f(self.cursor) }
    }
}

impl<C: CursorMut, const N: usize, K: Kind> Slice<C, N, K> {
    /// Mutable access at a full multi-index; see [`Slice::get`] for the
    /// bounds-check discipline.
    pub fn get_mut(&mut self, index: [usize; N]) -> C::ItemMut {
        let offset = self.flat_offset(index);
        unsafe { self.cursor.get_mut(offset) }
    }
}

/// Build the row-major strides a Contiguous slice of these lengths would
/// have, exposed for callers that need to reason about a shape before a
/// `Slice` exists (e.g. during `reshape`).
pub fn implied_strides<const N: usize>(lengths: &[usize; N]) -> [isize; N] {
    row_major_strides(lengths)
}
