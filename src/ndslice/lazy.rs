//! Lazy transforms: `map`/`vmap`, `zip`/`unzip`, `cached`,
//! `slide`/`slide_along`/`pairwise`/`diff`, `with_neighbours_sum`, and the
//! bit- and byte-level views `bitwise`/`bitpack`/`bytegroup`. Everything
//! here composes cursors rather than copying data, with the one
//! unavoidable exception of `cached`, which needs a shared, mutable memo
//! table.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ndslice::error::{self, ShapeError};
use crate::ndslice::iterator::{Bit, Cursor, CursorMut, Map, Zip2, Zip3};
use crate::ndslice::kind::{row_major_strides, FullStrides, Kind, Universal};
use crate::ndslice::slice::Slice;
use crate::ndslice::topology::{self, windows, FlattenedCursor};

/// `map`: a purely lazy, read-only transform. `fun` is called on every
/// read; nothing is computed or stored up front.
pub fn map<C: Cursor, const N: usize, K: Kind, Fun, Out>(
    slice: Slice<C, N, K>, fun: Fun,
) -> Slice<Map<C, Fun>, N, K>
where
    Fun: Fn(C::Item) -> Out + Copy,
{
    slice.map_cursor(|cursor| Map::new(cursor, fun))
}

fn unflatten<const N: usize>(mut flat: usize, lengths: &[usize; N]) -> [usize; N] {
    let mut index = [0usize; N];
    for k in 0..N {
        let inner: usize = lengths[k + 1..].iter().product();
        if inner == 0 {
            index[k] = 0;
            continue;
        }
        index[k] = flat / inner;
        flat %= inner;
    }
    index
}

/// `vmap`: the in-place counterpart to `map` — visits every element and
/// lets `fun` mutate it through the slice's own storage, without building
/// any new view. Named for the `void`-returning visit, as opposed to
/// `map`'s value-returning lazy transform.
pub fn vmap<C: CursorMut, const N: usize, K: Kind, Fun>(slice: &mut Slice<C, N, K>, mut fun: Fun)
where
    Fun: FnMut(C::ItemMut),
{
    let lengths = slice.lengths();
    let total = slice.len();
    for flat in 0..total {
        let index = unflatten(flat, &lengths);
        fun(slice.get_mut(index));
    }
}

/// `zip`: pairs up two equal-shaped slices element-wise. Since the two
/// operands may have unrelated stride layouts, both are wrapped in a
/// [`FlattenedCursor`] keyed by a shared row-major flat position rather
/// than assumed to share one. Prefer [`zip_same_strides`] when the caller
/// already knows the strides match — it skips the per-read decomposition
/// this general form needs.
pub fn zip<A: Cursor, B: Cursor, const N: usize, KA: Kind, KB: Kind>(
    a: Slice<A, N, KA>, b: Slice<B, N, KB>,
) -> Result<Slice<Zip2<FlattenedCursor<A, N>, FlattenedCursor<B, N>>, N, Universal>, ShapeError> {
    if a.lengths() != b.lengths() {
        return Err(error::length_mismatch());
    }
    let lengths = a.lengths();
    let a_strides = a.full_strides();
    let b_strides = b.full_strides();
    let flat_strides = row_major_strides(&lengths);
    let ra = FlattenedCursor::new(a.into_cursor(), a_strides, flat_strides);
    let rb = FlattenedCursor::new(b.into_cursor(), b_strides, flat_strides);
    Ok(Slice::from_raw(lengths, FullStrides(flat_strides), Zip2::new(ra, rb)))
}

/// `zip`'s fast path: valid only when both operands already share an
/// identical stride layout, in which case a single flat offset is already
/// meaningful to both cursors directly — no reindexing cursor needed.
pub fn zip_same_strides<A: Cursor, B: Cursor, const N: usize, KA: Kind, KB: Kind>(
    a: Slice<A, N, KA>, b: Slice<B, N, KB>,
) -> Result<Slice<Zip2<A, B>, N, Universal>, ShapeError> {
    if a.lengths() != b.lengths() {
        return Err(error::length_mismatch());
    }
    let lengths = a.lengths();
    let strides = a.full_strides();
    debug_assert_eq!(strides, b.full_strides(), "zip_same_strides requires matching strides");
    Ok(Slice::from_raw(lengths, FullStrides(strides), Zip2::new(a.into_cursor(), b.into_cursor())))
}

/// `zip`'s 3-operand counterpart, for the common case of pairing three
/// equal-shaped slices (e.g. three color channels) without nesting two
/// calls to [`zip`] and unpacking a `((A, B), C)` tuple at every read.
pub fn zip3<A: Cursor, B: Cursor, C: Cursor, const N: usize, KA: Kind, KB: Kind, KC: Kind>(
    a: Slice<A, N, KA>, b: Slice<B, N, KB>, c: Slice<C, N, KC>,
) -> Result<Slice<Zip3<FlattenedCursor<A, N>, FlattenedCursor<B, N>, FlattenedCursor<C, N>>, N, Universal>, ShapeError> {
    if a.lengths() != b.lengths() || a.lengths() != c.lengths() {
        return Err(error::length_mismatch());
    }
    let lengths = a.lengths();
    let a_strides = a.full_strides();
    let b_strides = b.full_strides();
    let c_strides = c.full_strides();
    let flat_strides = row_major_strides(&lengths);
    let ra = FlattenedCursor::new(a.into_cursor(), a_strides, flat_strides);
    let rb = FlattenedCursor::new(b.into_cursor(), b_strides, flat_strides);
    let rc = FlattenedCursor::new(c.into_cursor(), c_strides, flat_strides);
    Ok(Slice::from_raw(lengths, FullStrides(flat_strides), Zip3::new(ra, rb, rc)))
}

/// Splits a [`zip`]-built slice back into its two operand slices.
pub fn unzip<A: Cursor, B: Cursor, const N: usize>(
    slice: Slice<Zip2<FlattenedCursor<A, N>, FlattenedCursor<B, N>>, N, Universal>,
) -> (Slice<A, N, Universal>, Slice<B, N, Universal>) {
    let lengths = slice.lengths();
    let (fa, fb) = slice.into_cursor().into_parts();
    let (a_cursor, a_strides) = fa.into_base_and_strides();
    let (b_cursor, b_strides) = fb.into_base_and_strides();
    (Slice::from_raw(lengths, FullStrides(a_strides), a_cursor), Slice::from_raw(lengths, FullStrides(b_strides), b_cursor))
}

/// A memoizing view over a `Slice`: reads that land on a previously
/// computed cell return the cached value; everything else is read through
/// `base` once and stored.
///
/// Unlike every other lazy transform here, `Cached` can't be expressed as
/// a plain `Cursor` — `Cursor: Copy`, but a shared memo table needs
/// interior-mutable, reference-counted storage (`Rc<RefCell<..>>`), which
/// is deliberately *not* `Copy` (a bitwise copy would silently fork the
/// cache instead of sharing it). So `Cached` is its own small view type
/// with a direct `get`, the same trade-off `Magic`'s non-`Copy` backing
/// `Vec` forced on `field::magic::MagicRef`.
pub struct Cached<C: Cursor, const N: usize>
where
    C::Item: Clone,
{
    base: C,
    lengths: [usize; N],
    strides: [isize; N],
    flat_strides: [isize; N],
    cache: Rc<RefCell<Vec<Option<C::Item>>>>,
}

impl<C: Cursor, const N: usize> Clone for Cached<C, N>
where
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Cached {
            base: self.base,
            lengths: self.lengths,
            strides: self.strides,
            flat_strides: self.flat_strides,
            cache: Rc::clone(&self.cache),
        }
    }
}

impl<C: Cursor, const N: usize> Cached<C, N>
where
    C::Item: Clone,
{
    pub fn lengths(&self) -> [usize; N] {
        self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.iter().product()
    }

    /// Read the element at `index`, computing and memoizing it on first
    /// access.
    pub fn get(&self, index: [usize; N]) -> C::Item {
        let mut flat = 0usize;
        for k in 0..N {
            debug_assert!(index[k] < self.lengths[k]);
            flat += index[k] * self.flat_strides[k] as usize;
        }
        if let Some(hit) = &self.cache.borrow()[flat] {
            return hit.clone();
        }
        let mut offset: isize = 0;
        for k in 0..N {
            offset += index[k] as isize * self.strides[k];
        }
        let value = unsafe { self.base.get(offset) };
        self.cache.borrow_mut()[flat] = Some(value.clone());
        value
    }

    /// Drops every memoized value, forcing the next read of each cell
    /// through `base` again.
    pub fn invalidate(&self) {
        for slot in self.cache.borrow_mut().iter_mut() {
            *slot = None;
        }
    }
}

/// Wraps `slice` in a [`Cached`] view, allocating its memo table
/// (`O(len)`, the one construction-time allocation this crate permits
/// outside of `Magic`).
pub fn cached<C: Cursor, const N: usize, K: Kind>(slice: Slice<C, N, K>) -> Cached<C, N>
where
    C::Item: Clone,
{
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let flat_strides = row_major_strides(&lengths);
    let len = lengths.iter().product();
    Cached { base: slice.into_cursor(), lengths, strides, flat_strides, cache: Rc::new(RefCell::new(vec![None; len])) }
}

/// `slide<P, fun>`: a `P`-shaped sliding-window reduction, built exactly
/// as `windows(P).map(fun)`.
pub fn slide<'a, T, const N: usize, K: Kind, Fun, Out>(
    slice: Slice<crate::ndslice::iterator::Pointer<'a, T>, N, K>, window_lengths: [usize; N], fun: Fun,
) -> Slice<impl Cursor<Item = Out> + Copy, N, Universal>
where
    Fun: Fn(Slice<crate::ndslice::iterator::Pointer<'a, T>, N, Universal>) -> Out + Copy,
{
    map(windows(slice, window_lengths), fun)
}

/// `slide_along_1<P, fun, dim>`: a single-axis sliding-window reduction —
/// every axis but `dim` keeps its full extent as the window size, so the
/// only overlap happens along `dim`.
pub fn slide_along_1<'a, T, const N: usize, K: Kind, Fun, Out>(
    slice: Slice<crate::ndslice::iterator::Pointer<'a, T>, N, K>, dim: usize, window_len: usize, fun: Fun,
) -> Slice<impl Cursor<Item = Out> + Copy, N, Universal>
where
    Fun: Fn(Slice<crate::ndslice::iterator::Pointer<'a, T>, N, Universal>) -> Out + Copy,
{
    let mut window_lengths = slice.lengths();
    window_lengths[dim] = window_len;
    slide(slice, window_lengths, fun)
}

/// `pairwise<fun, lag>`: applies `fun` to every `(lag + 1)`-run of
/// consecutive elements of a 1-d slice; equivalent to
/// `slide<lag + 1>(fun)`.
pub fn pairwise<'a, T, K: Kind, Fun, Out>(
    slice: Slice<crate::ndslice::iterator::Pointer<'a, T>, 1, K>, lag: usize, fun: Fun,
) -> Slice<impl Cursor<Item = Out> + Copy, 1, Universal>
where
    Fun: Fn(Slice<crate::ndslice::iterator::Pointer<'a, T>, 1, Universal>) -> Out + Copy,
{
    slide(slice, [lag + 1], fun)
}

/// `diff<lag>`: `pairwise` specialized to subtraction — `result[i] =
/// slice[i + lag] - slice[i]`.
pub fn diff<'a, T, K: Kind>(
    slice: Slice<crate::ndslice::iterator::Pointer<'a, T>, 1, K>, lag: usize,
) -> Slice<impl Cursor<Item = T> + Copy, 1, Universal>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    pairwise(slice, lag, move |window: Slice<crate::ndslice::iterator::Pointer<'a, T>, 1, Universal>| {
        *window.get([lag]) - *window.get([0])
    })
}

/// A cursor over an `N`-d pointer slice that, on each read, folds the
/// element together with the sum of its axis-aligned neighbours (the
/// elements at `coord[i] - 1` and `coord[i] + 1` along every axis,
/// wherever those are in range) through `fun`. Backs `withNeighboursSum`.
#[derive(Clone, Copy)]
struct NeighboursSum<'a, T, const N: usize, Fun> {
    ptr: crate::ndslice::iterator::Pointer<'a, T>,
    lengths: [usize; N],
    strides: [isize; N],
    flat_strides: [isize; N],
    pos: isize,
    fun: Fun,
}

impl<'a, T, const N: usize, Fun, Out> Cursor for NeighboursSum<'a, T, N, Fun>
where
    T: Copy + Default + std::ops::Add<Output = T>,
    Fun: Fn(T, T) -> Out + Copy,
{
    type Item = Out;

    unsafe fn get(&self, k: isize) -> Out {
        let flat = self.pos + k;
        let mut rem = flat;
        let mut coord = [0usize; N];
        let mut offset: isize = 0;
        for i in 0..N {
            let fs = self.flat_strides[i];
            let c = if fs == 0 { 0 } else { rem / fs };
            if fs != 0 {
                rem %= fs;
            }
            coord[i] = c;
            offset += c as isize * self.strides[i];
        }
        let mut center_ptr = self.ptr;
        center_ptr.advance(offset);
        let center = *center_ptr.get(0);

        let mut sum = T::default();
        for axis in 0..N {
            if coord[axis] > 0 {
                let mut p = self.ptr;
                p.advance(offset - self.strides[axis]);
                sum = sum + *p.get(0);
            }
            if coord[axis] + 1 < self.lengths[axis] {
                let mut p = self.ptr;
                p.advance(offset + self.strides[axis]);
                sum = sum + *p.get(0);
            }
        }
        (self.fun)(center, sum)
    }

    fn advance(&mut self, k: isize) {
        self.pos += k;
    }
}

/// `withNeighboursSum<fun>`: `result[index] = fun(slice[index], sum of
/// axis-aligned neighbours of index)`. Out-of-range neighbours (at the
/// border of the slice) simply don't contribute to the sum.
pub fn with_neighbours_sum<'a, T, const N: usize, K: Kind, Fun, Out>(
    slice: Slice<crate::ndslice::iterator::Pointer<'a, T>, N, K>, fun: Fun,
) -> Slice<impl Cursor<Item = Out> + Copy, N, Universal>
where
    T: Copy + Default + std::ops::Add<Output = T>,
    Fun: Fn(T, T) -> Out + Copy,
{
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let flat_strides = row_major_strides(&lengths);
    let ptr = *slice.cursor();
    let cursor = NeighboursSum { ptr, lengths, strides, flat_strides, pos: 0, fun };
    Slice::from_raw(lengths, FullStrides(strides), cursor)
}

/// `bitwise`: reinterprets an `N`-d slice of `u64` words as a flat 1-d
/// slice of individual bits, via [`Bit`] composed with [`topology::flattened`].
pub fn bitwise<C: Cursor<Item = u64>, const N: usize, K: Kind>(
    slice: Slice<C, N, K>,
) -> Slice<Bit<FlattenedCursor<C, N>>, 1, Universal> {
    let flat = topology::flattened(slice);
    let total = flat.len();
    let cursor = Bit::new(flat.into_cursor());
    Slice::from_raw([total * 64], FullStrides([1]), cursor)
}

/// A cursor grouping `K` consecutive bits of a bool cursor into a `u64`
/// (bit `0` of the group is the least significant). Backs `bitpack`.
#[derive(Clone, Copy)]
struct BitPack<C, const K: usize> {
    bits: C,
    pos: isize,
}

impl<C: Cursor<Item = bool>, const K: usize> Cursor for BitPack<C, K> {
    type Item = u64;

    unsafe fn get(&self, k: isize) -> u64 {
        let base = (self.pos + k) * K as isize;
        let mut value = 0u64;
        for i in 0..K {
            if self.bits.get(base + i as isize) {
                value |= 1 << i;
            }
        }
        value
    }

    fn advance(&mut self, k: isize) {
        self.pos += k;
    }
}

/// `bitpack<K>`: groups a 1-d bit slice into non-overlapping `K`-bit
/// values, the converse direction of `bitwise`.
pub fn bitpack<C: Cursor<Item = bool>, const K: usize, Kd: Kind>(
    slice: Slice<C, 1, Kd>,
) -> Slice<BitPack<C, K>, 1, Universal> {
    debug_assert!(K > 0 && K <= 64);
    let len = slice.lengths()[0] / K;
    let cursor = BitPack { bits: slice.into_cursor(), pos: 0 };
    Slice::from_raw([len], FullStrides([1]), cursor)
}

/// A fixed-width integer assembled from consecutive bytes of a `u8`
/// cursor. Implemented only for the unsigned integer widths `bytegroup`
/// is meaningful for; each implementation branches explicitly on host
/// endianness rather than relying on `from_ne_bytes` alone, since
/// byte-group reassembly is platform-sensitive.
pub trait ByteGroup: Copy {
    const WIDTH: usize;
    fn from_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_byte_group {
    ($t:ty) => {
        impl ByteGroup for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            fn from_bytes(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                if cfg!(target_endian = "big") {
                    <$t>::from_be_bytes(buf)
                } else {
                    <$t>::from_le_bytes(buf)
                }
            }
        }
    };
}

impl_byte_group!(u16);
impl_byte_group!(u32);
impl_byte_group!(u64);

#[derive(Clone, Copy)]
struct ByteGroupCursor<C, T> {
    bytes: C,
    pos: isize,
    _marker: std::marker::PhantomData<T>,
}

impl<C: Cursor<Item = u8>, T: ByteGroup> Cursor for ByteGroupCursor<C, T> {
    type Item = T;

    unsafe fn get(&self, k: isize) -> T {
        let base = (self.pos + k) * T::WIDTH as isize;
        let mut buf = [0u8; 8];
        for i in 0..T::WIDTH {
            buf[i] = self.bytes.get(base + i as isize);
        }
        T::from_bytes(&buf[..T::WIDTH])
    }

    fn advance(&mut self, k: isize) {
        self.pos += k;
    }
}

/// `bytegroup<T>`: groups consecutive bytes of a `u8` slice into
/// fixed-width values of `T`. The group width is just `T::WIDTH` —
/// callers pick it by choosing a concrete integer type (`u16`/`u32`/`u64`)
/// rather than passing a width separately.
pub fn bytegroup<C: Cursor<Item = u8>, T: ByteGroup, K: Kind>(slice: Slice<C, 1, K>) -> Slice<ByteGroupCursor<C, T>, 1, Universal> {
    let len = slice.lengths()[0] / T::WIDTH;
    let cursor = ByteGroupCursor { bytes: slice.into_cursor(), pos: 0, _marker: std::marker::PhantomData };
    Slice::from_raw([len], FullStrides([1]), cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndslice::iterator::Pointer;

    #[test]
    fn map_transforms_each_read_lazily() {
        let data = [1i32, 2, 3];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([3], cursor);
        let doubled = map(slice, |x: &i32| x * 2);
        assert_eq!(doubled.get([1]), 4);
    }

    #[test]
    fn vmap_mutates_every_element_in_place() {
        let mut data = [1i32, 2, 3];
        let cursor = unsafe { Pointer::new(data.as_mut_ptr() as *const i32) };
        let mut slice = Slice::contiguous([3], cursor);
        vmap(&mut slice, |x: &mut i32| *x *= 10);
        assert_eq!(data, [10, 20, 30]);
    }

    #[test]
    fn zip_pairs_two_slices_with_different_strides() {
        let a = [1i32, 2, 3, 4];
        let b = [10i32, 20];
        let ca = unsafe { Pointer::new(a.as_ptr()) };
        let cb = unsafe { Pointer::new(b.as_ptr()) };
        // reversed `a` (stride -1, offset at last element) vs row-major `b`
        let mut rev_cursor = ca;
        rev_cursor.advance(1);
        let sa = Slice::from_raw([2], FullStrides([-1]), rev_cursor);
        let sb = Slice::contiguous([2], cb);
        let zipped = zip(sa, sb).unwrap();
        assert_eq!(zipped.get([0]), (&2, &10));
        assert_eq!(zipped.get([1]), (&1, &20));
    }

    #[test]
    fn zip_rejects_mismatched_lengths() {
        let a = [1i32, 2, 3];
        let b = [10i32, 20];
        let ca = unsafe { Pointer::new(a.as_ptr()) };
        let cb = unsafe { Pointer::new(b.as_ptr()) };
        let sa = Slice::contiguous([3], ca);
        let sb = Slice::contiguous([2], cb);
        assert!(zip(sa, sb).is_err());
    }

    #[test]
    fn cached_memoizes_after_first_read() {
        let data = [1i32, 2, 3];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([3], cursor);
        let count = std::cell::Cell::new(0);
        let mapped = map(slice, |x: &i32| {
            count.set(count.get() + 1);
            *x * 2
        });
        let view = cached(mapped);
        assert_eq!(view.get([1]), 4);
        assert_eq!(view.get([1]), 4);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn slide_of_5_matches_windows_plus_map() {
        let data = [0i32, 1, 2, 3, 4];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([5], cursor);
        let sums = slide(slice, [3], |w: Slice<Pointer<i32>, 1, Universal>| {
            *w.get([0]) + *w.get([1]) + *w.get([2])
        });
        assert_eq!(sums.lengths(), [3]);
        assert_eq!(sums.get([0]), 0 + 1 + 2);
        assert_eq!(sums.get([2]), 2 + 3 + 4);
    }

    #[test]
    fn diff_with_lag_one_matches_successive_differences() {
        let data = [10i32, 13, 17, 22];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([4], cursor);
        let diffs = diff(slice, 1);
        assert_eq!(diffs.lengths(), [3]);
        assert_eq!(diffs.get([0]), 3);
        assert_eq!(diffs.get([1]), 4);
        assert_eq!(diffs.get([2]), 5);
    }

    #[test]
    fn with_neighbours_sum_ignores_out_of_range_neighbours() {
        let data = [1i32, 2, 3, 4];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([4], cursor);
        let result = with_neighbours_sum(slice, |center, sum| (center, sum));
        assert_eq!(result.get([0]), (1, 2));
        assert_eq!(result.get([1]), (2, 1 + 3));
        assert_eq!(result.get([3]), (4, 3));
    }

    #[test]
    fn bitwise_unpacks_two_words_into_128_bits() {
        let words = [0b1u64, 0b10u64];
        let cursor = unsafe { Pointer::new(words.as_ptr()) };
        let slice = Slice::contiguous([2], cursor);
        let bits = bitwise(slice);
        assert_eq!(bits.lengths(), [128]);
        assert!(bits.get([0]));
        assert!(!bits.get([1]));
        assert!(bits.get([65]));
    }

    #[test]
    fn bitpack_groups_bits_back_into_small_integers() {
        let bits = [true, false, true, true, false, false, false, false];
        let cursor = TestBoolCursor(&bits);
        let slice = Slice::contiguous([8], cursor);
        let packed = bitpack::<_, 4, _>(slice);
        assert_eq!(packed.lengths(), [2]);
        assert_eq!(packed.get([0]), 0b1101);
        assert_eq!(packed.get([1]), 0);
    }

    #[test]
    fn bytegroup_reassembles_native_endian_u32() {
        let value = 0x01020304u32;
        let bytes = value.to_ne_bytes();
        let cursor = unsafe { Pointer::new(bytes.as_ptr()) };
        let slice = Slice::contiguous([4], cursor);
        let grouped = bytegroup::<_, u32, _>(slice);
        assert_eq!(grouped.get([0]), value);
    }

    #[derive(Clone, Copy)]
    struct TestBoolCursor<'a>(&'a [bool]);
    impl<'a> Cursor for TestBoolCursor<'a> {
        type Item = bool;
        unsafe fn get(&self, k: isize) -> bool {
            self.0[k as usize]
        }
        fn advance(&mut self, _k: isize) {}
    }
}
