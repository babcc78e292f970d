//! Pure view-producing operations: reshape, transpose, pack/ipack/unpack,
//! diagonal/antidiagonal, blocks, windows, flattened, stride, retro,
//! drop_borders, by_dim/along_dim. None of these allocate; each returns a
//! new [`Slice`] sharing the input's backing store.
//!
//! A note on rank arithmetic: stable Rust has no way to compute `N - P` as
//! a const-generic expression (that needs the still-unstable
//! `generic_const_exprs`). Rather than reach for that nightly feature (the
//! way a from-scratch port of this design might), every operation that
//! changes rank takes the *output* rank as its own explicit const-generic
//! parameter and checks the arithmetic relationship at the point of call
//! (`debug_assert!`) — the same trade-off `ndarray` makes by keeping
//! `IxDyn` as a separate, dynamically-ranked dimension type rather than
//! computing ranks at the type level.

use std::array;

use crate::ndslice::error::{self, ShapeError};
use crate::ndslice::iterator::{Cursor, Packed, Pointer, Retro};
use crate::ndslice::kind::{row_major_strides, Contiguous, FullStrides, Kind, Universal};
use crate::ndslice::slice::Slice;

/// Reorders `lengths`/`strides` by a permutation of axis indices. Always
/// downgrades to [`Universal`]: an arbitrary permutation generally breaks
/// the innermost-stride-1 invariant that Canonical/Contiguous rely on.
pub fn transpose<C: Cursor, const N: usize, K: Kind>(
    slice: Slice<C, N, K>, perm: [usize; N],
) -> Slice<C, N, Universal> {
    debug_assert!(is_permutation(&perm), "transpose permutation must visit every axis exactly once");
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let mut new_lengths = [0usize; N];
    let mut new_strides = [0isize; N];
    for i in 0..N {
        new_lengths[i] = lengths[perm[i]];
        new_strides[i] = strides[perm[i]];
    }
    Slice::from_raw(new_lengths, FullStrides(new_strides), slice.into_cursor())
}

fn is_permutation<const N: usize>(perm: &[usize; N]) -> bool {
    let mut seen = [false; N];
    for &p in perm {
        if p >= N || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

fn is_row_major<const N: usize>(lengths: &[usize; N], strides: &[isize; N]) -> bool {
    *strides == row_major_strides(lengths)
}

/// `reshape(lengths)`: builds a slice with a possibly different rank `M`,
/// inferring at most one `-1` entry. Succeeds unconditionally for a
/// row-major-contiguous source (whatever its static `Kind`); otherwise (a
/// genuinely strided Universal slice) fails with
/// [`ErrorKind::Incompatible`](crate::ndslice::error::ErrorKind::Incompatible).
pub fn reshape<C: Cursor, const N: usize, const M: usize, K: Kind>(
    slice: Slice<C, N, K>, new_lengths: [isize; M],
) -> Result<Slice<C, M, Contiguous>, ShapeError> {
    if slice.is_empty() {
        return Err(error::empty());
    }
    let total = slice.len();
    let resolved = resolve_lengths(new_lengths, total)?;

    let lengths = slice.lengths();
    let strides = slice.full_strides();
    // Contiguous/Canonical always succeed regardless of their actual stride
    // pattern; only a genuinely Universal source can fail this check, since
    // it's the only kind without a structural guarantee the strides are
    // already row-major.
    if !K::INNERMOST_UNIT_STRIDE && !is_row_major(&lengths, &strides) {
        return Err(error::incompatible());
    }

    let resolved_total: usize = resolved.iter().product();
    if resolved_total != total {
        return Err(error::total_mismatch());
    }

    Ok(Slice::contiguous(resolved, slice.into_cursor()))
}

fn resolve_lengths<const M: usize>(raw: [isize; M], total: usize) -> Result<[usize; M], ShapeError> {
    let mut infer_at = None;
    let mut known_product: usize = 1;
    for (i, &v) in raw.iter().enumerate() {
        if v == -1 {
            if infer_at.is_some() {
                return Err(error::total_mismatch());
            }
            infer_at = Some(i);
        } else if v < 0 {
            return Err(error::total_mismatch());
        } else {
            known_product = known_product.saturating_mul(v as usize);
        }
    }
    let mut out = [0usize; M];
    for (i, &v) in raw.iter().enumerate() {
        out[i] = if v == -1 { 0 } else { v as usize };
    }
    if let Some(i) = infer_at {
        if known_product == 0 || total % known_product != 0 {
            return Err(error::total_mismatch());
        }
        out[i] = total / known_product;
    }
    Ok(out)
}

/// 1-d slice with length `min(lengths)` and (logical) stride equal to the
/// sum of the original strides. The underlying cursor is untouched — only
/// the `Slice`'s own stride bookkeeping changes, since `Slice` already
/// separates "how to map an index to an offset" from "how to read an
/// offset".
pub fn diagonal<C: Cursor, const N: usize, K: Kind>(slice: Slice<C, N, K>) -> Slice<C, 1, Universal> {
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let len = lengths.iter().copied().min().unwrap_or(0);
    let step: isize = strides.iter().sum();
    Slice::from_raw([len], FullStrides([step]), slice.into_cursor())
}

/// Only defined for `N == 2`: the diagonal of the matrix reversed along
/// its second axis.
pub fn antidiagonal<C: Cursor, K: Kind>(slice: Slice<C, 2, K>) -> Slice<C, 1, Universal> {
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let len = lengths[0].min(lengths[1]);
    let step = strides[0] - strides[1];
    let mut cursor = slice.into_cursor();
    if lengths[1] > 0 {
        cursor.advance(strides[1] * (lengths[1] as isize - 1));
    }
    Slice::from_raw([len], FullStrides([step]), cursor)
}

/// Removes one element from both ends along every dimension.
pub fn drop_borders<C: Cursor, const N: usize, K: Kind>(slice: Slice<C, N, K>) -> Slice<C, N, Universal> {
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let mut new_lengths = [0usize; N];
    let mut offset: isize = 0;
    for i in 0..N {
        new_lengths[i] = lengths[i].saturating_sub(2);
        offset += strides[i];
    }
    let mut cursor = slice.into_cursor();
    cursor.advance(offset);
    Slice::from_raw(new_lengths, FullStrides(strides), cursor)
}

/// Composes a stride multiplier on a 1-d slice: element `k` of the result
/// is element `k * factor` of the source. `factor` may be negative.
pub fn stride<C: Cursor, K: Kind>(slice: Slice<C, 1, K>, factor: isize) -> Slice<C, 1, Universal> {
    debug_assert_ne!(factor, 0, "stride factor must be nonzero");
    let lengths = slice.lengths();
    let abs_factor = factor.unsigned_abs() as usize;
    let new_len = (lengths[0] + abs_factor - 1) / abs_factor;
    let step = slice.full_strides()[0] * factor;
    Slice::from_raw([new_len], FullStrides([step]), slice.into_cursor())
}

/// Reverses iteration along every dimension: advances the cursor to the
/// last element, then negates every stride. `s.retro().retro()` does not
/// collapse to the same cursor *type* (Rust has no stable way to
/// specialize a function over "is this cursor already a `Retro`"), but it
/// reads back identical values to `s`, which is the property actually
/// tested below.
pub fn retro<C: Cursor, const N: usize, K: Kind>(slice: Slice<C, N, K>) -> Slice<Retro<C>, N, Universal> {
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let mut offset: isize = 0;
    for i in 0..N {
        if lengths[i] > 0 {
            offset += strides[i] * (lengths[i] as isize - 1);
        }
    }
    let mut cursor = slice.into_cursor();
    cursor.advance(offset);
    let negated: [isize; N] = array::from_fn(|i| -strides[i]);
    Slice::from_raw(lengths, FullStrides(negated), Retro::new(cursor))
}

/// A [`Cursor`] over outer block/window positions of an `N`-d pointer
/// slice: indexing it by flat outer position decomposes that position into
/// a multi-index and returns the [`Pointer`] to the corresponding inner
/// block's first element. Shared by `blocks`, `windows`, `pack` and
/// `ipack` — each differs only in the shape handed to the `Packed` closure
/// that wraps this cursor.
struct OuterPointer<'a, T, const N: usize> {
    ptr: Pointer<'a, T>,
    outer_strides: [isize; N],
    flat_strides: [isize; N],
    pos: isize,
}

// Written by hand rather than `#[derive(Clone, Copy)]`: a derived impl
// would add a spurious `T: Copy` bound (derive looks at the struct's
// generic parameters, not at what the fields actually need), but `T`
// never appears outside the always-`Copy` `Pointer<'a, T>` — the same
// reasoning `Pointer` itself documents.
impl<'a, T, const N: usize> Clone for OuterPointer<'a, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T, const N: usize> Copy for OuterPointer<'a, T, N> {}

impl<'a, T, const N: usize> Cursor for OuterPointer<'a, T, N> {
    type Item = Pointer<'a, T>;

    unsafe fn get(&self, k: isize) -> Pointer<'a, T> {
        let flat = self.pos + k;
        let mut rem = flat;
        let mut offset: isize = 0;
        for i in 0..N {
            let stride = self.flat_strides[i];
            let coord = if stride == 0 { 0 } else { rem / stride };
            if stride != 0 {
                rem %= stride;
            }
            offset += coord * self.outer_strides[i];
        }
        let mut ptr = self.ptr;
        ptr.advance(offset);
        ptr
    }

    fn advance(&mut self, k: isize) {
        self.pos += k;
    }
}

/// Non-overlapping tiling. Outer lengths are `lengths[i] / rl[i]`; the
/// outer cursor's step along axis `i` is `strides[i] * rl[i]`. Each read of
/// the outer slice synthesizes a fresh inner `Slice` of shape `rl`.
pub fn blocks<'a, T, const N: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>, rl: [usize; N],
) -> Slice<impl Cursor<Item = Slice<Pointer<'a, T>, N, Universal>> + Copy, N, Universal> {
    let lengths = slice.lengths();
    let source_strides = slice.full_strides();
    let outer_lengths: [usize; N] = array::from_fn(|i| if rl[i] == 0 { 0 } else { lengths[i] / rl[i] });
    let outer_strides: [isize; N] = array::from_fn(|i| source_strides[i] * rl[i] as isize);
    tile(slice, rl, outer_lengths, outer_strides, source_strides)
}

/// Sliding overlapping blocks. Outer lengths are
/// `max(lengths[i] - rl[i] + 1, 0)`; the outer cursor's step matches the
/// source strides exactly (windows overlap by construction).
pub fn windows<'a, T, const N: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>, rl: [usize; N],
) -> Slice<impl Cursor<Item = Slice<Pointer<'a, T>, N, Universal>> + Copy, N, Universal> {
    let lengths = slice.lengths();
    let source_strides = slice.full_strides();
    let outer_lengths: [usize; N] = array::from_fn(|i| (lengths[i] + 1).saturating_sub(rl[i]));
    tile(slice, rl, outer_lengths, source_strides, source_strides)
}

fn tile<'a, T, const N: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>, rl: [usize; N], outer_lengths: [usize; N], outer_strides: [isize; N],
    inner_strides: [isize; N],
) -> Slice<impl Cursor<Item = Slice<Pointer<'a, T>, N, Universal>> + Copy, N, Universal> {
    let flat_strides = row_major_strides(&outer_lengths);
    let outer = OuterPointer { ptr: *slice.cursor(), outer_strides, flat_strides, pos: 0 };
    let packed =
        Packed::new(outer, move |ptr: Pointer<'a, T>| Slice::from_raw(rl, FullStrides(inner_strides), ptr));
    Slice::from_raw(outer_lengths, FullStrides(row_major_strides(&outer_lengths)), packed)
}

/// A 1-d view over the same elements in row-major order, via a composite
/// cursor carrying a per-dimension position vector. Spec.md 4.2 notes this
/// is "only meaningful when not already Contiguous"; it is still correct
/// (if wasteful) to call on a Contiguous slice.
pub fn flattened<C: Cursor, const N: usize, K: Kind>(
    slice: Slice<C, N, K>,
) -> Slice<FlattenedCursor<C, N>, 1, Universal> {
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    let total = lengths.iter().product();
    let flat_strides = row_major_strides(&lengths);
    let cursor = FlattenedCursor { base: slice.into_cursor(), strides, flat_strides, pos: 0 };
    Slice::from_raw([total], FullStrides([1]), cursor)
}

#[derive(Clone, Copy)]
pub struct FlattenedCursor<C, const N: usize> {
    base: C,
    strides: [isize; N],
    flat_strides: [isize; N],
    pos: isize,
}

impl<C: Cursor, const N: usize> FlattenedCursor<C, N> {
    /// Builds a cursor that reads `base` through `strides` given a flat,
    /// row-major position decomposed via `flat_strides`. Used directly by
    /// `lazy::zip` to give two differently-strided operands a common flat
    /// addressing scheme, not just by `flattened` above.
    pub(crate) fn new(base: C, strides: [isize; N], flat_strides: [isize; N]) -> Self {
        FlattenedCursor { base, strides, flat_strides, pos: 0 }
    }

    pub(crate) fn into_base_and_strides(self) -> (C, [isize; N]) {
        (self.base, self.strides)
    }
}

impl<C: Cursor, const N: usize> Cursor for FlattenedCursor<C, N> {
    type Item = C::Item;

    unsafe fn get(&self, k: isize) -> Self::Item {
        let flat = self.pos + k;
        let mut rem = flat;
        let mut offset: isize = 0;
        for i in 0..N {
            let stride = self.flat_strides[i];
            let coord = if stride == 0 { 0 } else { rem / stride };
            if stride != 0 {
                rem %= stride;
            }
            offset += coord * self.strides[i];
        }
        self.base.get(offset)
    }

    fn advance(&mut self, k: isize) {
        self.pos += k;
    }
}

/// `pack<P>`: fixes the last `P` dimensions as the inner element shape.
/// `OUT` must equal `N - P`; checked with `debug_assert!` since stable
/// Rust cannot express that relationship in the type signature itself.
pub fn pack<'a, T, const N: usize, const OUT: usize, const P: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>,
) -> Slice<impl Cursor<Item = Slice<Pointer<'a, T>, P, Universal>> + Copy, OUT, Universal> {
    debug_assert_eq!(OUT + P, N, "pack<P>: OUT must equal N - P");
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    pack_at(slice, &lengths[..OUT], &strides[..OUT], &lengths[OUT..], &strides[OUT..])
}

/// `ipack<P>`: dual of `pack` — fixes the *first* `P` dimensions as the
/// outer shape, and the remaining `N - P` as the (per-cell) inner shape.
pub fn ipack<'a, T, const N: usize, const P: usize, const OUT: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>,
) -> Slice<impl Cursor<Item = Slice<Pointer<'a, T>, OUT, Universal>> + Copy, P, Universal> {
    debug_assert_eq!(P + OUT, N, "ipack<P>: OUT must equal N - P");
    let lengths = slice.lengths();
    let strides = slice.full_strides();
    pack_at(slice, &lengths[..P], &strides[..P], &lengths[P..], &strides[P..])
}

/// Builds the inner cells as [`Universal`] rather than [`Canonical`]: the
/// inner shape's own innermost stride is whatever the source slice's
/// innermost packed dimension actually is, which is only ever `1` when
/// that dimension happened to already be contiguous in the source. Forcing
/// it to `1` unconditionally (as an earlier version of this function did)
/// silently corrupted every cell read whenever the packed dimensions
/// weren't already unit-stride — e.g. packing a non-innermost axis after a
/// `transpose`. Storing the real stride is the only representation that's
/// correct for an arbitrary source `Kind`.
fn pack_at<'a, T, const N: usize, const OUTER: usize, const INNER: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>, outer_lengths_s: &[usize], outer_strides_s: &[isize],
    inner_lengths_s: &[usize], inner_strides_s: &[isize],
) -> Slice<impl Cursor<Item = Slice<Pointer<'a, T>, INNER, Universal>> + Copy, OUTER, Universal> {
    let outer_lengths: [usize; OUTER] = array::from_fn(|i| outer_lengths_s[i]);
    let outer_strides: [isize; OUTER] = array::from_fn(|i| outer_strides_s[i]);
    let inner_lengths: [usize; INNER] = array::from_fn(|i| inner_lengths_s[i]);
    let inner_strides: [isize; INNER] = array::from_fn(|i| inner_strides_s[i]);

    let flat_strides = row_major_strides(&outer_lengths);
    let outer = OuterPointer { ptr: *slice.cursor(), outer_strides, flat_strides, pos: 0 };
    let packed = Packed::new(outer, move |ptr: Pointer<'a, T>| {
        Slice::from_raw(inner_lengths, FullStrides(inner_strides), ptr)
    });
    Slice::from_raw(outer_lengths, FullStrides(outer_strides), packed)
}

/// `unpack`: merges a packed slice's outer shape and its per-cell inner
/// [`Canonical`] shape back into one `N = OUTER + INNER` slice sharing a
/// single flat stride vector. Inverse of [`pack`]/[`ipack`].
///
/// Always downgrades to [`Universal`], rather than trying to compute the
/// tightest kind the recombined outer/inner layers could support: the
/// outer layer handed to `unpack` is itself already Universal (`pack`/
/// `ipack` downgrade their
/// outer shape on the way out), and recombining an arbitrary outer
/// stride layer with an inner Canonical one does not in general produce
/// Contiguous or Canonical strides. This is the same conservative call
/// `transpose` already makes.
///
/// Precondition: `slice` must be non-empty (an inner cell is read to
/// recover the per-cell shape and strides).
pub fn unpack<'a, T, C, OK, IK, const OUTER: usize, const INNER: usize, const N: usize>(
    slice: Slice<C, OUTER, OK>,
) -> Slice<Pointer<'a, T>, N, Universal>
where
    C: Cursor<Item = Slice<Pointer<'a, T>, INNER, IK>>,
    OK: Kind,
    IK: Kind,
{
    debug_assert_eq!(OUTER + INNER, N, "unpack: N must equal OUTER + INNER");
    debug_assert!(!slice.is_empty(), "unpack requires a non-empty outer shape to probe an inner cell");

    let outer_lengths = slice.lengths();
    let outer_strides = slice.full_strides();

    let inner_probe = slice.get([0usize; OUTER]);
    let inner_lengths = inner_probe.lengths();
    let inner_strides = inner_probe.full_strides();
    let base_cursor = *inner_probe.cursor();

    let mut lengths = [0usize; N];
    let mut strides = [0isize; N];
    lengths[..OUTER].copy_from_slice(&outer_lengths);
    strides[..OUTER].copy_from_slice(&outer_strides);
    lengths[OUTER..].copy_from_slice(&inner_lengths);
    strides[OUTER..].copy_from_slice(&inner_strides);

    Slice::from_raw(lengths, FullStrides(strides), base_cursor)
}

/// `by_dim_1`: the outer axis is exactly `dim` (this crate's 1-arity
/// stand-in for a variadic `by_dim<Dims...>`, matching the fixed-arity
/// approach used for `Cartesian`/`Kronecker`/`Zip`). Built as
/// `transpose(dim ++ rest); ipack<1>`.
pub fn by_dim_1<'a, T, const N: usize, const REST: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>, dim: usize,
) -> Result<Slice<impl Cursor<Item = Slice<Pointer<'a, T>, REST, Universal>> + Copy, 1, Universal>, ShapeError> {
    debug_assert_eq!(REST + 1, N);
    if dim >= N {
        return Err(error::bad_dim());
    }
    let mut perm = [0usize; N];
    perm[0] = dim;
    let mut j = 1;
    for i in 0..N {
        if i != dim {
            perm[j] = i;
            j += 1;
        }
    }
    let transposed = transpose(slice, perm);
    Ok(ipack::<'a, T, N, 1, REST, Universal>(transposed))
}

/// `along_dim_1`: dual of `by_dim_1` — the outer axes are every axis
/// *except* `dim`; the element slice spans `dim` alone. Conceptually
/// `along_dim(dim) = by_dim(dim) then evert_pack`; implemented directly
/// here via `transpose(rest ++ dim); pack<1>` rather than through a
/// standalone `evert_pack` primitive, since evert's only use in this crate
/// is exactly this duality.
pub fn along_dim_1<'a, T, const N: usize, const REST: usize, K: Kind>(
    slice: Slice<Pointer<'a, T>, N, K>, dim: usize,
) -> Result<Slice<impl Cursor<Item = Slice<Pointer<'a, T>, 1, Universal>> + Copy, REST, Universal>, ShapeError> {
    debug_assert_eq!(REST + 1, N);
    if dim >= N {
        return Err(error::bad_dim());
    }
    let mut perm = [0usize; N];
    let mut j = 0;
    for i in 0..N {
        if i != dim {
            perm[j] = i;
            j += 1;
        }
    }
    perm[REST] = dim;
    let transposed = transpose(slice, perm);
    Ok(pack::<'a, T, N, REST, 1, Universal>(transposed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndslice::iterator::Pointer;

    fn contiguous2x3(data: &[i32]) -> Slice<Pointer<'_, i32>, 2, Contiguous> {
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        Slice::contiguous([2, 3], cursor)
    }

    #[test]
    fn diagonal_of_3x2_iota_matches_spec_example() {
        // iota(3,2).diagonal == [0, 3]
        let data = [0i32, 1, 2, 3, 4, 5];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([3, 2], cursor);
        let diag = diagonal(slice);
        assert_eq!(diag.lengths(), [2]);
        assert_eq!(*diag.get([0]), 0);
        assert_eq!(*diag.get([1]), 3);
    }

    #[test]
    fn antidiagonal_of_2x3_iota_matches_spec_example() {
        // iota(2,3).antidiagonal == [1, 3]
        let data = [0i32, 1, 2, 3, 4, 5];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([2, 3], cursor);
        let anti = antidiagonal(slice);
        assert_eq!(anti.lengths(), [2]);
        assert_eq!(*anti.get([0]), 1);
        assert_eq!(*anti.get([1]), 3);
    }

    #[test]
    fn windows_of_5_has_length_3_and_matches_spec_example() {
        // iota(5).windows(3) has length 3; element at index 2 equals [2,3,4]
        let data = [0i32, 1, 2, 3, 4];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([5], cursor);
        let windowed = windows(slice, [3]);
        assert_eq!(windowed.lengths(), [3]);
        let w2 = windowed.get([2]);
        assert_eq!(w2.lengths(), [3]);
        assert_eq!(*w2.get([0]), 2);
        assert_eq!(*w2.get([1]), 3);
        assert_eq!(*w2.get([2]), 4);
    }

    #[test]
    fn blocks_of_2x3_in_1x3_tiles_has_two_disjoint_rows() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let blocked = blocks(slice, [1, 3]);
        assert_eq!(blocked.lengths(), [2, 1]);
        let b0 = blocked.get([0, 0]);
        let b1 = blocked.get([1, 0]);
        assert_eq!(*b0.get([0, 0]), 0);
        assert_eq!(*b0.get([0, 2]), 2);
        assert_eq!(*b1.get([0, 0]), 3);
    }

    #[test]
    fn stride_of_flattened_4x6_iota_matches_spec_example() {
        // iota(4,6).stride(2) == [[0,2,4],[12,14,16]]
        let mut data = [0i32; 24];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = i as i32;
        }
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([4, 6], cursor);
        let flat = flattened(slice);
        let strided = stride(flat, 2);
        let expect = [0, 2, 4, 12, 14, 16];
        for (i, &e) in expect.iter().enumerate() {
            assert_eq!(*strided.get([i]), e);
        }
    }

    #[test]
    fn transpose_swaps_lengths_and_strides() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let t = transpose(slice, [1, 0]);
        assert_eq!(t.lengths(), [3, 2]);
        assert_eq!(*t.get([0, 0]), 0);
        assert_eq!(*t.get([2, 1]), 5);
    }

    #[test]
    fn reshape_of_contiguous_slice_iterates_same_row_major_order() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let reshaped = reshape(slice, [6]).unwrap();
        for i in 0..6 {
            assert_eq!(*reshaped.get([i]), i as i32);
        }
    }

    #[test]
    fn reshape_rejects_mismatched_element_count() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let err = reshape(slice, [4]).unwrap_err();
        assert_eq!(err.kind(), crate::ndslice::error::ErrorKind::Total);
    }

    #[test]
    fn reshape_infers_a_single_negative_one() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let reshaped = reshape(slice, [-1, 2]).unwrap();
        assert_eq!(reshaped.lengths(), [3, 2]);
    }

    #[test]
    fn pack_last_dim_yields_rows_as_inner_slices() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let packed = pack::<_, 2, 1, 1, _>(slice);
        assert_eq!(packed.lengths(), [2]);
        let row0 = packed.get([0]);
        assert_eq!(row0.lengths(), [3]);
        assert_eq!(*row0.get([0]), 0);
        assert_eq!(*row0.get([2]), 2);
    }

    #[test]
    fn unpack_undoes_pack_up_to_kind_downgrade() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let packed = pack::<_, 2, 1, 1, _>(slice);
        let unpacked = unpack::<i32, _, _, _, 1, 1, 2>(packed);
        assert_eq!(unpacked.lengths(), [2, 3]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(*unpacked.get([i, j]), (i * 3 + j) as i32);
            }
        }
    }

    #[test]
    fn ipack_first_dim_yields_rows_as_inner_slices() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let packed = ipack::<_, 2, 1, 1, _>(slice);
        assert_eq!(packed.lengths(), [2]);
        let row1 = packed.get([1]);
        assert_eq!(*row1.get([0]), 3);
    }

    #[test]
    fn along_dim_of_the_non_innermost_axis_reads_the_true_stride() {
        // along_dim_1(dim=0) over a 2x3 row-major slice exposes column j as
        // [data[j], data[3+j]]; the second axis's real stride is 3, not 1.
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let along_dim = along_dim_1::<_, 2, 1, _>(slice, 0).unwrap();
        for j in 0..3 {
            let col = along_dim.get([j]);
            assert_eq!(*col.get([0]), data[j]);
            assert_eq!(*col.get([1]), data[3 + j]);
        }
    }

    #[test]
    fn along_dim_1_rejects_an_out_of_range_dim() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let err = along_dim_1::<_, 2, 1, _>(slice, 2).unwrap_err();
        assert_eq!(err.kind(), crate::ndslice::error::ErrorKind::DuplicateOrOutOfRangeDim);
    }

    #[test]
    fn by_dim_and_along_dim_agree_on_total_element_visitation() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let slice = contiguous2x3(&data);
        let by_dim = by_dim_1::<_, 2, 1, _>(slice, 0).unwrap();
        let mut by_dim_sum = 0i64;
        for i in 0..2 {
            let row = by_dim.get([i]);
            by_dim_sum += *row.get([0]) as i64 + *row.get([1]) as i64 + *row.get([2]) as i64;
        }

        let slice2 = contiguous2x3(&data);
        let along_dim = along_dim_1::<_, 2, 1, _>(slice2, 1).unwrap();
        let mut along_dim_sum = 0i64;
        for j in 0..3 {
            let col = along_dim.get([j]);
            along_dim_sum += *col.get([0]) as i64;
        }
        assert_eq!(by_dim_sum, (0 + 1 + 2 + 3 + 4 + 5) as i64);
        assert_eq!(along_dim_sum, by_dim_sum);
    }

    #[test]
    fn retro_reads_reversed_order() {
        let data = [0i32, 1, 2, 3];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([4], cursor);
        let reversed = retro(slice);
        for i in 0..4 {
            assert_eq!(*reversed.get([i]), 3 - i as i32);
        }
    }

    #[test]
    fn double_retro_reads_match_the_original() {
        let data = [0i32, 1, 2, 3];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([4], cursor);
        let cursor2 = unsafe { Pointer::new(data.as_ptr()) };
        let original = Slice::contiguous([4], cursor2);
        let twice = retro(retro(slice));
        for i in 0..4 {
            assert_eq!(*twice.get([i]), *original.get([i]));
        }
    }

    #[test]
    fn drop_borders_removes_one_element_from_each_end() {
        let data = [0i32, 1, 2, 3, 4];
        let cursor = unsafe { Pointer::new(data.as_ptr()) };
        let slice = Slice::contiguous([5], cursor);
        let dropped = drop_borders(slice);
        assert_eq!(dropped.lengths(), [3]);
        assert_eq!(*dropped.get([0]), 1);
        assert_eq!(*dropped.get([2]), 3);
    }
}
