//! The Contiguous / Canonical / Universal kind lattice.
//!
//! A [`Slice`](crate::ndslice::Slice) carries its stride representation as a
//! *type*, not a runtime tag, so that the size and layout of the stride
//! storage is known at compile time and downgrades/upgrades between kinds
//! are zero-cost where the invariants allow it.
//!
//! `Contiguous` carries no stride storage at all (row-major strides are
//! implied by `lengths`). `Canonical` carries the outer `N - 1` strides and
//! relies on the invariant that the innermost stride is always `1`.
//! `Universal` carries all `N` strides and enforces nothing.
//!
//! Because const generics can't yet express an array of length `N - 1`
//! directly on stable Rust, `Canonical`'s storage is a full `[isize; N]`
//! whose last slot is a fixed sentinel (`1`, never read as meaningful); the
//! *logical* stride slice exposed to callers is `&strides[..N - 1]`, the
//! N-1 strides that actually vary.

use std::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// A stride representation. Implemented only by [`Contiguous`], [`Canonical`]
/// and [`Universal`]; the trait is sealed so no other kind can be added.
pub trait Kind: private::Sealed + Copy + Clone + Debug + Default + 'static {
    /// The stride storage this kind carries for a slice of rank `N`.
    type Strides<const N: usize>: StrideArray<N>;

    /// Whether this kind stores any strides at all.
    const HAS_STRIDES: bool;

    /// Whether the innermost stride is guaranteed to be `1` by invariant
    /// (true for `Contiguous` and `Canonical`).
    const INNERMOST_UNIT_STRIDE: bool;
}

/// Per-rank stride storage for a given [`Kind`].
///
/// `as_slice` returns exactly the logically meaningful strides (empty for
/// `Contiguous`, `N - 1` for `Canonical`, `N` for `Universal`).
pub trait StrideArray<const N: usize>: Copy + Clone + Debug {
    fn as_slice(&self) -> &[isize];

    /// Build the *full* N-length stride vector, filling in any implicit
    /// strides (the Contiguous row-major strides, or Canonical's implicit
    /// innermost `1`) given the slice's lengths.
    fn to_full(&self, lengths: &[usize; N]) -> [isize; N];
}

/// No stride storage: strides are entirely implied by `lengths` (row-major).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contiguous;

/// The outer `N - 1` strides are stored; the innermost stride is always `1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Canonical;

/// All `N` strides are stored; no relationship between them is assumed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Universal;

impl private::Sealed for Contiguous {}
impl private::Sealed for Canonical {}
impl private::Sealed for Universal {}

/// Zero-sized stride storage for [`Contiguous`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoStrides;

impl<const N: usize> StrideArray<N> for NoStrides {
    fn as_slice(&self) -> &[isize] {
        &[]
    }

    fn to_full(&self, lengths: &[usize; N]) -> [isize; N] {
        row_major_strides(lengths)
    }
}

/// Storage for [`Canonical`]: `N` slots, only the first `N - 1` meaningful.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OuterStrides<const N: usize>(pub [isize; N]);

impl<const N: usize> Default for OuterStrides<N> {
    fn default() -> Self {
        OuterStrides([0; N])
    }
}

impl<const N: usize> StrideArray<N> for OuterStrides<N> {
    fn as_slice(&self) -> &[isize] {
        if N == 0 {
            &[]
        } else {
            &self.0[..N - 1]
        }
    }

    fn to_full(&self, _lengths: &[usize; N]) -> [isize; N] {
        let mut full = self.0;
        if N > 0 {
            full[N - 1] = 1;
        }
        full
    }
}

/// Storage for [`Universal`]: all `N` slots meaningful.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FullStrides<const N: usize>(pub [isize; N]);

impl<const N: usize> Default for FullStrides<N> {
    fn default() -> Self {
        FullStrides([0; N])
    }
}

impl<const N: usize> StrideArray<N> for FullStrides<N> {
    fn as_slice(&self) -> &[isize] {
        &self.0
    }

    fn to_full(&self, _lengths: &[usize; N]) -> [isize; N] {
        self.0
    }
}

impl Kind for Contiguous {
    type Strides<const N: usize> = NoStrides;
    const HAS_STRIDES: bool = false;
    const INNERMOST_UNIT_STRIDE: bool = true;
}

impl Kind for Canonical {
    type Strides<const N: usize> = OuterStrides<N>;
    const HAS_STRIDES: bool = true;
    const INNERMOST_UNIT_STRIDE: bool = true;
}

impl Kind for Universal {
    type Strides<const N: usize> = FullStrides<N>;
    const HAS_STRIDES: bool = true;
    const INNERMOST_UNIT_STRIDE: bool = false;
}

/// Row-major strides implied by `lengths` (innermost stride `1`).
pub fn row_major_strides<const N: usize>(lengths: &[usize; N]) -> [isize; N] {
    let mut strides = [1isize; N];
    let mut acc: isize = 1;
    let mut i = N;
    while i > 0 {
        i -= 1;
        strides[i] = acc;
        acc = acc.saturating_mul(lengths[i] as isize);
    }
    strides
}

/// A marker for a kind that can be reached from `From` by downgrading,
/// e.g. `Contiguous -> Canonical -> Universal`. Downgrades never fail and
/// never change the element count or traversal order.
pub trait DowngradeTo<To: Kind>: Kind {}

impl DowngradeTo<Contiguous> for Contiguous {}
impl DowngradeTo<Canonical> for Contiguous {}
impl DowngradeTo<Universal> for Contiguous {}
impl DowngradeTo<Canonical> for Canonical {}
impl DowngradeTo<Universal> for Canonical {}
impl DowngradeTo<Universal> for Universal {}
