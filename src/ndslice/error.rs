//! Errors related to slice shape, reshape, and zip compatibility.
//!
//! A small struct wrapping a `#[non_exhaustive]` `ErrorKind`, rather than
//! one variant per call site.

use std::error::Error;
use std::fmt;

/// An error produced by a shape-changing operation (`reshape`, `zip`,
/// `pack`/`unpack`, `by_dim`/`along_dim`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeError {
    kind: ErrorKind,
}

impl ShapeError {
    pub(crate) fn from_kind(kind: ErrorKind) -> Self {
        ShapeError { kind }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Error category for a [`ShapeError`].
///
/// This enum is not exhaustive: new categories may be added without a major
/// version bump.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// `reshape` was called on an empty slice.
    Empty,
    /// `reshape`'s target length doesn't have the same element count as the
    /// source.
    Total,
    /// A Universal slice's stride pattern can't be expressed by the
    /// requested operation, e.g. `reshape` asked for a layout that isn't a
    /// union of contiguous runs, or `unpack` asked to merge two
    /// incompatible stride layers.
    Incompatible,
    /// `zip` was given slices with mismatched `lengths`.
    LengthMismatch,
    /// `by_dim`/`along_dim` was given a dimension index `>= N`.
    DuplicateOrOutOfRangeDim,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind {
            ErrorKind::Empty => "reshape of an empty slice",
            ErrorKind::Total => "reshape target element count does not match source",
            ErrorKind::Incompatible => "stride layout cannot be expressed by the requested shape",
            ErrorKind::LengthMismatch => "zipped slices do not have matching lengths",
            ErrorKind::DuplicateOrOutOfRangeDim => "duplicate or out-of-range dimension index",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind, description)
    }
}

impl Error for ShapeError {}

pub(crate) fn empty() -> ShapeError {
    ShapeError::from_kind(ErrorKind::Empty)
}

pub(crate) fn total_mismatch() -> ShapeError {
    ShapeError::from_kind(ErrorKind::Total)
}

pub(crate) fn incompatible() -> ShapeError {
    ShapeError::from_kind(ErrorKind::Incompatible)
}

pub(crate) fn length_mismatch() -> ShapeError {
    ShapeError::from_kind(ErrorKind::LengthMismatch)
}

pub(crate) fn bad_dim() -> ShapeError {
    ShapeError::from_kind(ErrorKind::DuplicateOrOutOfRangeDim)
}
