//! Fields: random-access, possibly-infinite value producers with no cursor
//! state. A field is cheap to copy and duplicate; unlike a [`Cursor`], it
//! carries no position — every read is addressed by a full multi-index.

mod cartesian;
mod cycle;
mod iota;
mod kronecker;
mod linspace;
mod magic;
mod repeat;

pub use cartesian::{Cartesian2, Cartesian3};
pub use cycle::Cycle;
pub use iota::{Iota, NdIota};
pub use kronecker::{Kronecker2, Kronecker3};
pub use linspace::Linspace;
pub use magic::Magic;
pub use repeat::Repeat;

/// A random-access value producer over an `N`-dimensional index space.
///
/// Unlike [`Cursor`](super::iterator::Cursor), a `Field` has no notion of
/// "current position" — `at` is addressed by a full multi-index every
/// time, which is what lets `iota`-like fields be infinite (bounded work
/// only happens once a field is sliced to a finite shape).
pub trait Field<const N: usize>: Copy {
    type Item;

    fn at(&self, index: [usize; N]) -> Self::Item;
}
