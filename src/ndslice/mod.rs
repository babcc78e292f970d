//! The n-dimensional slice engine: zero-copy, strided
//! views over a linear backing store, built from a small stride-kind
//! lattice ([`kind`]), a cursor abstraction ([`iterator`]), random-access
//! value producers ([`field`]), and the pure view-producing operations
//! that compose them ([`topology`], [`lazy`]).
//!
//! Nothing under this module allocates except [`lazy::cached`]'s memo
//! table and the handful of `Field`s (e.g. [`field::Magic`]) whose values
//! can't be produced by a pure formula.

pub mod error;
pub mod field;
pub mod iterator;
pub mod kind;
pub mod lazy;
pub mod slice;
pub mod topology;

pub use error::{ErrorKind, ShapeError};
pub use field::Field;
pub use iterator::{Cursor, CursorDistance, CursorMut};
pub use kind::{Canonical, Contiguous, Kind, Universal};
pub use slice::Slice;
